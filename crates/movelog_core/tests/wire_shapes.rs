use movelog_core::{
    CreateMovementRequest, ListMovementsRequest, Movement, MovementKey, MovementPage,
};
use serde_json::json;

#[test]
fn movement_serializes_with_wire_field_names() {
    let movement = Movement::stamped(
        "u1",
        "Test System",
        "SYSTEM",
        "desc",
        "1. a\n1. b",
        "2026-01-02T03:04:05.006Z",
    );

    let value = serde_json::to_value(&movement).unwrap();
    assert_eq!(
        value,
        json!({
            "Owner": "u1",
            "Name": "Test System",
            "Type": "SYSTEM",
            "Description": "desc",
            "Details": "1. a\n1. b",
            "Created": "2026-01-02T03:04:05.006Z",
            "Updated": "2026-01-02T03:04:05.006Z",
        })
    );
}

#[test]
fn list_request_deserializes_with_defaults() {
    let request: ListMovementsRequest = serde_json::from_value(json!({"Owner": "u1"})).unwrap();
    assert_eq!(request.owner, "u1");
    assert_eq!(request.limit, None);
    assert_eq!(request.offset, None);
}

#[test]
fn list_request_accepts_continuation_token_as_offset() {
    let request: ListMovementsRequest = serde_json::from_value(json!({
        "Owner": "u1",
        "Limit": 2,
        "Offset": {"Owner": "u1", "Name": "b"},
    }))
    .unwrap();

    assert_eq!(request.limit, Some(2));
    let offset = request.offset.unwrap();
    assert_eq!(offset.owner, "u1");
    assert_eq!(offset.name, "b");
}

#[test]
fn create_request_defaults_free_form_fields_to_empty() {
    let request: CreateMovementRequest =
        serde_json::from_value(json!({"Owner": "u1", "Name": "Armbar"})).unwrap();
    assert_eq!(request.owner, "u1");
    assert_eq!(request.name, "Armbar");
    assert_eq!(request.kind, "");
    assert_eq!(request.description, "");
    assert_eq!(request.details, "");
}

#[test]
fn page_serializes_continuation_token_only_when_present() {
    let item = Movement::stamped("u1", "a", "", "", "", "2026-01-01T00:00:00.000Z");

    let truncated = MovementPage {
        count: 1,
        items: vec![item.clone()],
        last_evaluated: Some(MovementKey {
            owner: "u1".to_string(),
            name: "a".to_string(),
        }),
    };
    let value = serde_json::to_value(&truncated).unwrap();
    assert_eq!(value["Count"], 1);
    assert_eq!(value["Items"][0]["Name"], "a");
    assert_eq!(value["LastEvaluatedKey"]["Name"], "a");

    let complete = MovementPage {
        count: 1,
        items: vec![item],
        last_evaluated: None,
    };
    let value = serde_json::to_value(&complete).unwrap();
    assert!(value.get("LastEvaluatedKey").is_none());
}
