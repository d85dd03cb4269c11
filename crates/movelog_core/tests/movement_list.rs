use movelog_core::{
    open_store_in_memory, CreateMovementRequest, ListMovementsRequest, MovementService,
    ServiceError, SqliteMovementRepository,
};

fn insert(
    service: &mut MovementService<SqliteMovementRepository<'_>>,
    owner: &str,
    name: &str,
) {
    service
        .create_movement(&CreateMovementRequest {
            owner: owner.to_string(),
            name: name.to_string(),
            kind: "SYSTEM".to_string(),
            description: format!("{name} description"),
            details: String::new(),
        })
        .unwrap();
}

fn list_request(owner: &str) -> ListMovementsRequest {
    ListMovementsRequest {
        owner: owner.to_string(),
        ..ListMovementsRequest::default()
    }
}

#[test]
fn list_requires_owner() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let service = MovementService::new(repo);

    let err = service
        .list_movements(&ListMovementsRequest::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::BadRequest(_)));
}

#[test]
fn list_scopes_results_to_owner() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let mut service = MovementService::new(repo);

    for name in ["Armbar", "Guard Pass", "Sweep"] {
        insert(&mut service, "u1", name);
    }
    for name in ["Armbar", "Triangle"] {
        insert(&mut service, "u2", name);
    }

    let page = service.list_movements(&list_request("u1")).unwrap();
    assert_eq!(page.count, 3);
    assert_eq!(page.items.len(), 3);
    assert!(page.items.iter().all(|item| item.owner == "u1"));
    assert!(page.last_evaluated.is_none());
}

#[test]
fn list_returns_records_in_native_key_order() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let mut service = MovementService::new(repo);

    for name in ["Sweep", "Armbar", "Guard Pass"] {
        insert(&mut service, "u1", name);
    }

    let page = service.list_movements(&list_request("u1")).unwrap();
    let names: Vec<&str> = page.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Armbar", "Guard Pass", "Sweep"]);
}

#[test]
fn list_applies_default_limit_of_ten() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let mut service = MovementService::new(repo);

    for index in 0..12 {
        insert(&mut service, "u1", &format!("m{index:02}"));
    }

    let page = service.list_movements(&list_request("u1")).unwrap();
    assert_eq!(page.count, 10);
    let token = page.last_evaluated.expect("more results should remain");
    assert_eq!(token.name, "m09");
}

#[test]
fn zero_limit_falls_back_to_default() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let mut service = MovementService::new(repo);

    for index in 0..12 {
        insert(&mut service, "u1", &format!("m{index:02}"));
    }

    let request = ListMovementsRequest {
        limit: Some(0),
        ..list_request("u1")
    };
    let page = service.list_movements(&request).unwrap();
    assert_eq!(page.count, 10);
}

#[test]
fn list_paginates_with_continuation_token() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let mut service = MovementService::new(repo);

    for name in ["a", "b", "c", "d", "e"] {
        insert(&mut service, "u1", name);
    }

    let first = service
        .list_movements(&ListMovementsRequest {
            limit: Some(2),
            ..list_request("u1")
        })
        .unwrap();
    assert_eq!(first.count, 2);
    let first_names: Vec<&str> = first.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(first_names, ["a", "b"]);
    let token = first.last_evaluated.clone().expect("token after first page");
    assert_eq!(token.name, "b");

    let second = service
        .list_movements(&ListMovementsRequest {
            limit: Some(2),
            offset: first.last_evaluated,
            ..list_request("u1")
        })
        .unwrap();
    let second_names: Vec<&str> = second.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(second_names, ["c", "d"]);

    let third = service
        .list_movements(&ListMovementsRequest {
            limit: Some(2),
            offset: second.last_evaluated,
            ..list_request("u1")
        })
        .unwrap();
    let third_names: Vec<&str> = third.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(third_names, ["e"]);
    assert!(third.last_evaluated.is_none());
}

#[test]
fn exact_page_boundary_returns_no_token() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let mut service = MovementService::new(repo);

    insert(&mut service, "u1", "a");
    insert(&mut service, "u1", "b");

    let page = service
        .list_movements(&ListMovementsRequest {
            limit: Some(2),
            ..list_request("u1")
        })
        .unwrap();
    assert_eq!(page.count, 2);
    assert!(page.last_evaluated.is_none());
}

#[test]
fn list_of_empty_partition_is_empty_success() {
    let mut conn = open_store_in_memory().unwrap();
    let repo = SqliteMovementRepository::try_new(&mut conn).unwrap();
    let service = MovementService::new(repo);

    let page = service.list_movements(&list_request("nobody")).unwrap();
    assert_eq!(page.count, 0);
    assert!(page.items.is_empty());
    assert!(page.last_evaluated.is_none());
}
