//! Movement record operations.
//!
//! # Responsibility
//! - Provide the five operations: list, create, update, delete, get.
//! - Validate caller input before any store call is made.
//! - Stamp `Created`/`Updated` on write paths.
//!
//! # Invariants
//! - Validation failures never reach the repository.
//! - `create` overwrites silently; `update` never creates.
//! - Results and errors travel on the `Result` channel; absence on `get`
//!   and `delete` is a successful `None`, never an error.

use crate::model::movement::{now_timestamp, Movement, MovementKey};
use crate::repo::movement_repo::{
    MovementPage, MovementPatch, MovementQuery, MovementRepository, RepoError,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page size applied when the caller does not ask for one.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

const OWNER_REQUIRED: &str = "Owner is a required field.";
const NAME_REQUIRED: &str = "Name is a required field.";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-facing operation error.
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed request: a required field is missing (`Owner` on list).
    BadRequest(&'static str),
    /// Key-field precondition broken (`Name`/`Owner` missing on update);
    /// raised before any store call.
    InvariantViolation(&'static str),
    /// Store-side failure, propagated unchanged.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "{message}"),
            Self::InvariantViolation(message) => write!(f, "{message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Request shape for `list_movements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMovementsRequest {
    /// Partition to list. Required.
    pub owner: String,
    /// Page size; `None` (or an explicit zero) falls back to the default.
    pub limit: Option<u32>,
    /// Continuation token from the previous page, replayed verbatim.
    pub offset: Option<MovementKey>,
}

/// Request shape for `create_movement`. `Created`/`Updated` are computed,
/// never accepted from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMovementRequest {
    pub owner: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub description: String,
    pub details: String,
}

/// Request shape for `update_movement`. Only mutable fields are applied;
/// `Created` is untouchable through this operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMovementRequest {
    pub owner: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub description: String,
    pub details: String,
}

/// Use-case service for movement record operations.
///
/// Holds one repository handle; callers inject the store boundary
/// explicitly, so tests can substitute doubles for it.
pub struct MovementService<R: MovementRepository> {
    repo: R,
}

impl<R: MovementRepository> MovementService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists one page of an owner's records in native key order.
    ///
    /// # Contract
    /// - Fails with `BadRequest` when `Owner` is absent.
    /// - Returns at most `Limit` items (default 10) plus a continuation
    ///   token when more results exist.
    pub fn list_movements(&self, request: &ListMovementsRequest) -> ServiceResult<MovementPage> {
        if request.owner.is_empty() {
            return Err(ServiceError::BadRequest(OWNER_REQUIRED));
        }

        let limit = match request.limit {
            None | Some(0) => DEFAULT_LIST_LIMIT,
            Some(limit) => limit,
        };

        let query = MovementQuery {
            owner: request.owner.clone(),
            limit,
            exclusive_start: request.offset.clone(),
        };

        Ok(self.repo.query_movements(&query)?)
    }

    /// Inserts a record, stamping `Created` and `Updated` to now.
    ///
    /// # Contract
    /// - An existing record at the same key is silently overwritten.
    /// - No pre-validation: an empty key component surfaces the store's
    ///   own key constraint failure.
    /// - Returns the inserted record.
    pub fn create_movement(&mut self, request: &CreateMovementRequest) -> ServiceResult<Movement> {
        let movement = Movement::stamped(
            request.owner.clone(),
            request.name.clone(),
            request.kind.clone(),
            request.description.clone(),
            request.details.clone(),
            &now_timestamp(),
        );

        self.repo.put_movement(&movement)?;
        Ok(movement)
    }

    /// Conditionally updates the mutable fields of an existing record.
    ///
    /// # Contract
    /// - Fails with `InvariantViolation` when `Name` or `Owner` is absent,
    ///   before any store call.
    /// - Fails with `ConditionalCheckFailed` when no record exists at the
    ///   key; never creates one.
    /// - Returns the full post-update record with a fresh `Updated` stamp.
    pub fn update_movement(&mut self, request: &UpdateMovementRequest) -> ServiceResult<Movement> {
        if request.name.is_empty() {
            return Err(ServiceError::InvariantViolation(NAME_REQUIRED));
        }
        if request.owner.is_empty() {
            return Err(ServiceError::InvariantViolation(OWNER_REQUIRED));
        }

        let key = MovementKey {
            owner: request.owner.clone(),
            name: request.name.clone(),
        };
        let patch = MovementPatch {
            kind: request.kind.clone(),
            description: request.description.clone(),
            details: request.details.clone(),
            updated: now_timestamp(),
        };

        Ok(self.repo.update_movement(&key, &patch)?)
    }

    /// Deletes the record at `key`, returning its prior value.
    ///
    /// Deleting a nonexistent key is a no-op success returning `None`.
    pub fn delete_movement(&mut self, key: &MovementKey) -> ServiceResult<Option<Movement>> {
        Ok(self.repo.delete_movement(key)?)
    }

    /// Fetches the single record at `key`; absence is `Ok(None)`.
    pub fn get_movement(&self, key: &MovementKey) -> ServiceResult<Option<Movement>> {
        Ok(self.repo.get_movement(key)?)
    }
}
