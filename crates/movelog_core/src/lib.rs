//! Core domain logic for the movelog movement record service.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{store_config_from_env, ConfigError, StoreConfig, STORE_PATH_ENV};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::movement::{now_timestamp, Movement, MovementKey};
pub use repo::movement_repo::{
    MovementPage, MovementPatch, MovementQuery, MovementRepository, RepoError, RepoResult,
    SqliteMovementRepository,
};
pub use service::movement_service::{
    CreateMovementRequest, ListMovementsRequest, MovementService, ServiceError, ServiceResult,
    UpdateMovementRequest,
};
pub use store::{open_store, open_store_in_memory, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
