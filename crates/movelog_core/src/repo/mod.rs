//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the store-boundary contract used by every operation.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Conditional semantics (`update` requires key existence) are enforced
//!   here, in a single transaction per operation.
//! - Repository APIs return semantic errors (`ConditionalCheckFailed`) in
//!   addition to store transport errors.

pub mod movement_repo;
