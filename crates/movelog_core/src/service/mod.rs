//! Movement use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the five caller-facing operations.
//! - Own caller-input validation and timestamp stamping.

pub mod movement_service;
