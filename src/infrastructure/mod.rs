//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the repository traits defined by
//! the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
