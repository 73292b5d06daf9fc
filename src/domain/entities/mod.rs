//! Core domain entities.
//!
//! - [`User`] - The single managed resource

pub mod user;

pub use user::User;
