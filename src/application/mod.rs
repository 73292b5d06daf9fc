//! Application layer services.
//!
//! Services consume repository traits and provide the API used by HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD pass-through

pub mod services;
