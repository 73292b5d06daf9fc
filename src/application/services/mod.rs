//! Services for the application layer.

pub mod user_service;

pub use user_service::UserService;
