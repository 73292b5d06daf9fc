use std::sync::Arc;

use crate::application::services::UserService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    /// Scheme and authority used to build absolute hyperlinks,
    /// e.g. `http://localhost:3000` (no trailing slash).
    pub public_base_url: Arc<str>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, public_base_url: &str) -> Self {
        Self {
            user_service,
            public_base_url: Arc::from(public_base_url.trim_end_matches('/')),
        }
    }
}
