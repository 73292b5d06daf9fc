#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use users_api::application::services::UserService;
use users_api::domain::entities::User;
use users_api::domain::repositories::UserRepository;
use users_api::error::AppError;
use users_api::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

/// In-process stand-in for the PostgreSQL repository.
///
/// Ids are assigned from a counter starting at 1, mirroring `BIGSERIAL`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i64, User>>,
    next_id: AtomicI64,
    drop_writes: bool,
    unreachable: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    /// A store whose `save` reports that nothing was persisted.
    pub fn dropping_writes() -> Self {
        Self {
            drop_writes: true,
            ..Self::new()
        }
    }

    /// A store that fails every query.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().values().cloned().collect()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unreachable {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<Option<User>, AppError> {
        self.check()?;
        if self.drop_writes {
            return Ok(None);
        }

        let mut users = self.users.lock().unwrap();
        match user.id {
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let saved = user.with_id(id);
                users.insert(id, saved.clone());
                Ok(Some(saved))
            }
            Some(id) => match users.get_mut(&id) {
                Some(stored) => {
                    *stored = user;
                    Ok(Some(stored.clone()))
                }
                None => Ok(None),
            },
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.check()?;
        self.users.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn sample_user(first_name: &str) -> User {
    User::new(
        first_name.to_string(),
        "Tester".to_string(),
        format!("{}@example.com", first_name.to_lowercase()),
    )
}

/// Builds state over the given repository.
pub fn create_test_state(repository: Arc<dyn UserRepository>) -> AppState {
    let user_service = Arc::new(UserService::new(repository));
    AppState::new(user_service, BASE_URL)
}

/// Inserts users directly into the repository and returns them with their ids.
pub async fn seed_users(repository: &InMemoryUserRepository, names: &[&str]) -> Vec<User> {
    let mut seeded = Vec::with_capacity(names.len());
    for name in names {
        let saved = repository.save(sample_user(name)).await.unwrap().unwrap();
        seeded.push(saved);
    }
    seeded
}

pub async fn create_test_user_row(pool: &PgPool, first_name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (first_name, last_name, email) VALUES ($1, 'Tester', $2) RETURNING id",
    )
    .bind(first_name)
    .bind(format!("{}@example.com", first_name.to_lowercase()))
    .fetch_one(pool)
    .await
    .unwrap()
}
