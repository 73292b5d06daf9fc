//! User management service.

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Thin service over [`UserRepository`].
///
/// Each method is a single repository call. Existence checks and response
/// shaping belong to the HTTP handlers.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists every stored user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Stores a new user. Any id carried by `user` is discarded.
    ///
    /// Returns `Ok(None)` if the store did not return a persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, user: User) -> Result<Option<User>, AppError> {
        self.repository.save(User { id: None, ..user }).await
    }

    /// Replaces the stored fields of `user` (matched by its id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, user: User) -> Result<Option<User>, AppError> {
        self.repository.save(user).await
    }

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }

    /// Verifies storage connectivity for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use serde_json::json;

    fn create_test_user(id: i64, first_name: &str) -> User {
        User::new(
            first_name.to_string(),
            "Tester".to_string(),
            format!("{}@example.com", first_name.to_lowercase()),
        )
        .with_id(id)
    }

    #[tokio::test]
    async fn test_get_all_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![create_test_user(1, "Ada"), create_test_user(2, "Grace")];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_all_users().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_by_id_found() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(7, "Ada");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user_by_id(7).await.unwrap();

        assert_eq!(result.unwrap().first_name, "Ada");
    }

    #[tokio::test]
    async fn test_get_user_by_id_missing() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.get_user_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_user_discards_client_id() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_save()
            .withf(|user| user.id.is_none())
            .times(1)
            .returning(|user| Ok(Some(user.with_id(1))));

        let service = UserService::new(Arc::new(mock_repo));

        let created = service
            .create_user(create_test_user(500, "Ada"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_create_user_store_returns_nothing() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_save().times(1).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(User::new(
                "Ada".to_string(),
                "Lovelace".to_string(),
                "ada@example.com".to_string(),
            ))
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_keeps_id() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_save()
            .withf(|user| user.id == Some(3) && user.first_name == "Renamed")
            .times(1)
            .returning(|user| Ok(Some(user)));

        let service = UserService::new(Arc::new(mock_repo));

        let updated = service
            .update_user(create_test_user(3, "Renamed"))
            .await
            .unwrap();

        assert_eq!(updated.unwrap().id, Some(3));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user(4).await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_all_users().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
