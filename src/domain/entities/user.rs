//! Domain entity representing a user.

/// A user record.
///
/// `id` is assigned by storage on first save and never changes afterward.
/// A `User` with `id: None` has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Creates an unsaved user.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new("Ada".to_string(), "Lovelace".to_string(), "ada@example.com".to_string());
    /// assert!(user.id.is_none());
    /// ```
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
        }
    }

    /// Returns the same user carrying the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
