//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::api::links::UserLinks;
use crate::domain::entities::User;

/// Request body for create and update.
///
/// `id` is accepted but ignored on create. On update it only matters when no
/// record matches the path id: the echoed response then links to this id.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<UserPayload> for User {
    fn from(p: UserPayload) -> Self {
        User {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
        }
    }
}

/// Plain user representation.
#[derive(Debug, Clone, Serialize)]
pub struct UserItem {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        UserItem {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}

/// User representation with hyperlinks.
#[derive(Debug, Clone, Serialize)]
pub struct UserResource {
    #[serde(flatten)]
    pub user: UserItem,

    #[serde(rename = "_links")]
    pub links: UserLinks,
}

impl UserResource {
    pub fn new(user: User, links: UserLinks) -> Self {
        Self {
            user: user.into(),
            links,
        }
    }
}
