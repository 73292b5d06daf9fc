//! Hyperlink construction for user resources.
//!
//! Links are absolute URLs templated from the configured public base URL and
//! the known route patterns.

use serde::Serialize;

/// Path prefix shared by every versioned API route.
pub const API_PREFIX: &str = "/api/v1";

/// A single hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// The `_links` object attached to a user representation.
#[derive(Debug, Clone, Serialize)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Link,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Link>,
}

/// Builds user and collection URLs against one base URL.
#[derive(Debug, Clone, Copy)]
pub struct LinkBuilder<'a> {
    base_url: &'a str,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    /// URL of the user collection, e.g. `http://host/api/v1/users`.
    pub fn collection(&self) -> Link {
        Link {
            href: format!("{}{}/users", self.base_url, API_PREFIX),
        }
    }

    /// URL of a single user.
    ///
    /// An entity without an id has no individual resource yet, so its
    /// link falls back to the collection URL.
    pub fn user(&self, id: Option<i64>) -> Link {
        match id {
            Some(id) => Link {
                href: format!("{}{}/users/{}", self.base_url, API_PREFIX, id),
            },
            None => self.collection(),
        }
    }

    /// `self` link only.
    pub fn self_only(&self, id: Option<i64>) -> UserLinks {
        UserLinks {
            self_link: self.user(id),
            users: None,
        }
    }

    /// `self` plus the `users` collection link.
    pub fn with_collection(&self, id: Option<i64>) -> UserLinks {
        UserLinks {
            self_link: self.user(id),
            users: Some(self.collection()),
        }
    }
}
