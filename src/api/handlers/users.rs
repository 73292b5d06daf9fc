//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::user::{UserItem, UserPayload, UserResource};
use crate::api::links::LinkBuilder;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Maximum number of users returned by the list endpoint.
pub const USER_LIST_LIMIT: usize = 5;

/// Lists users.
///
/// # Endpoint
///
/// `GET /api/v1/users`
///
/// Returns at most [`USER_LIST_LIMIT`] users, each with `self` and `users` links.
///
/// # Errors
///
/// Returns 404 if no users exist.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResource>>, AppError> {
    let links = LinkBuilder::new(&state.public_base_url);

    let users: Vec<UserResource> = state
        .user_service
        .get_all_users()
        .await?
        .into_iter()
        .take(USER_LIST_LIMIT)
        .map(|user| {
            let user_links = links.with_collection(user.id);
            UserResource::new(user, user_links)
        })
        .collect();

    if users.is_empty() {
        return Err(AppError::not_found("No users found", json!({})));
    }

    Ok(Json(users))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has this id.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResource>, AppError> {
    let user = state
        .user_service
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Record not found.", json!({ "id": id })))?;

    let links = LinkBuilder::new(&state.public_base_url).with_collection(Some(id));

    Ok(Json(UserResource::new(user, links)))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/v1/users`
///
/// Any `id` in the body is ignored; storage assigns one.
///
/// # Errors
///
/// Returns 502 if the store does not hand back a persisted user.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResource>), AppError> {
    let created = match state.user_service.create_user(payload.into()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Err(AppError::bad_gateway(
                "User was not saved",
                json!({ "reason": "store returned no record" }),
            ));
        }
        Err(e) => {
            tracing::warn!(error = %e, "User save failed");
            return Err(AppError::bad_gateway(
                "User was not saved",
                json!({ "reason": e.to_string() }),
            ));
        }
    };

    tracing::info!(id = ?created.id, "User created");

    let links = LinkBuilder::new(&state.public_base_url).self_only(created.id);

    Ok((StatusCode::CREATED, Json(UserResource::new(created, links))))
}

/// Replaces a user's fields.
///
/// # Endpoint
///
/// `PUT /api/v1/users/{id}`
///
/// When a user with the path id exists, the payload is saved under that id.
/// Otherwise nothing is written. Either way the payload is echoed back with
/// a `self` link built from the payload's own id, which may differ from
/// the path id (or be absent) when no record matched.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResource>, AppError> {
    let mut user = User::from(payload);

    if let Some(existing) = state.user_service.get_user_by_id(id).await? {
        user.id = existing.id;
        state.user_service.update_user(user.clone()).await?;
        tracing::info!(id, "User updated");
    } else {
        tracing::debug!(id, "No user to update, echoing payload");
    }

    let links = LinkBuilder::new(&state.public_base_url).self_only(user.id);

    Ok(Json(UserResource::new(user, links)))
}

/// Deletes a user and returns its last stored state.
///
/// # Endpoint
///
/// `DELETE /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has this id.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state
        .user_service
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Record not found.", json!({ "id": id })))?;

    state.user_service.delete_user(id).await?;
    tracing::info!(id, "User deleted");

    Ok(Json(user.into()))
}
