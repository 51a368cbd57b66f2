//! `/users` handlers.

use super::{ApiError, AppState, Deleted};
use crate::clients::ActorClient;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// `GET /users?search=` - every user, or those whose name, email or phone contains the term.
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .list_users(params.search.as_deref())
        .await
        .map_err(|e| state.user_error(e))?;
    Ok(Json(users))
}

/// `GET /users/{user_id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .get(user_id)
        .await
        .map_err(|e| state.user_error(e))?
        .map(Json)
        .ok_or_else(|| state.not_found("User"))
}

/// `POST /users` - id and username are assigned by the store.
pub async fn create_user(
    State(state): State<AppState>,
    Json(params): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .create_user(params)
        .await
        .map_err(|e| state.user_error(e))?;
    Ok(Json(user))
}

/// `PUT /users/{user_id}` - full replace; an empty username keeps the stored one.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .update_user(user_id, update)
        .await
        .map_err(|e| state.user_error(e))?;
    Ok(Json(user))
}

/// `DELETE /users/{user_id}` - succeeds whether or not the user existed.
/// The user's courses are left alone.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Deleted>, ApiError> {
    state
        .users
        .delete(user_id)
        .await
        .map_err(|e| state.user_error(e))?;
    Ok(Json(Deleted::new()))
}
