//! User CRUD handlers
//!
//! Each operation is a single scan or mutation against the in-memory store.
//! Successful commits answer with a redirect to the list endpoint; lookups
//! that miss answer 404.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{Json, Redirect},
};
use std::sync::Arc;
use tracing::info;

use crate::api::server::RegistryServer;
use crate::api::types::{ErrorResponse, UserForm, UserView};

/// Redirect target after a successful commit.
const USERS_INDEX: &str = "/api/users";

fn not_found(id: i64) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("User {} not found", id),
            code: "USER_NOT_FOUND".to_string(),
        }),
    )
}

pub async fn list_users(State(state): State<Arc<RegistryServer>>) -> Json<Vec<UserView>> {
    let users = state.store.list().await;
    Json(users.into_iter().map(UserView::from).collect())
}

pub async fn get_user(
    State(state): State<Arc<RegistryServer>>,
    Path(id): Path<i64>,
) -> Result<Json<UserView>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.find_by_id(id).await {
        Some(user) => Ok(Json(user.into())),
        None => Err(not_found(id)),
    }
}

/// Empty form template for the create flow. No store effect.
pub async fn new_user() -> Json<UserForm> {
    Json(UserForm::default())
}

pub async fn create_user(
    State(state): State<Arc<RegistryServer>>,
    Json(payload): Json<UserForm>,
) -> Redirect {
    // The payload is stored as-is: no uniqueness check on the id, no field
    // validation. Duplicate ids shadow later entries on lookup.
    let user = payload.into_user();
    info!("Creating user {}", user.id);
    state.store.add(user).await;
    Redirect::to(USERS_INDEX)
}

pub async fn edit_user(
    State(state): State<Arc<RegistryServer>>,
    Path(id): Path<i64>,
) -> Result<Json<UserView>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.find_by_id(id).await {
        Some(user) => Ok(Json(user.into())),
        None => Err(not_found(id)),
    }
}

pub async fn update_user(
    State(state): State<Arc<RegistryServer>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserForm>,
) -> Result<Redirect, (StatusCode, Json<ErrorResponse>)> {
    // The lookup key comes from the path alone; an id carried in the payload
    // is ignored and the stored id is never rewritten.
    match state
        .store
        .update_fields(id, payload.name, payload.email)
        .await
    {
        Some(_) => {
            info!("Updated user {}", id);
            Ok(Redirect::to(USERS_INDEX))
        }
        None => Err(not_found(id)),
    }
}

pub async fn confirm_delete_user(
    State(state): State<Arc<RegistryServer>>,
    Path(id): Path<i64>,
) -> Result<Json<UserView>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.find_by_id(id).await {
        Some(user) => Ok(Json(user.into())),
        None => Err(not_found(id)),
    }
}

pub async fn delete_user(
    State(state): State<Arc<RegistryServer>>,
    Path(id): Path<i64>,
    _body: Bytes, // confirmation payload, accepted and ignored
) -> Result<Redirect, (StatusCode, Json<ErrorResponse>)> {
    match state.store.remove_by_id(id).await {
        Some(_) => {
            info!("Deleted user {}", id);
            Ok(Redirect::to(USERS_INDEX))
        }
        None => Err(not_found(id)),
    }
}
