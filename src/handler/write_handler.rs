use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::model::user::User;
use crate::service::user_service::{UserDraft, UserService, UserServiceImpl};
use crate::util::error::HandlerError;
use crate::util::extract::JsonOrForm;

/// Candidate fields for an add or update. `id` stays loosely typed because
/// clients send it as either a string or a number.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UpsertUserRequest> for UserDraft {
    fn from(req: UpsertUserRequest) -> Self {
        UserDraft {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            email: req.email,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct MutationResponse {
    pub message: String,
    pub user: User,
}

// Add a new user
pub async fn add_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    JsonOrForm(payload): JsonOrForm<UpsertUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service
        .add_user(payload.into())
        .await
        .map_err(|e| HandlerError::from_service(e, "Error saving user"))?;
    Ok(Json(MutationResponse {
        message: "User added successfully".to_string(),
        user,
    }))
}

// Update a user
pub async fn update_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
    JsonOrForm(payload): JsonOrForm<UpsertUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(HandlerError::not_found("User not found"));
    };
    let user = service
        .update_user(id, payload.into())
        .await
        .map_err(|e| HandlerError::from_service(e, "Error updating user"))?;
    Ok(Json(MutationResponse {
        message: "User updated successfully".to_string(),
        user,
    }))
}

// Delete a user
pub async fn delete_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(HandlerError::not_found("User not found"));
    };
    let user = service
        .delete_user(id)
        .await
        .map_err(|e| HandlerError::from_service(e, "Error deleting user"))?;
    Ok(Json(MutationResponse {
        message: "User deleted successfully".to_string(),
        user,
    }))
}
