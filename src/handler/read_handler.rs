use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

// Read all users
pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service
        .list_users()
        .await
        .map_err(|e| HandlerError::from_service(e, "Error reading users"))?;
    Ok(Json(users))
}

// Read all usernames
pub async fn list_usernames_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let usernames = service
        .list_usernames()
        .await
        .map_err(|e| HandlerError::from_service(e, "Error reading users"))?;
    Ok(Json(usernames))
}

// Read a specific user by username (case-sensitive)
pub async fn get_user_by_username_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let contact = service
        .find_by_username(&name)
        .await
        .map_err(|e| HandlerError::from_service(e, "Error reading users"))?;
    Ok(Json(contact))
}

// Read a specific user by id
pub async fn get_user_by_id_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    // A non-numeric id matches nothing
    let Ok(id) = id.parse::<i64>() else {
        return Err(HandlerError::not_found("User not found"));
    };
    let user = service
        .find_by_id(id)
        .await
        .map_err(|e| HandlerError::from_service(e, "Error reading users"))?;
    Ok(Json(user))
}

// Search users by email domain (case-insensitive suffix match)
pub async fn search_by_email_domain_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(domain): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service
        .search_by_email_domain(&domain)
        .await
        .map_err(|e| HandlerError::from_service(e, "Error reading users"))?;
    Ok(Json(users))
}
