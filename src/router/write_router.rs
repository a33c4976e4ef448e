use axum::{
    routing::{post, put},
    Router,
};
use std::sync::Arc;

use crate::handler::write_handler::{add_user_handler, delete_user_handler, update_user_handler};
use crate::service::user_service::UserServiceImpl;

pub fn write_router(service: Arc<UserServiceImpl>) -> Router {
    Router::new()
        .route("/adduser", post(add_user_handler))
        .route(
            "/user/{id}",
            put(update_user_handler).delete(delete_user_handler),
        )
        .with_state(service)
}
