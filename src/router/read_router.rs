use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::read_handler::{
    get_user_by_id_handler, get_user_by_username_handler, list_usernames_handler,
    list_users_handler, search_by_email_domain_handler,
};
use crate::service::user_service::UserServiceImpl;

pub fn read_router(service: Arc<UserServiceImpl>) -> Router {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/usernames", get(list_usernames_handler))
        .route("/username/{name}", get(get_user_by_username_handler))
        .route("/user/{id}", get(get_user_by_id_handler))
        .route("/search/email/{domain}", get(search_by_email_domain_handler))
        .with_state(service)
}
