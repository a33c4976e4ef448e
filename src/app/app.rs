use axum::{
    http::HeaderValue,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::config::app_conf::AppConfig;
use crate::config::store_conf::StoreConfig;
use crate::repository::user_repo::{FileUserRepository, UserRepository};
use crate::router::read_router::read_router;
use crate::router::write_router::write_router;
use crate::service::user_service::UserServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_service: Arc<UserServiceImpl>,
}

impl App {
    pub fn new() -> Self {
        let config = AppConfig::from_env().expect("App config error");
        let store_config = StoreConfig::from_env();

        let user_repo =
            Arc::new(FileUserRepository::new(&store_config)) as Arc<dyn UserRepository>;
        let user_service = Arc::new(UserServiceImpl::new(user_repo));

        let mut app = App {
            config,
            router: Router::new(),
            user_service,
        };
        app.router = app.create_router();
        app
    }

    fn create_router(&self) -> Router {
        let origin: HeaderValue = self
            .config
            .allowed_origin
            .parse()
            .expect("Invalid ALLOWED_ORIGIN");
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(health_handler))
            .route("/ui", get(ui_handler))
            .nest("/read", read_router(self.user_service.clone()))
            .nest("/write", write_router(self.user_service.clone()))
            .layer(cors)
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                error!("Port {} is already in use", self.config.port);
                std::process::exit(1);
            }
            Err(e) => {
                error!("Failed to bind {}: {}", addr, e);
                std::process::exit(1);
            }
        };
        info!("🚀 Server running at http://{}", addr);
        if let Err(e) = axum::serve(listener, self.router).await {
            error!("Server error: {}", e);
            std::process::exit(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// API health check
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "User API is running" }))
}

// Embedded single-page directory UI
async fn ui_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
