use directory_backend::app::app::App;
use directory_backend::util::logger::Logger;
use dotenv::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Initialize tracing with console and rolling file output
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting User Directory Backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    // Create and start the App
    let app = App::new();
    app.start().await;
}
