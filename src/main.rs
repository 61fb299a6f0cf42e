use dotenvy::dotenv;
use tracing::{error, info};

use learnhub::learnhub_config::{DatabaseConfig, ServerConfig};
use learnhub::logging::init_tracing;
use learnhub::router::init_router;
use learnhub::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    let _log_guard = init_tracing(&server_config.log_dir);

    let Some(db_config) = DatabaseConfig::from_env() else {
        error!("DATABASE_URL must be set");
        std::process::exit(1);
    };

    let state = match init_app_state(&db_config).await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to initialize database");
            std::process::exit(1);
        }
    };

    let app = init_router(state);

    let addr = server_config.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
