use dotenvy::dotenv;
use isitcancelled::logging::init_tracing;
use isitcancelled::router::init_router;
use isitcancelled::state::init_app_state;
use isitcancelled_cache::CacheConfig;
use isitcancelled_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    info!("Starting IsItCancelled API v{}", env!("CARGO_PKG_VERSION"));

    let cache_config = CacheConfig::from_env();
    let state = match init_app_state(&cache_config) {
        Ok(state) => state,
        Err(e) => {
            error!(redis.address = %cache_config.address(), error = %e, "Invalid Redis configuration");
            std::process::exit(1);
        }
    };
    info!(redis.address = %cache_config.address(), "Using Redis cache");

    let app = init_router(state);

    let server_config = ServerConfig::default();
    let listener = match tokio::net::TcpListener::bind(server_config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %server_config.bind_addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(addr = %server_config.bind_addr, "Server listening");
    info!("API docs available at /swagger-ui and /scalar");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
