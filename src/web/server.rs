use axum::{
    http::{header, Method},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub session_timeout_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            session_timeout_minutes: 60,
        }
    }
}

/// Build the application router for a configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_limits(config.max_sessions, config.session_timeout_minutes);
    let app = Router::new().merge(create_router()).with_state(app_state);

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server on the given port with default settings
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::new(config.host, config.port);
    log::info!("travel time server listening on http://{}", addr);
    log::info!("API health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
