use std::env;
use travel_time::web::server::{start_server_with_config, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting travel time server...");
    println!("   Address: {}:{}", config.host, config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Session timeout: {} minutes", config.session_timeout_minutes);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
