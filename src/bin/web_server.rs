use matrix_paths::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // A positional port argument overrides MATRIX_PATHS_PORT
    let mut config = ServerConfig::from_env();
    if let Some(arg) = env::args().nth(1) {
        config.port = arg.parse()?;
    }

    println!("Starting matrix paths web server");
    println!("  Address: {}", config.socket_addr());
    println!("  CORS enabled: {}", config.enable_cors);
    println!("  Max sessions: {}", config.max_sessions);
    println!();

    start_server(config).await?;

    Ok(())
}
