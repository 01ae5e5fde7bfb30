use dijkstra_sssp::web::server::{start_server_with_config, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();
    if let Some(port) = args.get(1) {
        config.port = port.parse()?;
    }
    if let Some(max_sessions) = args.get(2) {
        config.max_sessions = max_sessions.parse()?;
    }
    if let Some(max_vertices) = args.get(3) {
        config.max_vertices = max_vertices.parse()?;
    }

    info!(
        "starting with port={} cors={} max_sessions={} max_vertices={}",
        config.port, config.enable_cors, config.max_sessions, config.max_vertices
    );

    start_server_with_config(config).await
}
