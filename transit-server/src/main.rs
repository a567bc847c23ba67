use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_server::network::load_network;
use transit_server::planner::SearchConfig;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Network definition paths from environment, with local defaults
    let stations_path =
        std::env::var("STATIONS_CSV").unwrap_or_else(|_| "stations.csv".to_string());
    let segments_path =
        std::env::var("SEGMENTS_CSV").unwrap_or_else(|_| "segments.csv".to_string());

    let network = load_network(&stations_path, &segments_path).unwrap_or_else(|e| {
        eprintln!("Failed to load network from {stations_path} and {segments_path}: {e}");
        std::process::exit(1);
    });
    println!(
        "Loaded {} stations and {} segments",
        network.station_count(),
        network.segment_count()
    );

    let state = AppState::new(network, SearchConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health    - Health check");
    println!("  GET  /stations  - List stations");
    println!("  GET  /route     - Plan a route (?from=..&to=..)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
