use std::sync::Arc;

use bowling::env_config::{init_base_path, server_port};
use bowling::server::create_router;
use bowling::storage::{load_players, save_players, PlayerStore};

const PLAYERS_FILE: &str = "data/players.json";

#[tokio::main]
async fn main() {
    init_base_path();
    println!("Starting bowling API server...");

    let store = Arc::new(PlayerStore::new());
    if !load_players(&store, PLAYERS_FILE) {
        println!("No saved players found, starting with an empty table.");
    }

    let app = create_router(store.clone());

    let port = server_port();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    println!("Server is running on port {}. Press Ctrl+C to stop.", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("\nStopping server...");
    save_players(&store, PLAYERS_FILE);
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
