//! Shared environment configuration for the server binary.
//!
//! Consolidates the `BOWLING_BASE_PATH` and `BOWLING_PORT` reads.

use std::path::PathBuf;

/// Read `BOWLING_BASE_PATH` (default `"."`), chdir, print path. Exits on failure.
pub fn init_base_path() -> PathBuf {
    let base_path = std::env::var("BOWLING_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    println!("BOWLING_BASE_PATH={}", base_path);
    let path = PathBuf::from(&base_path);
    if std::env::set_current_dir(&base_path).is_err() {
        eprintln!("Failed to change directory to {}", base_path);
        std::process::exit(1);
    }
    if let Ok(cwd) = std::env::current_dir() {
        println!("Working directory: {}", cwd.display());
    }
    path
}

/// Read `BOWLING_PORT` (default 8080).
pub fn server_port() -> u16 {
    std::env::var("BOWLING_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080)
}
