use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Clinica";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn default_log_filter() -> &'static str {
    "info,clinica=debug"
}

/// Get the application data directory
/// ~/Clinica/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Clinica")
}

/// Database path: `CLINICA_DB` env var, or the default under the app
/// data directory.
pub fn database_path() -> PathBuf {
    std::env::var("CLINICA_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| app_data_dir().join("clinica.db"))
}

/// Bind address: `CLINICA_ADDR` env var, default 127.0.0.1:8080.
pub fn bind_addr() -> SocketAddr {
    std::env::var("CLINICA_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)))
}

/// CORS origin for the web front end: `CLINICA_CORS_ORIGIN` env var.
/// Unset means a permissive CORS policy.
pub fn cors_origin() -> Option<String> {
    std::env::var("CLINICA_CORS_ORIGIN").ok()
}
