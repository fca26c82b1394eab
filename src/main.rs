use axum::{
    routing::{get, post},
    Extension, Router,
};
use lab_directory::catalog::store::LabStore;
use lab_directory::contact::handlers::{handle_contact, handle_download_report};
use lab_directory::search::handlers::{handle_health, handle_labs_search};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data" => {
                data_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let (bind_addr, data_path) = match (bind_addr, data_path) {
        (Some(bind), Some(data)) => (bind, data),
        _ => {
            eprintln!("Usage: {} --bind <addr:port> --data <labs.json>", args[0]);
            eprintln!("Example: {} --bind 127.0.0.1:4000 --data data/labs.json", args[0]);
            std::process::exit(1);
        }
    };

    // 1. Load the dataset once; it is immutable for the process lifetime.
    let store = Arc::new(LabStore::load(&data_path)?);

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/labs-search", get(handle_labs_search))
        .route("/api/health", get(handle_health))
        .route("/api/contact", post(handle_contact))
        .route("/api/download-report", post(handle_download_report))
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
