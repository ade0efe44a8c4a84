use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use reserva::server::{config::Config, model::app::AppState, router, startup};

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let app = router::routes()
        .with_state(AppState { db: db.clone() })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind port {}: {}", config.port, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on http://0.0.0.0:{}", config.port);
    tracing::info!("API documentation at /api/docs");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database connection: {}", e);
    }
}
