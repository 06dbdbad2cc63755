mod app;
mod auth;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, auth::Session, config::Config, state::AppState};

/// Eventline - schedule events with your community
#[derive(Parser, Debug)]
#[command(name = "eventline")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventline=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let state = build_state(&config).await?;
    seed_dev_session(&state, &config).await;

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "sqlite")]
async fn build_state(config: &Config) -> Result<AppState> {
    tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
    Ok(AppState::sqlite(&config.sqlite_path).await?)
}

#[cfg(not(feature = "sqlite"))]
async fn build_state(_config: &Config) -> Result<AppState> {
    tracing::info!("Using in-memory storage");
    Ok(AppState::in_memory())
}

/// Seed a session from configuration so the server is usable without an
/// identity provider. Without a configured token, a fresh one is issued
/// and logged so mutating requests can still be authenticated.
async fn seed_dev_session(state: &AppState, config: &Config) {
    let user = eventline_core::event::User::new(config.dev_user.clone());
    match &config.dev_token {
        Some(token) => {
            let session = Session::new(token.clone(), user, config.session_ttl());
            state.sessions.insert(session).await;
            tracing::info!(user = %config.dev_user, "Seeded development session");
        }
        None => {
            let token = state.sessions.issue(user, config.session_ttl()).await;
            tracing::info!(user = %config.dev_user, %token, "Issued development session");
        }
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
