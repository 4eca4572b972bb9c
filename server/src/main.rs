mod config;
mod routes;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use config::HostConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing filter from `RUST_LOG`, falling back to `info` when the variable
/// is unset or does not parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt().with_env_filter(log_filter(directives.as_deref())).init();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "calentasker listening");
    axum::serve(listener, app).await?;
    Ok(())
}
