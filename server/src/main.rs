use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use termdoc_core::StopwordSet;
use termdoc_server::build_app;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Stopword file (one word per line) replacing the built-in English list
    #[arg(long)]
    stopwords: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let stopwords = match &args.stopwords {
        Some(path) => StopwordSet::from_file(path)?,
        None => StopwordSet::english(),
    };
    tracing::info!(stopwords = stopwords.len(), "loaded stopword set");
    let app: Router = build_app(stopwords);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
