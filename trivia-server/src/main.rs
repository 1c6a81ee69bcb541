//! trivia-server binary: parse flags, connect, migrate, serve

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivia_server::db::{create_pool, migrations};
use trivia_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "trivia-server",
    version,
    about = "HTTP backend for the trivia quiz application"
)]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Database URL (falls back to the DATABASE_URL environment variable)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads the environment.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let args = Args::parse();
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the environment")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
