//! Serves the todo RPC procedures over HTTP.
//!
//! Usage:
//!
//! ```text
//! todo-server [--bind <addr>] [--store postgres|memory] [--database-url <url>] [--pool-size <n>]
//! ```
//!
//! Every flag falls back to an environment variable (`TODO_BIND`,
//! `TODO_STORE`, `DATABASE_URL`, `TODO_POOL_SIZE`), and a `.env` file in the
//! working directory is loaded first when present. The server stops
//! gracefully on Ctrl-C and closes the store before exiting.

use clap::Parser;
use mockable::DefaultClock;
use std::sync::Arc;
use todolist::{
    config::ServerArgs,
    rpc, telemetry,
    todo::{adapters::TodoStore, services::TodoService},
};
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let env_file = dotenvy::dotenv();
    let args = ServerArgs::parse();
    telemetry::init("info")?;
    match env_file {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "failed to load environment file"),
    }

    let store_config = args.store_config()?;
    tracing::debug!(config = ?store_config, "resolved store configuration");
    let store = Arc::new(TodoStore::open(&store_config).await?);
    let service = TodoService::new(Arc::clone(&store), Arc::new(DefaultClock));

    let listener = TcpListener::bind(args.bind).await?;
    rpc::serve(listener, rpc::router(service), rpc::shutdown_signal()).await?;

    let _closed = TodoStore::close(store);
    Ok(())
}
