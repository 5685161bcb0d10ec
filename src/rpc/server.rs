//! Serving loop for the RPC router.

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before the function returns.
///
/// # Errors
///
/// Returns an I/O error if the listener address cannot be read or the
/// accept loop fails.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;
    tracing::info!(%address, "todo rpc server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("todo rpc server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
///
/// If the signal handler cannot be installed the future never resolves,
/// so the server keeps running.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "failed to install shutdown signal handler");
            std::future::pending::<()>().await;
        }
    }
}
