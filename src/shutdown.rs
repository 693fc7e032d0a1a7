use std::io;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

/// Wait up to `grace` for the server task to finish.
///
/// Returns `false` when the grace period elapsed and the task was aborted.
/// Connection tasks spawned by the server may still hold pooled
/// connections in that case, so callers must not wait on the pool.
pub async fn drain(serving: &mut JoinHandle<io::Result<()>>, grace: Duration) -> anyhow::Result<bool> {
    match tokio::time::timeout(grace, &mut *serving).await {
        Ok(joined) => {
            joined??;
            Ok(true)
        }
        Err(_) => {
            warn!("Grace period elapsed, dropping in-flight requests");
            serving.abort();
            Ok(false)
        }
    }
}

/// Resolves on Ctrl-C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
