use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Cancels `shutdown` on SIGINT or SIGTERM (ctrl-c elsewhere).
pub async fn shutdown_on_signal(shutdown: CancellationToken) {
    match wait_for_signal().await {
        Ok(signal) => {
            info!(signal, "Received signal, shutting down gracefully");
        }
        Err(e) => {
            error!(error = %e, "Failed to install signal handler, shutting down");
        }
    }
    shutdown.cancel();
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => Ok("SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
