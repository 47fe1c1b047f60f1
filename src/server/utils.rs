//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::FileDropError;
use tracing::{info, warn};

impl HttpServer {
    /// Resolves on Ctrl+C or SIGTERM
    pub async fn shutdown_signal() {
        let ctrl_c = async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C signal, shutting down gracefully"),
                Err(e) => warn!("Failed to install Ctrl+C handler: {}", e),
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                    info!("Received terminate signal, shutting down gracefully");
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
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

    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> FileDropError {
        let error_str = error.to_string();

        if error.kind() == std::io::ErrorKind::AddrInUse
            || error_str.contains("Address already in use")
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            FileDropError::server(format!(
                r#"Port {} is already in use.

  Use a different port:  --port {} or FILEDROP_PORT={}
  Check what's using it: lsof -i:{}"#,
                port,
                port.saturating_add(1),
                port.saturating_add(1),
                port
            ))
        } else if error.kind() == std::io::ErrorKind::PermissionDenied
            || error_str.contains("os error 13")
        {
            FileDropError::server(format!(
                r#"Permission denied for port {}.

  Use a port >= 1024 (non-privileged): --port 3000 or FILEDROP_PORT=3000"#,
                port
            ))
        } else {
            FileDropError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
