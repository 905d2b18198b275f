//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::router::router;
use crate::config::Config;
use crate::error::Result;
use crate::service::CatalogService;

/// HTTP server for RecordCat
pub struct Server {
    config: Config,
    service: CatalogService,
    shutdown: Arc<Notify>,
}

/// Requests a graceful stop of a running [`Server`]
#[derive(Clone)]
pub struct ShutdownHandle {
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    /// Signal the server to stop accepting requests
    ///
    /// Safe to call before the server starts waiting; the signal is kept.
    pub fn shutdown(&self) {
        self.notify.notify_one();
    }
}

impl Server {
    /// Create a new server with the given config and service
    pub fn new(config: Config, service: CatalogService) -> Self {
        Self {
            config,
            service,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Handle for stopping the server from another task
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            notify: Arc::clone(&self.shutdown),
        }
    }

    /// Bind to the configured listen address
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        Ok(listener)
    }

    /// Bind and serve until Ctrl+C or a shutdown request
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl+C or a shutdown request
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local_addr: SocketAddr = listener.local_addr()?;
        tracing::info!("Listening on http://{}", local_addr);

        let app = router(self.service, &self.config);
        let shutdown = Arc::clone(&self.shutdown);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("Server on {} stopped", local_addr);
        Ok(())
    }
}

/// Resolves on Ctrl+C or when the shutdown handle fires
async fn shutdown_signal(notify: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        _ = notify.notified() => tracing::info!("Shutdown requested"),
    }
}
