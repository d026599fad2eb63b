use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::routes;
use crate::store::MovieStore;

/// HTTP server over a shared movie store
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<MovieStore>,
}

impl Server {
    /// Bind the server to the given address over an existing store
    pub async fn bind(addr: &str, store: Arc<MovieStore>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until the process is stopped
    pub async fn run(self) -> std::io::Result<()> {
        info!("Server started, listening on {}", self.local_addr);
        axum::serve(self.listener, routes::router(self.store)).await
    }
}
