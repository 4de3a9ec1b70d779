use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, Site};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        root = %cfg.static_files.root.display(),
        "Listening on {}", cfg.server.listen_addr
    );

    serve(listener, Arc::new(Site::from_config(cfg))).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = site.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site);
            match conn.run().await {
                Ok(()) => tracing::debug!("Done handling connection from {}", peer),
                Err(e) => tracing::error!("Connection error from {}: {:#}", peer, e),
            }
        });
    }
}
