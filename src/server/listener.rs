use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::Site;

/// Binds the listening socket with address reuse and the configured backlog.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = tokio::net::lookup_host(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("cannot resolve {}", cfg.server.listen_addr))?
        .next()
        .with_context(|| format!("no address for {}", cfg.server.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {addr}"))?;

    let listener = socket
        .listen(cfg.server.backlog)
        .with_context(|| format!("failed to listen on {addr}"))?;

    Ok(listener)
}

/// Binds and serves until the process is killed.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    info!("Listening on {}", listener.local_addr()?);

    let site = Arc::new(Site::from_config(cfg));
    serve(listener, site, cfg.dump_requests.clone()).await
}

/// Accepts connections forever, one spawned task per connection.
pub async fn serve(
    listener: TcpListener,
    site: Arc<Site>,
    dump_requests: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        let dump_requests = dump_requests.clone();
        tokio::spawn(async move {
            Connection::new(socket, peer, site)
                .dump_requests_to(dump_requests)
                .run()
                .await;
        });
    }
}
