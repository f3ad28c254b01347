use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::parse_http_request;
use crate::http::writer::ResponseWriter;
use crate::site::Site;

/// Size of the single read a connection gets. Anything the client sends
/// beyond this is never seen.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Handles one accepted connection: one read, one response, then close.
///
/// The stream is owned for the connection's whole life and dropped when
/// [`Connection::run`] returns, whatever happened before.
pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    site: Arc<Site>,
    dump_requests: Option<PathBuf>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, site: Arc<Site>) -> Self {
        Self {
            stream,
            peer,
            site,
            dump_requests: None,
        }
    }

    /// Writes every raw request to `path` before it is parsed.
    pub fn dump_requests_to(mut self, path: Option<PathBuf>) -> Self {
        self.dump_requests = path;
        self
    }

    /// Runs the request/response cycle and closes the stream.
    ///
    /// Failures are logged here and never returned; a request that cannot be
    /// parsed gets no response at all.
    pub async fn run(mut self) {
        if let Err(e) = self.serve_one().await {
            tracing::error!(peer = %self.peer, error = %format!("{e:#}"), "Error while handling request");
        }

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(peer = %self.peer, error = %e, "Shutdown after response failed");
        }
        tracing::info!(peer = %self.peer, "Connection closed");
    }

    async fn serve_one(&mut self) -> anyhow::Result<()> {
        let raw = self.read_request().await?;
        if raw.is_empty() {
            tracing::debug!(peer = %self.peer, "Client closed before sending a request");
            return Ok(());
        }

        if let Some(path) = &self.dump_requests {
            if let Err(e) = tokio::fs::write(path, &raw).await {
                tracing::warn!(file = %path.display(), error = %e, "Failed to dump request");
            }
        }

        let request = parse_http_request(&raw).context("HTTP parse error")?;
        let response = self.site.dispatch(&request).await;

        tracing::info!(
            peer = %self.peer,
            method = %request.method,
            path = %request.path,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "Request handled"
        );

        let mut writer = ResponseWriter::new(&response);
        writer
            .write_to_stream(&mut self.stream)
            .await
            .context("failed to send response")?;

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<BytesMut> {
        let mut temp = [0u8; READ_BUFFER_SIZE];
        let n = self
            .stream
            .read(&mut temp)
            .await
            .context("failed to read request")?;

        tracing::debug!(peer = %self.peer, bytes = n, "Read request");

        let mut buf = BytesMut::with_capacity(n);
        buf.extend_from_slice(&temp[..n]);
        Ok(buf)
    }
}
