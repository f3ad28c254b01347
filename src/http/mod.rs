//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x subset: one request per connection, no
//! keep-alive, no chunked bodies, every response closes the connection.
//!
//! # Architecture
//!
//! - **`connection`**: one read, one response, then close
//! - **`parser`**: turns the raw bytes of a request into a [`request::Request`]
//! - **`request`**: request representation with an ordered, last-wins header map
//! - **`response`**: response representation with the fixed header set
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │    Read     │ ← single read of up to 4096 bytes
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │    Parse    │ ── malformed ──┐
//!        └──────┬──────┘                │
//!               ▼                       │
//!        ┌─────────────┐                │
//!        │  Dispatch   │                │
//!        └──────┬──────┘                │
//!               ▼                       │
//!        ┌─────────────┐                │
//!        │    Write    │                │
//!        └──────┬──────┘                │
//!               ▼                       ▼
//!        ┌──────────────────────────────────┐
//!        │              Closed              │
//!        └──────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use homebrew_web::http::connection::Connection;
//! use homebrew_web::site::{Site, StaticFiles};
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let site = Arc::new(Site::new(StaticFiles::new("static")));
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let site = Arc::clone(&site);
//!         tokio::spawn(Connection::new(socket, peer, site).run());
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
