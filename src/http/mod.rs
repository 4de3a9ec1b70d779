//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 responder: one request per connection, no
//! keep-alive, no request bodies, no chunked encoding.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine and the shared [`connection::Site`]
//! - **`parser`**: Reads the request head and tokenizes the request line
//! - **`request`**: Request line and method types
//! - **`resolver`**: Maps the request target onto the document root
//! - **`mime`**: Content type selection from a fixed extension table
//! - **`template`**: `<cs371date>` / `<cs371server>` substitution for text files
//! - **`response`**: Status codes, header synthesis, fixed pages
//! - **`writer`**: Body preparation and writing the response to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read request line, discard headers
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Resolving  │ ← Root / Found / Missing
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Preparing  │ ← Open or render the body, pick status and type
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Writing   │ ← Head, then body, then flush and shutdown
//!        └──────┬──────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use lantern::http::connection::{Connection, Site};
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let site = Arc::new(Site::new("./public", "Lantern", "Lantern static responder"));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = site.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, site);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod template;
pub mod writer;
