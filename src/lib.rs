//! Lantern - single-shot HTTP/1.1 file responder
//!
//! Each accepted connection gets one request, one response, then close.

pub mod clock;
pub mod config;
pub mod http;
pub mod server;
