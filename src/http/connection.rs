use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::clock::{Clock, SystemClock, format_date};
use crate::config::Config;
use crate::http::parser::{parse_request_line, read_request_head};
use crate::http::request::RequestLine;
use crate::http::resolver::{Resolver, Resource};
use crate::http::response::ResponseHead;
use crate::http::template::TemplateContext;
use crate::http::writer::{ResponseWriter, prepare_body};

/// Read-only state shared by every connection.
pub struct Site {
    pub resolver: Resolver,
    /// Value of the `Server` header, also shown on the root page.
    pub server_name: String,
    /// Substituted for `<cs371server>` in text files.
    pub template_server: String,
    pub clock: Arc<dyn Clock>,
}

impl Site {
    pub fn new(
        root: impl Into<PathBuf>,
        server_name: impl Into<String>,
        template_server: impl Into<String>,
    ) -> Self {
        Self {
            resolver: Resolver::new(root),
            server_name: server_name.into(),
            template_server: template_server.into(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.static_files.root.clone(),
            cfg.server.name.clone(),
            cfg.server.template_server.clone(),
        )
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    site: Arc<Site>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(Option<RequestLine>),
    Preparing(Resource),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream: BufReader::new(stream),
            site,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = self.read_request().await?;
                    self.state = ConnectionState::Resolving(request);
                }

                ConnectionState::Resolving(request) => {
                    let target = request.as_ref().map(|r| r.target.as_str());
                    let resource = self.site.resolver.resolve(target).await;
                    tracing::debug!(?resource, "Resolved request target");
                    self.state = ConnectionState::Preparing(resource);
                }

                ConnectionState::Preparing(resource) => {
                    let date = format_date(self.site.clock.now());
                    let ctx = TemplateContext::new(date, self.site.template_server.as_str());
                    let (resource, body) =
                        prepare_body(resource, &ctx, &self.site.server_name).await;

                    let head = ResponseHead::new(&resource, ctx.date, self.site.server_name.as_str());
                    tracing::info!(
                        status = head.status.as_u16(),
                        content_type = %head.content_type,
                        "Sending response"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&head, body));
                }

                ConnectionState::Writing(writer) => {
                    let sent = writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;
                    self.stream.flush().await.context("failed to flush response")?;
                    self.stream.shutdown().await.context("failed to close connection")?;
                    tracing::debug!(bytes = sent, "Response body sent");
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request head. A missing or malformed request line is not an
    /// error: it yields `None` and the request is answered with a 404.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<RequestLine>> {
        let line = read_request_head(&mut self.stream)
            .await
            .context("failed to read request")?;

        let Some(line) = line else {
            tracing::warn!("Connection closed before a request line arrived");
            return Ok(None);
        };

        match parse_request_line(&line) {
            Ok(request) => {
                if !request.is_get() {
                    tracing::warn!(method = %request.method, "Serving non-GET request as GET");
                }
                Ok(Some(request))
            }
            Err(e) => {
                tracing::warn!(line = %line, error = %e, "Malformed request line");
                Ok(None)
            }
        }
    }
}
