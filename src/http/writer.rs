use bytes::Bytes;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::mime::ContentType;
use crate::http::resolver::Resource;
use crate::http::response::{NOT_FOUND_PAGE, ResponseHead, root_page};
use crate::http::template::TemplateContext;

/// Chunk size used when streaming image files.
pub const STREAM_CHUNK_SIZE: usize = 32 * 1024;

/// A response body, ready to be written once the head has gone out.
#[derive(Debug)]
pub enum Body {
    /// Fully rendered bytes: fixed pages and substituted text files.
    Full(Bytes),
    /// An opened image file, copied through unchanged.
    Stream(File),
}

/// Everything the body needs is gathered here, before the head is written,
/// so a file that vanished or cannot be read still turns into a clean 404.
///
/// Returns the resource the response must be built from: the input one, or
/// `Missing` if the file could not be opened.
pub async fn prepare_body(
    resource: Resource,
    ctx: &TemplateContext,
    server_name: &str,
) -> (Resource, Body) {
    let (path, extension) = match resource {
        Resource::Root => {
            return (Resource::Root, Body::Full(Bytes::from(root_page(server_name))));
        }
        Resource::Missing { path } => return (Resource::Missing { path }, not_found_body()),
        Resource::Found { path, extension } => (path, extension),
    };

    let opened = if ContentType::from_extension(&extension).is_image() {
        File::open(&path).await.map(Body::Stream)
    } else {
        tokio::fs::read(&path)
            .await
            .map(|content| Body::Full(Bytes::from(ctx.render(&content))))
    };

    match opened {
        Ok(body) => (Resource::Found { path, extension }, body),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read file, sending 404");
            (Resource::Missing { path: Some(path) }, not_found_body())
        }
    }
}

fn not_found_body() -> Body {
    Body::Full(Bytes::from_static(NOT_FOUND_PAGE.as_bytes()))
}

pub struct ResponseWriter {
    head: Vec<u8>,
    body: Body,
}

impl ResponseWriter {
    pub fn new(head: &ResponseHead, body: Body) -> Self {
        Self {
            head: head.to_bytes(),
            body,
        }
    }

    /// Writes the head, then the body. Returns the number of body bytes sent.
    pub async fn write_to_stream<W>(self, stream: &mut W) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;

        match self.body {
            Body::Full(bytes) => {
                stream.write_all(&bytes).await?;
                Ok(bytes.len() as u64)
            }
            Body::Stream(mut file) => stream_file(&mut file, stream).await,
        }
    }
}

/// Copies `reader` to `writer` in fixed-size chunks, writing exactly the
/// bytes each read produced.
pub async fn stream_file<R, W>(reader: &mut R, writer: &mut W) -> anyhow::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = vec![0u8; STREAM_CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }

        writer.write_all(&buf[..n]).await?;
        total += n as u64;
    }

    Ok(total)
}
