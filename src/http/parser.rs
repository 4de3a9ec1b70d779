use crate::http::request::RequestLine;
use std::fmt;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Upper bound on the bytes read for a request line plus its headers.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No request line was received.
    Empty,
    /// The request line has fewer than two tokens.
    MissingTarget,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::MissingTarget => f.write_str("request line has no target"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Splits a request line into method, target and optional version.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::Empty)?;
    let target = parts.next().ok_or(ParseError::MissingTarget)?;
    let version = parts.next();

    Ok(RequestLine {
        method: method.to_string(),
        target: target.to_string(),
        version: version.map(str::to_string),
    })
}

/// Reads a request head up to and including the blank line that ends it.
///
/// Returns the request line, or `None` if the peer closed the stream before
/// sending one. Blank lines ahead of the request line are skipped. Header
/// lines are read and discarded. A stream that ends before the blank line
/// still yields whatever request line was captured.
pub async fn read_request_head<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut request_line = None;
    let mut consumed = 0usize;
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        // One byte past the budget is enough to tell an oversized head apart.
        let budget = (MAX_HEAD_BYTES - consumed + 1) as u64;
        let n = (&mut *reader).take(budget).read_until(b'\n', &mut buf).await?;
        if n == 0 {
            break;
        }

        consumed += n;
        if consumed > MAX_HEAD_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "request head too large",
            ));
        }

        let line = trim_line_ending(&buf);
        if line.is_empty() {
            if request_line.is_some() {
                break;
            }
            continue;
        }

        let line = String::from_utf8_lossy(line);
        if request_line.is_none() {
            tracing::debug!(line = %line, "Request line");
            request_line = Some(line.into_owned());
        } else {
            tracing::trace!(line = %line, "Discarding header");
        }
    }

    Ok(request_line)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
