use crate::http::mime::ContentType;
use crate::http::resolver::Resource;

const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the responder can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Status for a resolved resource: only `Missing` is a 404.
    pub fn for_resource(resource: &Resource) -> Self {
        if resource.is_missing() {
            StatusCode::NotFound
        } else {
            StatusCode::Ok
        }
    }

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Status line plus the fixed header block of a response.
///
/// Headers always go out in the same order: `Date`, `Server`, `Connection`,
/// `Content-Type`. There is no `Content-Length`; the body ends when the
/// connection closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub date: String,
    pub server: String,
    pub content_type: ContentType,
}

impl ResponseHead {
    pub fn new(resource: &Resource, date: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            status: StatusCode::for_resource(resource),
            date: date.into(),
            server: server.into(),
            content_type: resource.content_type(),
        }
    }

    /// Serializes the head, terminated by an empty line. Lines end in CRLF.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "{} {} {}\r\nDate: {}\r\nServer: {}\r\nConnection: close\r\nContent-Type: {}\r\n\r\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.date,
            self.server,
            self.content_type,
        )
        .into_bytes()
    }
}

/// Informational page served for `/`.
pub fn root_page(server_name: &str) -> String {
    format!(
        "<html><head></head><body>\n\
         <center><h3>{server_name}</h3></center>\n\
         <center><h3>This is the root of the server.</h3></center>\n\
         </body></html>\n"
    )
}

/// Body sent with every 404.
pub const NOT_FOUND_PAGE: &str = "<html><head><title>404 File Not Found.</title></head><body>\n\
                                  <h3>404 File Not Found</h3>\n\
                                  </body></html>\n";
