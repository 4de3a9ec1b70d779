/// HTTP request methods.
///
/// The responder serves every request as a GET; the method is only parsed so
/// that unusual verbs can be reported in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive, as method tokens are on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// The first line of a request, split into its whitespace-separated tokens.
///
/// Only `target` drives the response. Header lines that follow the request
/// line are consumed by the reader and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Method token exactly as sent (not validated).
    pub method: String,
    /// Request target, e.g. `/` or `/index.html`.
    pub target: String,
    /// Protocol version, when the client sent one.
    pub version: Option<String>,
}

impl RequestLine {
    /// The method, if it is one we know about.
    pub fn known_method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }

    pub fn is_get(&self) -> bool {
        self.known_method() == Some(Method::GET)
    }
}
