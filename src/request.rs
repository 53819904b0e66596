use crate::error::*;
use url::{Position, Url};

/// The attributes of a received HTTP request that take part in Hawk verification.
///
/// `host` and `port` should be the values the server itself resolved, not whatever the client
/// claimed.  `content_type` and `content` are hashed into the payload hash exactly as given.
///
/// Like the rest of this crate, Requests are built with [`RequestBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    method: &'a str,
    host: &'a str,
    port: u16,
    path: &'a str,
    content_type: &'a str,
    content: &'a [u8],
}

impl<'a> Request<'a> {
    pub fn method(&self) -> &'a str {
        self.method
    }

    pub fn host(&self) -> &'a str {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn content_type(&self) -> &'a str {
        self.content_type
    }

    pub fn content(&self) -> &'a [u8] {
        self.content
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder<'a>(Request<'a>);

impl<'a> RequestBuilder<'a> {
    /// Create a new request with the given method, host, port, and path.  The content type and
    /// content default to empty.
    pub fn new(method: &'a str, host: &'a str, port: u16, path: &'a str) -> Self {
        RequestBuilder(Request {
            method,
            host,
            port,
            path,
            content_type: "",
            content: b"",
        })
    }

    /// Create a new request with the host, port, and path determined from the URL.  The path
    /// includes the query, if any.
    pub fn from_url(method: &'a str, url: &'a Url) -> Result<Self> {
        let (host, port, path) = RequestBuilder::parse_url(url)?;
        Ok(RequestBuilder::new(method, host, port, path))
    }

    /// Set the request method.
    pub fn method(mut self, method: &'a str) -> Self {
        self.0.method = method;
        self
    }

    /// Set the request host.
    pub fn host(mut self, host: &'a str) -> Self {
        self.0.host = host;
        self
    }

    /// Set the request port.
    pub fn port(mut self, port: u16) -> Self {
        self.0.port = port;
        self
    }

    /// Set the request path.
    pub fn path(mut self, path: &'a str) -> Self {
        self.0.path = path;
        self
    }

    /// Set the content type of the body.
    pub fn content_type(mut self, content_type: &'a str) -> Self {
        self.0.content_type = content_type;
        self
    }

    /// Set the body.
    pub fn content(mut self, content: &'a [u8]) -> Self {
        self.0.content = content;
        self
    }

    /// Get the request from this builder
    pub fn request(self) -> Request<'a> {
        self.0
    }

    fn parse_url(url: &'a Url) -> Result<(&'a str, u16, &'a str)> {
        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("url {} has no host", url)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| Error::InvalidUrl(format!("url {} has no port", url)))?;
        let path = &url[Position::BeforePath..Position::AfterQuery];
        Ok((host, port, path))
    }
}
