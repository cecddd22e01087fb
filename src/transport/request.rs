use crate::reaper::Scheme;
use reqwest::header::HeaderMap;
use reqwest::Method;

/// A fully formed request, ready for a transport to execute
///
/// The URL is kept in its parts so callers can inspect exactly what the reaper
/// built. `query` is already encoded and is empty when there are no parameters.
/// `body` is never absent: a request without a payload carries an empty body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub scheme: Scheme,
    pub host: String,
    pub path: String,
    pub query: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Request {
    /// Renders the full URL: `scheme://host[/]path[?query]`
    ///
    /// A separating slash is inserted when the path is non-empty and does not
    /// already start with one. No `?` is emitted for an empty query.
    pub fn url(&self) -> String {
        let mut url = format!("{}://{}", self.scheme.as_str(), self.host);

        if !self.path.is_empty() {
            if !self.path.starts_with('/') {
                url.push('/');
            }
            url.push_str(&self.path);
        }

        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }

        url
    }

    /// Number of bytes in the body
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
