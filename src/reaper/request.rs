//! Request construction for reaps and sows
//!
//! Reaps become GET requests with `values` in the query string. Sows become POST
//! requests with `values` form-encoded in the body. Both encodings use the
//! `application/x-www-form-urlencoded` rules, with keys in `Values` order.

use crate::reaper::{Scheme, Values};
use crate::transport::Request;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::form_urlencoded;

/// Content type sent with every sow
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encodes values as `key=value` pairs joined by `&`
///
/// Returns an empty string for empty values.
pub fn encode_values(values: &Values) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(values.iter())
        .finish()
}

/// Builds the GET request for a reap
pub fn build_reap_request(scheme: Scheme, host: &str, path: &str, values: &Values) -> Request {
    Request {
        method: Method::GET,
        scheme,
        host: host.to_string(),
        path: path.to_string(),
        query: encode_values(values),
        headers: HeaderMap::new(),
        body: Vec::new(),
    }
}

/// Builds the POST request for a sow
///
/// Empty values produce an empty, zero-length body.
pub fn build_sow_request(scheme: Scheme, host: &str, path: &str, values: &Values) -> Request {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

    Request {
        method: Method::POST,
        scheme,
        host: host.to_string(),
        path: path.to_string(),
        query: String::new(),
        headers,
        body: encode_values(values).into_bytes(),
    }
}
