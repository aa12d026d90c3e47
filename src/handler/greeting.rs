//! Catch-all greeting handler
//!
//! Entry point for HTTP request processing. Every request, regardless of
//! method or path, is answered with a greeting built from the request path.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Main entry point for HTTP request handling
///
/// `Infallible`: no input produces an error response, so the service never
/// fails at the hyper layer.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    let body = greeting_body(uri.path());

    if config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = version_str(req.version()).to_string();
        entry.status = 200;
        entry.body_bytes = body.len();
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(http::build_greeting_response(body, &config.http, is_head))
}

/// Build the greeting body from the raw request path.
///
/// Exactly one leading separator is stripped; the remainder is interpolated
/// verbatim (no percent-decoding, no sanitization). An empty remainder still
/// greets.
fn greeting_body(path: &str) -> String {
    let name = path.strip_prefix('/').unwrap_or(path);
    format!("Hello!, {name}!")
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[allow(clippy::missing_const_for_fn)]
fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
