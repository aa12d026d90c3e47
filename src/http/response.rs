//! HTTP response building module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::HttpConfig;

/// Build the 200 greeting response.
///
/// For HEAD requests the body bytes are suppressed while `Content-Length`
/// still reflects the full greeting, matching what a GET of the same path
/// would return.
pub fn build_greeting_response(
    body: String,
    http: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = body.len();
    let bytes = if is_head { Bytes::new() } else { Bytes::from(body) };

    Response::builder()
        .status(200)
        .header("Content-Type", http.default_content_type.as_str())
        .header("Content-Length", content_length)
        .header("Server", http.server_name.as_str())
        .body(Full::new(bytes))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn test_http_config() -> HttpConfig {
        HttpConfig {
            default_content_type: "text/plain; charset=utf-8".to_string(),
            server_name: "rust_greeter/0.1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_greeting_response_body_and_headers() {
        let resp =
            build_greeting_response("Hello!, world!".to_string(), &test_http_config(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "14");
        assert_eq!(resp.headers()["Server"], "rust_greeter/0.1");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"Hello!, world!");
    }

    #[tokio::test]
    async fn test_head_suppresses_body() {
        let resp = build_greeting_response("Hello!, world!".to_string(), &test_http_config(), true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "14");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
