//! HTTP source: one GET, whole body buffered before parsing.

use crate::error::BlocklistError;
use colored::Colorize;
use reqwest::StatusCode;

/// Fetch `url` and return the response body.
///
/// Anything other than `200 OK` is an error carrying the status code.
pub async fn fetch_url(url: &str) -> Result<String, BlocklistError> {
    log::info!("Fetching IPv4 addresses from {}...", url.on_blue());

    let response = reqwest::get(url)
        .await
        .map_err(|e| BlocklistError::Network(format!("Failed to fetch {url}: {e}")))?;

    let status = response.status();
    if status != StatusCode::OK {
        log::debug!("GET {url} -> {status}");
        return Err(BlocklistError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| BlocklistError::Network(format!("Failed to read body from {url}: {e}")))?;
    log::debug!("Received {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/list.ipv4"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1.2.3.4\n5.6.7.8\n"))
            .mount(&server)
            .await;

        let body = fetch_url(&format!("{}/list.ipv4", server.uri()))
            .await
            .expect("fetch list");
        assert_eq!(body, "1.2.3.4\n5.6.7.8\n");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/list.ipv4"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetch_url(&format!("{}/list.ipv4", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(matches!(err, BlocklistError::HttpStatus { status: 404, .. }));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_non_200_success_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = fetch_url(&server.uri()).await.unwrap_err();
        assert!(matches!(err, BlocklistError::HttpStatus { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Port 9 (discard) on localhost is normally closed.
        let err = fetch_url("http://127.0.0.1:9/list.ipv4").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("Failed to fetch"));
    }
}
