// file: src/search/fetcher.rs
// description: retrieves candidate web pages and reduces them to text
// reference: https://docs.rs/reqwest

use crate::config::FetchConfig;
use crate::error::Result;
use crate::search::TextFetcher;
use crate::search::html::html_to_text;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub struct PageFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_mb * 1024 * 1024,
        })
    }

    async fn fetch_html(&self, url: &str) -> std::result::Result<String, String> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?;

        if let Some(len) = response.content_length()
            && len as usize > self.max_body_bytes
        {
            return Err(format!("body too large ({} bytes)", len));
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| e.to_string())? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(format!(
                    "body exceeds {} bytes",
                    self.max_body_bytes
                ));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl TextFetcher for PageFetcher {
    async fn fetch_text(&self, source: &str) -> String {
        match self.fetch_html(source).await {
            Ok(body) => {
                let text = html_to_text(&body);
                debug!("Fetched {} chars of text from {}", text.len(), source);
                text
            }
            Err(e) => {
                warn!("Could not fetch text from URL {}: {}", source, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `body` once without a `Content-Length` header and returns the
    /// page URL.
    async fn serve_once(body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let head = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n";
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/page", addr)
    }

    #[test]
    fn test_fetcher_creation() {
        let config = Config::default_config().fetch;
        let fetcher = PageFetcher::new(&config).unwrap();
        assert_eq!(fetcher.max_body_bytes, 5 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_unreachable_source_yields_empty_text() {
        let mut config = Config::default_config().fetch;
        config.timeout_secs = 1;
        let fetcher = PageFetcher::new(&config).unwrap();

        assert_eq!(fetcher.fetch_text("not a url").await, "");
    }

    #[tokio::test]
    async fn test_page_without_length_is_read() {
        let url = serve_once(b"<html><body><p>Hello page</p></body></html>".to_vec()).await;
        let fetcher = PageFetcher::new(&Config::default_config().fetch).unwrap();

        assert_eq!(fetcher.fetch_text(&url).await, "Hello page");
    }

    #[tokio::test]
    async fn test_oversized_page_without_length_is_skipped() {
        let mut config = Config::default_config().fetch;
        config.max_body_mb = 1;
        let fetcher = PageFetcher::new(&config).unwrap();

        let body = format!("<p>{}</p>", "a".repeat(2 * 1024 * 1024)).into_bytes();
        let url = serve_once(body).await;

        assert_eq!(fetcher.fetch_text(&url).await, "");
    }
}
