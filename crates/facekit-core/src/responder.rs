//! HTTP transport for API calls.
//!
//! The client never talks to `reqwest` directly: it hands a URL and form
//! parameters to a [`Responder`] and gets the raw body back. This keeps the
//! facade testable with a canned responder and lets callers plug in their
//! own transport.

use crate::config::HttpConfig;
use crate::error::{ClientError, ConfigError, FaceError, Result, ServerError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::{Duration, Instant};

/// Performs POSTs against the API and returns the response body.
///
/// Uses `async_trait` because the client stores an `Arc<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// POST `form` as `application/x-www-form-urlencoded`.
    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<String>;

    /// POST `form` plus the contents of `file` as `multipart/form-data`.
    async fn post_file(&self, file: &Path, url: &str, form: &[(String, String)])
        -> Result<String>;
}

/// `reqwest`-backed responder.
pub struct HttpResponder {
    client: reqwest::Client,
}

impl HttpResponder {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                ConfigError::ValidationError(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<String> {
        let start = Instant::now();
        let resp = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        let body = read_body(url, resp).await?;
        tracing::debug!(
            "POST {} answered in {}ms ({} bytes)",
            url,
            start.elapsed().as_millis(),
            body.len()
        );
        Ok(body)
    }

    async fn post_file(
        &self,
        file: &Path,
        url: &str,
        form: &[(String, String)],
    ) -> Result<String> {
        let bytes = tokio::fs::read(file).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FaceError::from(ClientError::FileNotFound(file.to_path_buf()))
            } else {
                FaceError::from(e)
            }
        })?;
        let size = bytes.len();

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(media_type_for(file))
            .map_err(|e| transport(url, e))?;

        let mut multipart = Form::new();
        for (key, value) in form {
            multipart = multipart.text(key.clone(), value.clone());
        }
        let multipart = multipart.part("file", part);

        let start = Instant::now();
        let resp = self
            .client
            .post(url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        let body = read_body(url, resp).await?;
        tracing::debug!(
            "POST {} with {} ({} bytes uploaded) answered in {}ms",
            url,
            file.display(),
            size,
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}

/// Read the body, turning non-2xx statuses into server errors.
///
/// A failure payload in an error response wins over the bare HTTP status,
/// since it carries the service's error code.
async fn read_body(url: &str, resp: reqwest::Response) -> Result<String> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| transport(url, e))?;

    if !status.is_success() {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
            crate::response::check_status(&value)?;
        }
        return Err(ServerError::Http {
            status: status.as_u16(),
            body,
        }
        .into());
    }
    Ok(body)
}

fn transport(url: &str, err: reqwest::Error) -> FaceError {
    let message = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    ClientError::Transport {
        url: url.to_string(),
        message,
    }
    .into()
}

/// MIME type for an image upload, from its file extension.
pub(crate) fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        other => {
            tracing::warn!("Unknown image extension '{other}', defaulting to image/jpeg");
            "image/jpeg"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Serve a single canned response on a loopback port.
    ///
    /// Returns the base URL and a handle that yields the raw request text.
    async fn serve_once(response: String) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if request_complete(&buf) {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn request_complete(buf: &[u8]) -> bool {
        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let body = &buf[header_end + 4..];

        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());
        let chunked = headers.contains("transfer-encoding: chunked");
        match content_length {
            Some(len) => body.len() >= len,
            None if chunked => body.ends_with(b"0\r\n\r\n"),
            None => true,
        }
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn responder() -> HttpResponder {
        HttpResponder::new(&HttpConfig {
            timeout_ms: 5_000,
            ..HttpConfig::default()
        })
        .unwrap()
    }

    fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_post_sends_urlencoded_form() {
        let reply = http_response("200 OK", r#"{"status": "success"}"#);
        let (base, server) = serve_once(reply).await;
        let url = format!("{base}/faces/detect.json");
        let params = form(&[("api_key", "key"), ("urls", "http://example.com/a.jpg")]);

        let body = responder().post(&url, &params).await.unwrap();
        assert_eq!(body, r#"{"status": "success"}"#);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /faces/detect.json HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("api_key=key&urls=http%3A%2F%2Fexample.com%2Fa.jpg"));
    }

    #[tokio::test]
    async fn test_post_non_success_status_is_http_error() {
        let reply = http_response("503 Service Unavailable", "down");
        let (base, server) = serve_once(reply).await;

        let err = responder()
            .post(&format!("{base}/account/limits.json"), &[])
            .await
            .unwrap_err();
        match err {
            FaceError::Server(ServerError::Http { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "down");
            }
            other => panic!("Expected HTTP error, got: {other}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_failure_payload_wins_over_http_status() {
        let failure = r#"{"status": "failure", "error_code": 201, "error_message": "NO_KEY"}"#;
        let reply = http_response("400 Bad Request", failure);
        let (base, server) = serve_once(reply).await;

        let err = responder()
            .post(&format!("{base}/faces/detect.json"), &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FaceError::Server(ServerError::Api {
                code: Some(201),
                ..
            })
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_post_file_sends_multipart() {
        let mut image = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image.write_all(b"not-really-a-png").unwrap();
        let file_name = image.path().file_name().unwrap().to_string_lossy();
        let file_name = file_name.to_ascii_lowercase();

        let reply = http_response("200 OK", r#"{"status": "success"}"#);
        let (base, server) = serve_once(reply).await;
        let params = form(&[("api_key", "key"), ("detector", "Normal")]);
        responder()
            .post_file(image.path(), &format!("{base}/faces/detect.json"), &params)
            .await
            .unwrap();

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("post /faces/detect.json http/1.1"));
        assert!(request.contains("content-type: multipart/form-data; boundary="));
        assert!(request.contains(&format!(r#"name="file"; filename="{file_name}""#)));
        assert!(request.contains("content-type: image/png"));
        assert!(request.contains("not-really-a-png"));
        assert!(request.contains("name=\"api_key\"\r\n\r\nkey\r\n"));
        assert!(request.contains("name=\"detector\"\r\n\r\nnormal\r\n"));
    }

    #[test]
    fn test_media_type_for_known_extensions() {
        assert_eq!(media_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("a.png")), "image/png");
        assert_eq!(media_type_for(Path::new("dir/a.gif")), "image/gif");
    }

    #[test]
    fn test_media_type_for_unknown_defaults_to_jpeg() {
        assert_eq!(media_type_for(Path::new("a.tiff")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("noext")), "image/jpeg");
    }

    #[test]
    fn test_http_responder_builds_from_default_config() {
        assert!(HttpResponder::new(&HttpConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_post_file_missing_file() {
        let responder = HttpResponder::new(&HttpConfig::default()).unwrap();
        let err = responder
            .post_file(
                Path::new("/definitely/not/here.jpg"),
                "http://127.0.0.1:9/faces/detect.json",
                &[],
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FaceError::Client(ClientError::FileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_post_unreachable_host_is_transport_error() {
        let responder = HttpResponder::new(&HttpConfig {
            timeout_ms: 2_000,
            ..HttpConfig::default()
        })
        .unwrap();
        // Port 9 (discard) is closed on loopback in any sane test environment.
        let err = responder
            .post("http://127.0.0.1:9/faces/detect.json", &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FaceError::Client(ClientError::Transport { .. })
        ));
    }
}
