use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::content::ContentType;
use crate::errors::ClientError;
use crate::response::ApiResponse;

use super::ContentGateway;
use super::config::GatewayConfig;

/// Reqwest-backed gateway client.
#[derive(Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Creates a gateway client from explicit configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ClientError> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::validation("Please enter your API key."));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build gateway client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Creates a gateway client using `TRAVELGEN_API_KEY`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl ContentGateway for HttpGateway {
    async fn invoke(
        &self,
        content_type: ContentType,
        payload: serde_json::Value,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.config.endpoint_url(content_type);
        debug!(endpoint = content_type.endpoint_path(), "posting generation request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClientError::transport(format!("gateway request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::api(
                format!("gateway request failed with status {status}: {body}"),
                Some(status.as_u16()),
            ));
        }

        // Media type check before decoding; a charset suffix still counts
        // as JSON.
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim_start().starts_with("application/json"));
        if !is_json {
            return Err(ClientError::Format);
        }

        let raw = response
            .json::<serde_json::Value>()
            .await
            .map_err(|_| ClientError::Format)?;
        debug!(endpoint = content_type.endpoint_path(), "gateway responded");
        Ok(ApiResponse::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::TripForm;
    use crate::model::ModelChoice;
    use crate::request::ContentRequest;

    #[test]
    fn construction_rejects_a_blank_api_key() {
        let err = HttpGateway::new(GatewayConfig::new("  ")).expect_err("blank key");
        assert!(err.is_validation());
    }

    #[test]
    fn construction_accepts_a_real_key() {
        let gateway = HttpGateway::new(GatewayConfig::new("key")).expect("gateway");
        assert_eq!(gateway.config().api_key, "key");
    }

    /// Serves one canned HTTP response on a loopback port, then closes.
    fn serve_once(
        status_line: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> (std::net::SocketAddr, std::thread::JoinHandle<()>) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let addr = listener.local_addr().expect("listener addr");
        let handle = std::thread::spawn(move || {
            use std::io::{Read as _, Write as _};
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "{status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });
        (addr, handle)
    }

    fn local_gateway(addr: std::net::SocketAddr) -> HttpGateway {
        let config = GatewayConfig::new("key")
            .base_url(format!("http://{addr}"))
            .timeout(std::time::Duration::from_secs(5));
        HttpGateway::new(config).expect("gateway")
    }

    #[tokio::test]
    async fn non_success_status_maps_to_an_api_error() {
        let (addr, server) = serve_once(
            "HTTP/1.1 403 Forbidden",
            "application/json",
            "{\"message\":\"Forbidden\"}",
        );
        let err = local_gateway(addr)
            .invoke(ContentType::FreeFormat, serde_json::json!({"prompt": "hi"}))
            .await
            .expect_err("403 should fail");
        match err {
            ClientError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, Some(403));
                assert!(message.contains("Forbidden"), "message was: {message}");
            }
            other => panic!("expected api error, got {other:?}"),
        }
        server.join().expect("server thread");
    }

    #[tokio::test]
    async fn non_json_success_maps_to_the_fixed_format_error() {
        let (addr, server) = serve_once("HTTP/1.1 200 OK", "text/html", "<html>ok</html>");
        let err = local_gateway(addr)
            .invoke(ContentType::FreeFormat, serde_json::json!({"prompt": "hi"}))
            .await
            .expect_err("non-JSON body should fail");
        assert_eq!(err, ClientError::Format);
        assert_eq!(
            err.to_string(),
            "Unexpected response format from API. Expected JSON."
        );
        server.join().expect("server thread");
    }

    #[tokio::test]
    async fn connection_failure_maps_to_a_transport_error() {
        // Port 1 on localhost refuses connections.
        let config = GatewayConfig::new("key")
            .base_url("http://127.0.0.1:1")
            .timeout(std::time::Duration::from_secs(2));
        let gateway = HttpGateway::new(config).expect("gateway");
        let err = gateway
            .invoke(ContentType::FreeFormat, serde_json::json!({"prompt": "hi"}))
            .await
            .expect_err("connection should fail");
        assert!(matches!(err, ClientError::Transport { .. }));
    }

    #[tokio::test]
    async fn env_gated_smoke_generates_if_key_present() {
        if std::env::var("TRAVELGEN_API_KEY")
            .unwrap_or_default()
            .trim()
            .is_empty()
        {
            eprintln!("skipping gateway smoke test (TRAVELGEN_API_KEY missing)");
            return;
        }

        let gateway = HttpGateway::from_env().expect("gateway");
        let form = TripForm {
            prompt: "One short sentence about travel.".into(),
            ..TripForm::default()
        };
        let payload =
            ContentRequest::build(&form, ModelChoice::default(), ContentType::FreeFormat)
                .expect("payload")
                .to_value();
        let result = gateway.invoke(ContentType::FreeFormat, payload).await;
        assert!(result.is_ok(), "gateway smoke failed: {result:?}");
    }
}
