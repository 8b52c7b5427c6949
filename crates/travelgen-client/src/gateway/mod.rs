//! Gateway configuration and the HTTP client behind the generation
//! endpoints.
//!
//! The [`ContentGateway`] trait is the seam between session logic and the
//! wire: production code uses [`HttpGateway`], tests script their own
//! implementation.
mod config;
mod http;

pub use config::GatewayConfig;
pub use http::HttpGateway;

use crate::content::ContentType;
use crate::errors::ClientError;
use crate::response::ApiResponse;

/// One-shot POST to a generation endpoint.
#[async_trait::async_trait]
pub trait ContentGateway: Send + Sync {
    /// Sends exactly one request and returns the decoded body.
    ///
    /// Implementations make no retry and keep no cache: two calls with an
    /// identical payload are two independent requests.
    async fn invoke(
        &self,
        content_type: ContentType,
        payload: serde_json::Value,
    ) -> Result<ApiResponse, ClientError>;
}
