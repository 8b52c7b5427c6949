//! Common imports for typical client usage.
pub use crate::{
    ApiResponse, ClientError, ContentOutput, ContentRequest, ContentType, FeedbackRequest, Field,
    GatewayConfig, HttpGateway, ModelChoice, Session, TripForm,
};
