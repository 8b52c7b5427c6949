//! Client for the travel content generation gateway.
//!
//! Collects trip form fields into a pruned JSON payload, posts it to one
//! of four generation endpoints behind an API-key-protected gateway, and
//! drives the generate → feedback → regenerate cycle for one interactive
//! session.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use travelgen_client::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ClientError> {
//! let gateway = Arc::new(HttpGateway::new(GatewayConfig::new("my-api-key"))?);
//! let mut session = Session::new(gateway);
//!
//! let form = TripForm {
//!     destination_name: "Paris".into(),
//!     trip_start_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1),
//!     trip_end_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 10),
//!     ..TripForm::default()
//! };
//! let output = session
//!     .generate(&form, ModelChoice::default(), ContentType::MasterItinerary)
//!     .await?;
//! println!("{}", output.text);
//!
//! let improved = session
//!     .regenerate_with_feedback("make it shorter", ModelChoice::default())
//!     .await?;
//! println!("{}", improved.text);
//! # Ok(())
//! # }
//! ```

/// Content types and their endpoint/required-field mapping.
pub mod content;
/// Public error types used by the client API.
pub mod errors;
/// Raw form values and input parsing.
pub mod form;
/// Gateway config, trait seam, and HTTP client.
pub mod gateway;
/// Model selection.
pub mod model;
/// Tracing initialization.
pub mod observability;
/// Common imports for typical usage.
pub mod prelude;
/// Payload assembly and optional-field pruning.
pub mod request;
/// Decoded gateway responses.
pub mod response;
/// Session state and the generate/regenerate actions.
pub mod session;

pub use content::{ContentType, Field};
pub use errors::{ClientError, FORMAT_ERROR_MESSAGE};
pub use form::TripForm;
pub use gateway::{ContentGateway, GatewayConfig, HttpGateway};
pub use model::ModelChoice;
pub use observability::init_observability;
pub use request::{ContentRequest, FeedbackRequest};
pub use response::{ApiResponse, NO_CONTENT_FALLBACK};
pub use session::{ContentOutput, Session, SessionState};
