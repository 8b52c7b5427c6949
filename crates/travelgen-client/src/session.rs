use std::sync::Arc;

use tracing::debug;

use crate::content::ContentType;
use crate::errors::ClientError;
use crate::form::TripForm;
use crate::gateway::ContentGateway;
use crate::model::ModelChoice;
use crate::request::{ContentRequest, FeedbackRequest};
use crate::response::ApiResponse;

/// Result of a successful generate or regenerate action.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentOutput {
    /// Extracted generated text.
    pub text: String,
    /// Full decoded response for inspection.
    pub response: ApiResponse,
}

/// In-memory state for one interactive session.
///
/// Holds the last submitted payload (and the endpoint it went to), the
/// last generated text, and whether a generation has succeeded at least
/// once. Created at session start, dropped at session end; nothing
/// persists across sessions.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    last_request: Option<(ContentType, ContentRequest)>,
    generated_content: Option<String>,
    content_generated: bool,
}

/// One interactive generate → feedback → regenerate session.
///
/// Each action issues at most one gateway call and commits state only on
/// success, so a failed action leaves the session exactly as it was.
pub struct Session {
    gateway: Arc<dyn ContentGateway>,
    session_id: uuid::Uuid,
    state: SessionState,
}

impl Session {
    /// Starts a fresh session against the given gateway.
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            session_id: uuid::Uuid::new_v4(),
            state: SessionState::default(),
        }
    }

    /// Identifier for log correlation.
    pub fn session_id(&self) -> uuid::Uuid {
        self.session_id
    }

    /// True once a generation has succeeded in this session.
    pub fn content_generated(&self) -> bool {
        self.state.content_generated
    }

    /// The most recently generated text, if any.
    pub fn generated_content(&self) -> Option<&str> {
        self.state.generated_content.as_deref()
    }

    /// The last successfully submitted payload, if any.
    pub fn last_request(&self) -> Option<&ContentRequest> {
        self.state.last_request.as_ref().map(|(_, request)| request)
    }

    /// Builds the payload for the selected content type and posts it.
    ///
    /// Validation failures abort before any network call. On success the
    /// payload and extracted text are stored and the session moves to the
    /// generated state; any failure leaves the state untouched.
    pub async fn generate(
        &mut self,
        form: &TripForm,
        model: ModelChoice,
        content_type: ContentType,
    ) -> Result<ContentOutput, ClientError> {
        let request = ContentRequest::build(form, model, content_type)?;
        debug!(session_id = %self.session_id, endpoint = content_type.endpoint_path(), "generating content");
        let response = self.gateway.invoke(content_type, request.to_value()).await?;
        if let Some(error) = response.error() {
            return Err(ClientError::api(error, None));
        }

        let text = response.result_text();
        self.state.last_request = Some((content_type, request));
        self.state.generated_content = Some(text.clone());
        self.state.content_generated = true;
        Ok(ContentOutput { text, response })
    }

    /// Resubmits the stored payload plus the prior content and the user's
    /// feedback to the originally selected endpoint.
    ///
    /// Requires a prior successful generation and non-blank feedback. On
    /// success the stored content is overwritten; on any failure the prior
    /// content stays in place.
    pub async fn regenerate_with_feedback(
        &mut self,
        feedback: &str,
        model: ModelChoice,
    ) -> Result<ContentOutput, ClientError> {
        let Some((content_type, request)) = self.state.last_request.as_ref() else {
            return Err(ClientError::validation(
                "Generate content before providing feedback.",
            ));
        };
        let content_type = *content_type;
        let generated = self.state.generated_content.clone().unwrap_or_default();
        let payload = FeedbackRequest::build(request, generated, feedback, model)?;

        debug!(session_id = %self.session_id, endpoint = content_type.endpoint_path(), "regenerating with feedback");
        let response = self.gateway.invoke(content_type, payload.to_value()).await?;
        if let Some(error) = response.error() {
            return Err(ClientError::api(error, None));
        }

        let text = response.result_text();
        self.state.generated_content = Some(text.clone());
        Ok(ContentOutput { text, response })
    }
}
