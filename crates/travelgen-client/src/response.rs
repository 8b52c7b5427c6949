/// Fallback shown when a successful response carries no `result` field.
pub const NO_CONTENT_FALLBACK: &str = "No content available";

/// Decoded gateway response, kept verbatim for inspection.
///
/// Only the `result` field is interpreted; a 2xx body may still carry an
/// application-level `error` field instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    raw: serde_json::Value,
}

impl ApiResponse {
    pub fn new(raw: serde_json::Value) -> Self {
        Self { raw }
    }

    /// The untouched response JSON.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Application-level error message, when the body carries one.
    pub fn error(&self) -> Option<String> {
        self.raw.get("error").map(|value| match value.as_str() {
            Some(text) => text.to_owned(),
            None => value.to_string(),
        })
    }

    /// The generated text, or [`NO_CONTENT_FALLBACK`] when absent.
    pub fn result_text(&self) -> String {
        self.raw
            .get("result")
            .and_then(|value| value.as_str())
            .unwrap_or(NO_CONTENT_FALLBACK)
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_text_extracts_the_result_field() {
        let response = ApiResponse::new(serde_json::json!({
            "result": "Enjoy Paris!",
            "request_id": "abc-123"
        }));
        assert!(response.error().is_none());
        assert_eq!(response.result_text(), "Enjoy Paris!");
    }

    #[test]
    fn missing_result_falls_back_to_fixed_text() {
        let response = ApiResponse::new(serde_json::json!({"status": "ok"}));
        assert_eq!(response.result_text(), NO_CONTENT_FALLBACK);
    }

    #[test]
    fn error_field_is_surfaced_even_on_success_status() {
        let response = ApiResponse::new(serde_json::json!({"error": "quota exceeded"}));
        assert_eq!(response.error().as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn non_string_error_values_are_rendered_as_json() {
        let response = ApiResponse::new(serde_json::json!({"error": {"code": 42}}));
        assert_eq!(response.error().as_deref(), Some("{\"code\":42}"));
    }
}
