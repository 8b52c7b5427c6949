use crate::content::ContentType;
use crate::errors::ClientError;
use crate::form::TripForm;
use crate::model::ModelChoice;

/// Wire format for dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Outgoing generation payload.
///
/// Optional-field pruning is encoded per field with `skip_serializing_if`
/// so the inclusion policy is explicit and testable rather than scattered
/// through call sites:
/// - string/date fields are omitted when `None`, never sent as null or
///   empty string;
/// - numeric client fields are omitted when `0` — a user-entered zero is
///   indistinguishable from "not provided" and is dropped (kept verbatim
///   from the upstream contract, debatable as it is);
/// - `places_visited` is omitted when empty;
/// - `model_id` is present only for a non-default model selection.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub client_age: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub number_of_trips: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub days_to_birthday: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub client_since: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub places_visited: Vec<String>,
}

impl ContentRequest {
    /// Validates the form for the selected content type and assembles the
    /// payload.
    ///
    /// Free Format requires a non-blank prompt; every other content type
    /// requires a non-blank destination name. Validation failures abort
    /// before anything is sent.
    pub fn build(
        form: &TripForm,
        model: ModelChoice,
        content_type: ContentType,
    ) -> Result<Self, ClientError> {
        let mut request = ContentRequest::default();

        match content_type {
            ContentType::FreeFormat => {
                if form.prompt.trim().is_empty() {
                    return Err(ClientError::validation("Please enter a prompt."));
                }
                request.prompt = Some(form.prompt.clone());
                // Destination and dates are optional extras here.
                if !form.destination_name.trim().is_empty() {
                    request.destination_name = Some(form.destination_name.clone());
                }
                request.trip_start_date = form.trip_start_date.map(format_date);
                request.trip_end_date = form.trip_end_date.map(format_date);
            }
            _ => {
                if form.destination_name.trim().is_empty() {
                    return Err(ClientError::validation("Please enter a destination name."));
                }
                request.destination_name = Some(form.destination_name.clone());
                request.trip_start_date = form.trip_start_date.map(format_date);
                request.trip_end_date = form.trip_end_date.map(format_date);
            }
        }

        request.model_id = model.model_id().map(ToOwned::to_owned);
        request.client_age = form.client_age;
        request.number_of_trips = form.number_of_trips;
        request.days_to_birthday = form.days_to_birthday;
        request.client_since = form.client_since;
        request.places_visited = form.parsed_places();

        Ok(request)
    }

    /// Serializes the payload to its wire shape.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("ContentRequest serialization should be infallible")
    }
}

/// Regeneration payload: the previously submitted request plus the prior
/// generated content and the user's feedback on it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeedbackRequest {
    #[serde(flatten)]
    pub request: ContentRequest,
    pub generated_content: String,
    pub user_feedback: String,
}

impl FeedbackRequest {
    /// Builds a regeneration payload from the stored request and content.
    ///
    /// The feedback text must be non-blank, and `model_id` is re-applied
    /// from the current model selection so switching models between rounds
    /// takes effect.
    pub fn build(
        request: &ContentRequest,
        generated_content: impl Into<String>,
        feedback: &str,
        model: ModelChoice,
    ) -> Result<Self, ClientError> {
        if feedback.trim().is_empty() {
            return Err(ClientError::validation(
                "Please provide feedback before regenerating.",
            ));
        }
        let mut request = request.clone();
        request.model_id = model.model_id().map(ToOwned::to_owned);
        Ok(Self {
            request,
            generated_content: generated_content.into(),
            user_feedback: feedback.to_owned(),
        })
    }

    /// Serializes the payload to its wire shape.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("FeedbackRequest serialization should be infallible")
    }
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
