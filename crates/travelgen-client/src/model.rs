use std::fmt;

/// Model selection for a generation request.
///
/// The default model sends no `model_id` at all, letting the gateway apply
/// its own default; only the alternative carries an explicit identifier.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ModelChoice {
    /// Claude 3.5 Sonnet v2, the gateway default.
    #[default]
    ClaudeSonnet,
    /// LLama 3.0 70b.
    Llama70b,
}

impl ModelChoice {
    /// All selectable models, default first.
    pub const ALL: [ModelChoice; 2] = [ModelChoice::ClaudeSonnet, ModelChoice::Llama70b];

    /// Explicit gateway model identifier, when one exists.
    pub fn model_id(&self) -> Option<&'static str> {
        match self {
            ModelChoice::ClaudeSonnet => None,
            ModelChoice::Llama70b => Some("us.meta.llama3-3-70b-instruct-v1:0"),
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::ClaudeSonnet => "Claude 3.5 Sonnet v2",
            ModelChoice::Llama70b => "LLama 3.0 70b",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_carries_no_identifier() {
        assert_eq!(ModelChoice::default(), ModelChoice::ClaudeSonnet);
        assert_eq!(ModelChoice::ClaudeSonnet.model_id(), None);
    }

    #[test]
    fn llama_maps_to_its_bedrock_identifier() {
        assert_eq!(
            ModelChoice::Llama70b.model_id(),
            Some("us.meta.llama3-3-70b-instruct-v1:0")
        );
    }
}
