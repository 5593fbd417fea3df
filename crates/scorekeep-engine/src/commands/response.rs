use serde::{Deserialize, Serialize};

/// Response type that posts the reply visibly to the whole channel
pub const RESPONSE_IN_CHANNEL: &str = "in_channel";

/// Reply envelope returned to the chat webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub text: String,
    pub response_type: String,
}

impl CommandResponse {
    /// Reply visible to everyone in the channel
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            response_type: RESPONSE_IN_CHANNEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(CommandResponse::in_channel("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "hi", "response_type": "in_channel" })
        );
    }
}
