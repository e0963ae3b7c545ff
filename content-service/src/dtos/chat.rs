use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The message to forward, if one was supplied and is non-empty.
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_null_and_empty_messages_are_rejected() {
        for body in [json!({}), json!({ "message": null }), json!({ "message": "" })] {
            let request: ChatRequest = serde_json::from_value(body).unwrap();
            assert_eq!(request.into_message(), None);
        }
    }

    #[test]
    fn whitespace_is_still_a_message() {
        let request: ChatRequest = serde_json::from_value(json!({ "message": "  " })).unwrap();
        assert_eq!(request.into_message().as_deref(), Some("  "));
    }
}
