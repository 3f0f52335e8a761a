//! Gemini-backed message drafting adapter.

use serde_json::{json, Value};
use site_host::{DraftError, DraftFuture, DraftRequest, MessageDraftService};

use crate::interop;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Clone)]
/// Drafts contact messages through the Gemini `generateContent` REST endpoint.
pub struct GeminiDraftService {
    api_key: String,
}

impl GeminiDraftService {
    /// Creates an adapter authenticated with `api_key`.
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

pub(crate) fn draft_prompt(request: &DraftRequest) -> String {
    format!(
        "You are acting as a person named \"{name}\". You are interested in connecting with a \
         developer named \"Aqqua\" about \"{interest}\".\n\
         Write a short, friendly, and professional outreach message to Aqqua to start a \
         conversation.\n\
         - The message must be in the first person, from {name}'s perspective.\n\
         - Keep the tone enthusiastic but professional.\n\
         - The entire message should be 1-3 sentences and under 70 words.\n\
         - Do not include a subject line or greeting like \"Hi,\". Just provide the body of the \
         message.",
        name = request.name,
        interest = request.interest,
    )
}

pub(crate) fn generate_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": 0.7,
            "topP": 1,
            "topK": 1,
            "maxOutputTokens": 100,
        },
    })
}

/// Pulls the first candidate text out of a `generateContent` response.
pub(crate) fn extract_draft_text(raw: &str) -> Result<String, DraftError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| DraftError::Transport(err.to_string()))?;
    value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(DraftError::EmptyResponse)
}

impl MessageDraftService for GeminiDraftService {
    fn draft<'a>(
        &'a self,
        request: &'a DraftRequest,
    ) -> DraftFuture<'a, Result<String, DraftError>> {
        Box::pin(async move {
            let url = format!("{GENERATE_URL}?key={}", self.api_key);
            let body = generate_body(&draft_prompt(request)).to_string();
            let (status, text) = interop::post_json(&url, &body)
                .await
                .map_err(DraftError::Transport)?;
            if !(200..300).contains(&status) {
                return Err(DraftError::Status(status));
            }
            extract_draft_text(&text)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prompt_carries_the_request_fields() {
        let request = DraftRequest {
            name: "Jane".into(),
            interest: "game scripting".into(),
        };
        let prompt = draft_prompt(&request);
        assert!(prompt.contains("\"Jane\""));
        assert!(prompt.contains("\"game scripting\""));
    }

    #[test]
    fn generate_body_has_the_rest_wire_shape() {
        let body = generate_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 100);
    }

    #[test]
    fn extract_draft_text_trims_the_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"  Hi there. \n"}]}}]}"#;
        assert_eq!(extract_draft_text(raw), Ok("Hi there.".to_string()));
    }

    #[test]
    fn responses_without_text_are_empty_response_errors() {
        assert_eq!(
            extract_draft_text(r#"{"candidates":[]}"#),
            Err(DraftError::EmptyResponse)
        );
        assert_eq!(
            extract_draft_text(
                r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#
            ),
            Err(DraftError::EmptyResponse)
        );
    }
}
