//! Gemini `generateContent` binding

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationError, TextGenerator};

/// Public Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Blocking HTTP client for the Gemini REST API.
///
/// No timeouts and no retries: a call makes exactly one request.
#[derive(Clone)]
pub struct GeminiGenerator {
    base_url: String,
    api_key: String,
    client: ureq::Agent,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: ureq::AgentBuilder::new().build(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let url = self.endpoint(model);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(GenerateContentRequest::new(prompt))
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => GenerationError::Status {
                    code,
                    body: response.into_string().unwrap_or_default(),
                },
                ureq::Error::Transport(t) => GenerationError::Transport(t.to_string()),
            })?;

        let body: GenerateContentResponse = response
            .into_json()
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        Ok(body.text())
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined; empty if there is none
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::new("Oi")).expect("serialize");
        assert_eq!(body, serde_json::json!({"contents": [{"parts": [{"text": "Oi"}]}]}));
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"Bora "},{"text":"lá!"}],"role":"model"}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ],"usageMetadata":{"totalTokenCount":12}}"#,
        )
        .expect("parse");
        assert_eq!(body.text(), "Bora lá!");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).expect("parse");
        assert_eq!(body.text(), "");
    }

    #[test]
    fn test_missing_key_fails_without_network() {
        let generator = GeminiGenerator::with_url("http://127.0.0.1:9", "");
        assert!(matches!(generator.generate("m", "p"), Err(GenerationError::MissingApiKey)));
    }

    #[test]
    fn test_endpoint() {
        let generator = GeminiGenerator::with_url("http://localhost:8080/", "k");
        assert_eq!(
            generator.endpoint("gemini-3-flash-preview"),
            "http://localhost:8080/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
