//! Gemini client for the Vertex AI generateContent API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use intake_core::{Model, ModelError};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_LOCATION: &str = "us-central1";
const RESPONSE_MIME_TYPE: &str = "application/json";

/// Client for Gemini models served through Vertex AI
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    location: String,
}

/// Request body for generateContent
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Structured-output settings for the call
#[derive(Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a JsonValue,
}

/// Response body from generateContent
#[derive(Debug, Deserialize)]
struct GenerateResponse {
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

/// Error envelope from the Google API
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Create a new client for the given key, model id, and region
    pub fn new(api_key: String, model: String, location: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            location,
        }
    }

    /// Client with the default model and region
    pub fn with_defaults(api_key: String) -> Self {
        Self::new(
            api_key,
            DEFAULT_MODEL.to_string(),
            DEFAULT_LOCATION.to_string(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{}-aiplatform.googleapis.com/v1/publishers/google/models/{}:generateContent",
            self.location, self.model
        )
    }

    async fn send(&self, request: &GenerateRequest<'_>) -> Result<GenerateResponse, ModelError> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => api_err.error.message,
                Err(_) => body,
            };
            return Err(ModelError::Api { status, message });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| ModelError::ResponseParse(e.to_string()))
    }
}

/// Pull the first text part out of the first candidate.
fn first_text(response: &GenerateResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| part.text.as_deref())
}

#[async_trait]
impl Model for GeminiClient {
    fn id(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        response_schema: &JsonValue,
    ) -> Result<Option<JsonValue>, ModelError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema,
            },
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling model");

        let response = self.send(&request).await?;

        // A successful call without usable JSON is "no output", not an
        // error; the flow substitutes its fallback record.
        let Some(text) = first_text(&response) else {
            return Ok(None);
        };

        Ok(serde_json::from_str::<JsonValue>(text).ok())
    }
}
