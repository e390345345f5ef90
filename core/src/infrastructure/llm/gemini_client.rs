use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::value_objects::PhotoDataUri,
    llm::ports::LLMClient,
};

/// Gemini `generateContent` client.
///
/// The API key is fixed for the lifetime of the client. A client built
/// without a key fails every call instead of refusing to start.
#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: Option<String>, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn json_request(parts: Vec<Part>, response_schema: serde_json::Value) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }

    #[instrument(skip_all, fields(model = %self.model_name))]
    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoreError::ExternalServiceError("No Gemini API key configured".to_string())
        })?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let text = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        debug!(bytes = text.len(), "Gemini response received");
        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: PhotoDataUri,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = Self::json_request(
            vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type().to_string(),
                        data: image.data().to_string(),
                    },
                },
            ],
            response_schema,
        );

        self.call_gemini_api(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = Self::json_request(vec![Part::Text { text: prompt }], response_schema);

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_request_serializes_to_gemini_shape() {
        let photo = PhotoDataUri::from_bytes("image/png", b"png bytes").unwrap();
        let request = GeminiLLMClient::json_request(
            vec![
                Part::Text {
                    text: "What is this?".to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: photo.mime_type().to_string(),
                        data: photo.data().to_string(),
                    },
                },
            ],
            serde_json::json!({ "type": "object" }),
        );

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is this?");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["data"],
            photo.data()
        );
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "object");
    }

    #[test]
    fn response_text_is_taken_from_first_candidate() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"ingredients\":[]}"}]}}]}"#,
        )
        .unwrap();

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text));

        assert_eq!(text.as_deref(), Some(r#"{"ingredients":[]}"#));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiLLMClient::new(
            None,
            "gemini-2.5-flash".to_string(),
            "http://127.0.0.1:9".to_string(),
        );

        let result = client
            .generate_with_text("hi".to_string(), serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn transport_failure_does_not_leak_the_key() {
        let client = GeminiLLMClient::new(
            Some("secret-key".to_string()),
            "gemini-2.5-flash".to_string(),
            "http://127.0.0.1:9".to_string(),
        );

        let result = client
            .generate_with_text("hi".to_string(), serde_json::json!({}))
            .await;

        match result {
            Err(CoreError::ExternalServiceError(message)) => {
                assert!(message.starts_with("LLM API error"));
                assert!(!message.contains("secret-key"));
            }
            other => panic!("expected external service error, got {other:?}"),
        }
    }
}
