//! Client for the Gemini image editing endpoint.
//!
//! One request per submission: the garment photo as inline data plus the
//! composed prompt, asking for image and text response modalities. No retry
//! and no cancellation; the page keeps the submit action disabled while a
//! request is in flight.

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

const MODEL: &str = "gemini-2.5-flash-image";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Display name shown next to the result, not the wire model id.
pub const MODEL_DISPLAY_NAME: &str = "Gemini 2.5 Flash Image";

/// A base64 payload with its MIME type, both inbound and outbound.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePart {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug)]
pub struct EditResult {
    pub new_image: ImagePart,
    pub response_text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    pub async fn edit_image(
        &self,
        image: &ImagePart,
        prompt: &str,
    ) -> Result<EditResult, StudioError> {
        let url = format!("{API_BASE}/{MODEL}:generateContent?key={}", self.api_key);

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: &image.mime_type,
                            data: &image.data,
                        }),
                    },
                    RequestPart {
                        text: Some(prompt),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: &["IMAGE", "TEXT"],
            },
        };

        println!("📤 Sending edit request to {MODEL}...");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| StudioError::Upstream(err.to_string()))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|_| StudioError::Unknown)?;

        if !status.is_success() {
            eprintln!("Gemini error {}: {}", status, snippet(&response_text));
            return Err(classify_api_error(status, &response_text));
        }

        let parsed: GenerateResponse = serde_json::from_str(&response_text)
            .map_err(|err| StudioError::Upstream(format!("unexpected response body: {err}")))?;

        let result = map_response(parsed)?;
        println!("✅ Edited image received ({})", result.new_image.mime_type);
        Ok(result)
    }
}

fn classify_api_error(status: reqwest::StatusCode, body: &str) -> StudioError {
    if body.contains("API key not valid") {
        StudioError::InvalidApiKey
    } else {
        StudioError::Upstream(format!("HTTP {status}: {}", snippet(body)))
    }
}

/// Maps a model response to an edit result following the part rules: the
/// last inline-data part wins as the new image, the last text part wins as
/// the commentary, and a text-only answer counts as a refusal.
fn map_response(response: GenerateResponse) -> Result<EditResult, StudioError> {
    let refusal = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    if parts.is_empty() {
        return Err(match refusal {
            Some(reason) => StudioError::Refusal(reason),
            None => StudioError::EmptyResponse,
        });
    }

    let mut new_image = None;
    let mut response_text = None;
    for part in parts {
        if let Some(inline) = part.inline_data {
            new_image = Some(ImagePart {
                data: inline.data,
                mime_type: inline.mime_type,
            });
        } else if let Some(text) = part.text {
            response_text = Some(text);
        }
    }

    match new_image {
        Some(image) => Ok(EditResult {
            new_image: image,
            response_text,
        }),
        None => Err(match response_text {
            Some(text) => StudioError::Refusal(text),
            None => StudioError::NoEditedImage,
        }),
    }
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(300) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response_from(value: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn image_and_text_parts_populate_both_fields() {
        let response = response_from(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is the garment on an invisible mannequin." },
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
                    ]
                }
            }]
        }));

        let result = map_response(response).unwrap();
        assert_eq!(result.new_image.data, "QUJD");
        assert_eq!(result.new_image.mime_type, "image/png");
        assert_eq!(
            result.response_text.as_deref(),
            Some("Here is the garment on an invisible mannequin.")
        );
    }

    #[test]
    fn zero_parts_with_refusal_text_surfaces_it_verbatim() {
        let response = response_from(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "blocked for safety" }
        }));

        let err = map_response(response).unwrap_err();
        assert_eq!(err.to_string(), "blocked for safety");
        assert!(matches!(err, StudioError::Refusal(_)));
    }

    #[test]
    fn zero_parts_without_text_is_an_empty_response() {
        let response = response_from(json!({ "candidates": [] }));
        let err = map_response(response).unwrap_err();
        assert!(matches!(err, StudioError::EmptyResponse));
    }

    #[test]
    fn text_only_parts_count_as_a_refusal() {
        let response = response_from(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I can't edit this photo." }] }
            }]
        }));

        let err = map_response(response).unwrap_err();
        assert_eq!(err.to_string(), "I can't edit this photo.");
    }

    #[test]
    fn the_last_image_and_text_parts_win() {
        let response = response_from(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "Zmlyc3Q=" } },
                        { "text": "draft" },
                        { "inlineData": { "mimeType": "image/webp", "data": "c2Vjb25k" } },
                        { "text": "final" }
                    ]
                }
            }]
        }));

        let result = map_response(response).unwrap();
        assert_eq!(result.new_image.data, "c2Vjb25k");
        assert_eq!(result.new_image.mime_type, "image/webp");
        assert_eq!(result.response_text.as_deref(), Some("final"));
    }

    #[test]
    fn api_key_errors_map_to_the_credential_variant() {
        let body = r#"{"error":{"message":"API key not valid. Please pass a valid API key."}}"#;
        let err = classify_api_error(reqwest::StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, StudioError::InvalidApiKey));
    }

    #[test]
    fn other_api_errors_keep_the_underlying_message() {
        let err = classify_api_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "overloaded");
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("overloaded"));
    }

    #[test]
    fn request_body_serializes_to_the_wire_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg",
                            data: "QUJD",
                        }),
                    },
                    RequestPart {
                        text: Some("render the garment"),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: &["IMAGE", "TEXT"],
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(value["contents"][0]["parts"][1]["text"], "render the garment");
        assert_eq!(value["generationConfig"]["responseModalities"][0], "IMAGE");
    }
}
