// src/gemini/client.rs
// =============================================================================
// This module calls the Gemini generateContent endpoint.
//
// The API shape:
//   POST /v1beta/models/{model}:generateContent?key={api_key}
//   body: {"contents": [{"parts": [{"text": "<prompt>"}]}]}
//   response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}
//
// We send exactly one prompt per call and take the first text part of the
// first candidate. There is no streaming and no retry - a failed call is
// reported to the caller, which skips the file it was documenting.
//
// Rust concepts:
// - serde derive: Mirror the JSON request/response shapes as structs
// - Option chaining: Walk the nested response without panicking
// - async/await: The HTTP POST is network I/O
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::docgen::TextModel;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// The model every documentation call uses
const MODEL: &str = "gemini-1.5-flash";

// Generation can take a while for large files, so the timeout is generous
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// Everything that can go wrong while talking to Gemini
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The request never completed (DNS, TLS, timeout, ...)
    #[error("network error talking to Gemini: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gemini answered with a non-success HTTP status (quota, bad key, ...)
    #[error("Gemini request failed: HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response parsed but contained no text to use
    #[error("Gemini returned a response with no text in it")]
    EmptyResponse,
}

// Request body: a list of contents, each holding text parts
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

// Content appears in both the request and the response, so it derives both
// Serialize and Deserialize
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    // Missing entirely when the prompt is blocked, so default to empty
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    // Also absent for blocked or truncated candidates
    content: Option<Content>,
}

// A client for the Gemini text-generation API
//
// The API key is passed in at construction (it comes from Config), not
// read from the environment here
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, GeminiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { client, api_key })
    }

    // Sends one prompt and returns the model's text answer
    //
    // Parameters:
    //   prompt: the full instruction text, content included
    //
    // Returns: the first candidate's text, or a GeminiError
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{API_BASE}/models/{MODEL}:generateContent");

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The error body usually explains the quota/key problem,
            // so pass it along to the user
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = response.json::<GenerateResponse>().await?;
        extract_text(parsed)
    }
}

// Pulls the first text part of the first candidate out of a response
//
// Blocked prompts come back with no candidates, and truncated candidates
// can miss their content, so every step of the walk can be absent
fn extract_text(response: GenerateResponse) -> Result<String, GeminiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text);

    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(GeminiError::EmptyResponse),
    }
}

// The adapter that lets the documentation generator drive this client
#[async_trait]
impl TextModel for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_full_response() {
        let response: GenerateResponse = serde_json::from_str(
            r###"{"candidates": [{"content": {"parts": [{"text": "## doc"}]}}]}"###,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "## doc");
    }

    #[test]
    fn test_extract_text_takes_first_candidate() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_with_no_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GeminiError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_text_with_blocked_candidate() {
        // A candidate can arrive without content (e.g., safety block)
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GeminiError::EmptyResponse)
        ));
    }
}
