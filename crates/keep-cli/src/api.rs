//! Keep API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Keep
pub struct KeepClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    reason: String,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateNoteRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl KeepClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all notes
    pub async fn list_notes(&self) -> Result<Vec<NoteResponse>> {
        let url = format!("{}/notes", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Keep API")?;

        read_envelope(resp).await
    }

    /// Get a specific note
    pub async fn get_note(&self, id: &str) -> Result<NoteResponse> {
        let url = format!("{}/notes/{}", self.base_url, urlencoding::encode(id));
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Keep API")?;

        read_envelope(resp).await
    }

    /// Create a note
    pub async fn create_note(&self, title: &str, content: &str) -> Result<NoteResponse> {
        let url = format!("{}/notes", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&CreateNoteRequest { title, content })
            .send()
            .await
            .context("Failed to connect to Keep API")?;

        read_envelope(resp).await
    }
}

/// Unwrap `{message, data}` or turn an error envelope into an error
async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await.context("Failed to read response")?;

    if !status.is_success() {
        bail!("API error ({}): {}", status, describe_error(&body));
    }

    let envelope: Envelope<T> =
        serde_json::from_str(&body).context("Failed to parse response")?;

    Ok(envelope.data)
}

/// Render an error body for humans, falling back to the raw text
fn describe_error(body: &str) -> String {
    let Ok(ErrorEnvelope { error }) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return body.to_string();
    };

    let mut text = format!("{} - {}", error.code, error.message);
    for detail in error.details {
        text.push_str(&format!("\n  {}: {}", detail.reason, detail.message));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error_with_details() {
        let body = r#"{"error":{"code":"INVALID_REQUEST","message":"Invalid request",
            "details":[{"reason":"title","message":"title is required"}]}}"#;

        assert_eq!(
            describe_error(body),
            "INVALID_REQUEST - Invalid request\n  title: title is required"
        );
    }

    #[test]
    fn test_describe_error_without_details() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"Note not found"}}"#;
        assert_eq!(describe_error(body), "NOT_FOUND - Note not found");
    }

    #[test]
    fn test_describe_error_falls_back_to_raw() {
        assert_eq!(describe_error("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_envelope_list_parses() {
        let body = r#"{"message":"Notes found","data":[
            {"id":"123e4567-e89b-12d3-a456-426614174000","title":"t","content":"c"}]}"#;

        let envelope: Envelope<Vec<NoteResponse>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].title, "t");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = KeepClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
