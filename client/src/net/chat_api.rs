//! Chat requests to the assistant backend.

#[cfg(test)]
#[path = "chat_api_test.rs"]
mod chat_api_test;

use serde::Deserialize;

use super::http::{HttpTransport, JsonRequest, RequestError, decode_body, endpoint_url};

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: Option<String>,
}

/// Sends user messages to `<base_url>/chat` and returns the bot reply.
#[derive(Clone, Debug)]
pub struct ChatClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ChatClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    /// Ask the assistant one question.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` on transport failure, non-2xx status, or a
    /// reply without a `response` string.
    pub async fn ask(&self, token: Option<String>, message: &str) -> Result<String, RequestError> {
        let request = JsonRequest {
            url: endpoint_url(&self.base_url, "chat"),
            body: serde_json::json!({ "message": message }),
            bearer: token,
        };
        let reply = self.transport.post_json(request).await?;
        if !reply.is_success() {
            return Err(RequestError::Rejected { status: reply.status, body: reply.body });
        }
        let parsed: ChatResponse = decode_body(&reply)?;
        parsed.response.ok_or(RequestError::MissingField("response"))
    }
}
