//! Login and registration requests against the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SubmitController` calls `AuthClient::submit` once per accepted form
//! submission. The client never retries; one call produces exactly one
//! `POST` and one `AuthResult`.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use serde::Deserialize;

use super::http::{HttpReply, HttpTransport, JsonRequest, RequestError, decode_body, endpoint_url};
use crate::state::credential::CredentialForm;

/// Remote endpoints a credential form can be posted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEndpoint {
    Login,
    Register,
}

impl AuthEndpoint {
    /// Path segment appended to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    /// Route to navigate to once the request succeeds.
    pub fn success_route(self) -> &'static str {
        match self {
            Self::Login => "/chat",
            Self::Register => "/login",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Login successful!",
            Self::Register => "Registration successful!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Register => "Registration failed. Please try again.",
        }
    }
}

/// Successful auth exchange. `token` is only present for login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSuccess {
    pub token: Option<String>,
}

pub type AuthResult = Result<AuthSuccess, RequestError>;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: Option<String>,
}

/// Posts credential forms to `<base_url>/login` and `<base_url>/register`.
#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    /// Send `form` to its endpoint and interpret the reply.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` if the body cannot be encoded, the request
    /// never completes, the server answers with a non-2xx status, or a login
    /// reply does not carry an access token.
    pub async fn submit<F: CredentialForm>(&self, form: &F) -> AuthResult {
        let endpoint = F::ENDPOINT;
        let body = serde_json::to_value(form).map_err(|e| RequestError::Encode(e.to_string()))?;
        let request = JsonRequest {
            url: endpoint_url(&self.base_url, endpoint.path()),
            body,
            bearer: None,
        };
        let reply = self.transport.post_json(request).await?;
        interpret_reply(endpoint, &reply)
    }
}

fn interpret_reply(endpoint: AuthEndpoint, reply: &HttpReply) -> AuthResult {
    if !reply.is_success() {
        return Err(RequestError::Rejected { status: reply.status, body: reply.body.clone() });
    }
    match endpoint {
        AuthEndpoint::Login => {
            let parsed: LoginResponse = decode_body(reply)?;
            let token = parsed
                .access_token
                .filter(|t| !t.trim().is_empty())
                .ok_or(RequestError::MissingField("access_token"))?;
            Ok(AuthSuccess { token: Some(token) })
        }
        AuthEndpoint::Register => {
            leptos::logging::log!("register response: {}", reply.body);
            Ok(AuthSuccess { token: None })
        }
    }
}
