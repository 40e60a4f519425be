use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::http::TransportError;
use crate::state::credential::{LoginForm, RegisterForm};

struct CannedTransport {
    reply: Result<HttpReply, TransportError>,
    sent: RefCell<Vec<JsonRequest>>,
}

impl CannedTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self { reply: Ok(HttpReply { status, body: body.to_owned() }), sent: RefCell::new(Vec::new()) }
    }

    fn failing(reason: &str) -> Self {
        Self { reply: Err(TransportError(reason.to_owned())), sent: RefCell::new(Vec::new()) }
    }
}

impl HttpTransport for &CannedTransport {
    async fn post_json(&self, request: JsonRequest) -> Result<HttpReply, TransportError> {
        self.sent.borrow_mut().push(request);
        self.reply.clone()
    }
}

fn login_form() -> LoginForm {
    LoginForm { email: "a@b.com".to_owned(), password: "secret".to_owned() }
}

fn register_form() -> RegisterForm {
    RegisterForm { username: "u".to_owned(), email: "e@x.com".to_owned(), password: "p".to_owned() }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_extracts_access_token() {
    let transport = CannedTransport::replying(200, r#"{"access_token":"abc123","token_type":"bearer"}"#);
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&login_form()));

    assert_eq!(result, Ok(AuthSuccess { token: Some("abc123".to_owned()) }));
}

#[test]
fn login_posts_credentials_to_login_endpoint() {
    let transport = CannedTransport::replying(200, r#"{"access_token":"t"}"#);
    let client = AuthClient::new("https://api.test/", &transport);

    let _ = block_on(client.submit(&login_form()));

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://api.test/login");
    assert_eq!(sent[0].body, serde_json::json!({ "email": "a@b.com", "password": "secret" }));
    assert_eq!(sent[0].bearer, None);
}

#[test]
fn login_success_without_token_is_a_failure() {
    let transport = CannedTransport::replying(200, r#"{"detail":"ok"}"#);
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&login_form()));

    assert_eq!(result, Err(RequestError::MissingField("access_token")));
}

#[test]
fn login_success_with_blank_token_is_a_failure() {
    for body in [r#"{"access_token":""}"#, r#"{"access_token":"   "}"#] {
        let transport = CannedTransport::replying(200, body);
        let client = AuthClient::new("https://api.test", &transport);

        let result = block_on(client.submit(&login_form()));

        assert_eq!(result, Err(RequestError::MissingField("access_token")), "body {body}");
    }
}

#[test]
fn login_success_with_non_json_body_is_a_decode_failure() {
    let transport = CannedTransport::replying(200, "not json");
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&login_form()));

    assert!(matches!(result, Err(RequestError::Decode(_))));
}

#[test]
fn login_unauthorized_is_rejected_with_body_retained() {
    let transport = CannedTransport::replying(401, r#"{"detail":"Invalid credentials"}"#);
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&login_form()));

    assert_eq!(
        result,
        Err(RequestError::Rejected { status: 401, body: r#"{"detail":"Invalid credentials"}"#.to_owned() })
    );
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_posts_exact_body_once() {
    let transport = CannedTransport::replying(201, r#"{"id":1}"#);
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&register_form()));

    assert_eq!(result, Ok(AuthSuccess { token: None }));
    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://api.test/register");
    assert_eq!(sent[0].body, serde_json::json!({ "username": "u", "email": "e@x.com", "password": "p" }));
}

#[test]
fn register_success_ignores_unparseable_body() {
    let transport = CannedTransport::replying(200, "");
    let client = AuthClient::new("https://api.test", &transport);

    assert_eq!(block_on(client.submit(&register_form())), Ok(AuthSuccess { token: None }));
}

#[test]
fn register_server_error_is_rejected() {
    let transport = CannedTransport::replying(500, "boom");
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&register_form()));

    assert!(matches!(result, Err(RequestError::Rejected { status: 500, .. })));
}

#[test]
fn network_failure_collapses_into_transport_error() {
    let transport = CannedTransport::failing("dns lookup failed");
    let client = AuthClient::new("https://api.test", &transport);

    let result = block_on(client.submit(&register_form()));

    assert_eq!(result, Err(RequestError::Transport(TransportError("dns lookup failed".to_owned()))));
    assert_eq!(transport.sent.borrow().len(), 1);
}

// =============================================================
// AuthEndpoint
// =============================================================

#[test]
fn endpoints_route_to_expected_pages() {
    assert_eq!(AuthEndpoint::Login.success_route(), "/chat");
    assert_eq!(AuthEndpoint::Register.success_route(), "/login");
}

#[test]
fn endpoint_messages_are_generic() {
    assert_eq!(AuthEndpoint::Login.failure_message(), "Login failed. Please try again.");
    assert_eq!(AuthEndpoint::Register.failure_message(), "Registration failed. Please try again.");
    assert_eq!(AuthEndpoint::Login.success_message(), "Login successful!");
    assert_eq!(AuthEndpoint::Register.success_message(), "Registration successful!");
}
