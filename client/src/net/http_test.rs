use super::*;

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("https://api.test", "login"), "https://api.test/login");
    assert_eq!(endpoint_url("https://api.test/", "/login"), "https://api.test/login");
}

#[test]
fn reply_success_range_is_2xx() {
    let reply = |status| HttpReply { status, body: String::new() };
    assert!(reply(200).is_success());
    assert!(reply(201).is_success());
    assert!(reply(299).is_success());
    assert!(!reply(199).is_success());
    assert!(!reply(301).is_success());
    assert!(!reply(401).is_success());
    assert!(!reply(500).is_success());
}

#[test]
fn decode_body_reports_malformed_json() {
    let reply = HttpReply { status: 200, body: "<html>".to_owned() };
    let result: Result<serde_json::Value, _> = decode_body(&reply);
    assert!(matches!(result, Err(RequestError::Decode(_))));
}

#[test]
fn rejected_display_keeps_status_and_body_for_logs() {
    let err = RequestError::Rejected { status: 401, body: "{\"detail\":\"bad\"}".to_owned() };
    assert_eq!(err.to_string(), "server responded with status 401: {\"detail\":\"bad\"}");
}

#[test]
fn transport_error_converts_into_request_error() {
    let err: RequestError = TransportError("offline".to_owned()).into();
    assert_eq!(err, RequestError::Transport(TransportError("offline".to_owned())));
    assert_eq!(err.to_string(), "transport failed: offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn gloo_transport_is_unavailable_off_browser() {
    let request = JsonRequest {
        url: "https://api.test/login".to_owned(),
        body: serde_json::json!({}),
        bearer: None,
    };
    let result = futures::executor::block_on(GlooTransport.post_json(request));
    assert!(result.is_err());
}
