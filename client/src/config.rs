//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle. Set `PYXELL_API_BASE_URL`
//! when building to point the client at another backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no override is provided at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://pyxell-agent-np8u.onrender.com";

/// How long a notification stays in the alert slot before it expires.
pub const NOTIFICATION_TTL_MS: u32 = 3_000;

/// Base URL of the remote auth/chat API.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("PYXELL_API_BASE_URL"))
}

fn resolve_base_url(override_url: Option<&'static str>) -> &'static str {
    match override_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}
