//! Networking modules for the remote auth/chat API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the transport seam and error taxonomy, `auth_api` handles
//! login/registration, and `chat_api` talks to the assistant.

pub mod auth_api;
pub mod chat_api;
pub mod http;
