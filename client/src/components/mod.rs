//! Reusable UI building blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose these components; state lives in `state` and is passed in
//! as signals or read from context.

pub mod alert_banner;
pub mod bot_typing;
pub mod credential_card;
pub mod field_input;
pub mod submit_button;
