//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`credential`, `submit`, `notification`, `chat`)
//! so pages and components depend on small focused models.

pub mod chat;
pub mod credential;
pub mod notification;
pub mod submit;
