//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that need a login token apply identical unauthenticated redirect
//! behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::token_store::TokenStore;

/// `true` when no usable token is stored.
pub fn should_redirect_unauth(token: Option<&str>) -> bool {
    token.is_none_or(|t| t.trim().is_empty())
}

/// Redirect to `/login` once mounted if the token store is empty.
pub fn install_unauth_redirect<S, F>(tokens: S, navigate: F)
where
    S: TokenStore + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(tokens.load_token().as_deref()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
