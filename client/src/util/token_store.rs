//! Persistent storage for the login access token.
//!
//! Browser builds keep the token in `localStorage["token"]`. SSR and native
//! test builds have no storage, so reads return `None` and writes no-op.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "token";

/// Where the access token lives between page loads.
pub trait TokenStore {
    fn save_token(&self, token: &str);
    fn load_token(&self) -> Option<String>;
}

/// `localStorage`-backed token store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            leptos::logging::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn save_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(TOKEN_KEY, token) {
                leptos::logging::warn!("failed to persist token: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("token store unavailable; dropping {} byte token", token.len());
        }
    }

    fn load_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            match storage.get_item(TOKEN_KEY) {
                Ok(token) => token.filter(|t| !t.is_empty()),
                Err(err) => {
                    leptos::logging::warn!("failed to read token: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
