#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn token_key_is_token() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn local_store_reads_nothing_off_browser() {
    assert_eq!(LocalTokenStore.load_token(), None);
}

#[test]
fn local_store_save_is_callable_off_browser() {
    LocalTokenStore.save_token("abc123");
    assert_eq!(LocalTokenStore.load_token(), None);
}
