//! Bearer token kept by the login app in `localStorage`.

use contracts::shared::config::AUTH_TOKEN_KEY;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Token saved under `authToken`, if any.
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

/// Value for the `Authorization` header.
pub fn auth_header() -> Option<String> {
    get_access_token().map(|token| format!("Bearer {}", token))
}

pub fn has_token() -> bool {
    get_access_token().is_some()
}
