//! Compile-time configuration.
//!
//! Values are baked in at build time, the same way a PWA bundle gets its
//! backend address: `BACKEND_URL=https://api.example.com trunk build`.

/// Backend base URL, `http://localhost:3000` unless overridden at build time.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Store whose catalogue (categories, products, web config) the panel manages.
pub const DEFAULT_TIENDA_ID: i64 = 1;

/// `localStorage` key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Delay between the last keystroke in a search box and the query refetch.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

pub const LIST_PAGE_SIZE: usize = 20;

pub const MAX_PRODUCT_IMAGES: usize = 5;

/// Upper bound for a single uploaded image before base64 encoding.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Build a full API URL from a path starting with `/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", BACKEND_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_path() {
        let url = api_url("/proveedores");
        assert!(url.ends_with("/proveedores"));
        assert!(!url.contains("//proveedores"));
    }
}
