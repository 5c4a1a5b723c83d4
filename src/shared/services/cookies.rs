//! Cookie store seam
//!
//! The legacy flag lives in a browser cookie shared with the classic UI and
//! other tabs, so every read goes back to `document.cookie`.

use crate::shared::errors::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::shared::errors::AppError;

/// Minimal key-value view over a cookie jar
pub trait CookieStore {
    /// Value of `name`, or `None` when the cookie is absent
    fn get(&self, name: &str) -> Option<String>;

    /// Remove `name`. Removing an absent cookie is not an error.
    fn remove(&self, name: &str) -> Result<()>;
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`).
///
/// A pair without `=` is read as a name with an empty value. Values are
/// percent-decoded when they decode cleanly.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let pair = pair.trim();
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.trim() != name {
            return None;
        }
        let value = value.trim();
        Some(
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        )
    })
}

/// `Set-Cookie` style assignment that expires `name` on path `/`
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name)
}

/// Cookie store backed by `document.cookie`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserCookies;

#[cfg(target_arch = "wasm32")]
impl BrowserCookies {
    fn document() -> Result<web_sys::HtmlDocument> {
        use crate::shared::errors::AppError;
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|window| window.document())
            .ok_or(AppError::BrowserUnavailable("document"))?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| AppError::BrowserUnavailable("HtmlDocument"))
    }
}

#[cfg(target_arch = "wasm32")]
impl CookieStore for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document().ok()?.cookie().ok()?;
        find_cookie(&header, name)
    }

    fn remove(&self, name: &str) -> Result<()> {
        use crate::shared::errors::AppError;

        let document = Self::document()?;
        if self.get(name).is_none() {
            return Ok(());
        }
        document
            .set_cookie(&expired_cookie(name))
            .map_err(|e| AppError::from_js(AppError::CookieError, e))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CookieStore for BrowserCookies {
    fn get(&self, _name: &str) -> Option<String> {
        // No cookie jar outside the browser
        None
    }

    fn remove(&self, _name: &str) -> Result<()> {
        Err(AppError::BrowserUnavailable("document.cookie"))
    }
}
