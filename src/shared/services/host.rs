//! Host shell seam: current location, history navigation and full reload

use crate::shared::errors::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::shared::errors::AppError;

/// Navigation capabilities the page shell provides
pub trait Host {
    /// Raw pathname of the current location, exactly as the browser reports it.
    ///
    /// `None` when there is no live location (server rendering, desktop).
    fn current_path(&self) -> Option<String>;

    /// Push `path` as a new history entry
    fn navigate_to(&self, path: &str) -> Result<()>;

    /// Reload the whole document, bypassing the cache
    fn force_reload(&self) -> Result<()>;
}

/// Host backed by `window.location` and `window.history`.
///
/// The push goes straight to `History.pushState` rather than through the
/// router's navigator: the reload that follows hands the page to the classic
/// server, so the client router must not resolve or normalize the path.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
impl Host for BrowserHost {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn navigate_to(&self, path: &str) -> Result<()> {
        use crate::shared::errors::AppError;
        use wasm_bindgen::JsValue;

        let window = web_sys::window().ok_or(AppError::BrowserUnavailable("window"))?;
        let history = window
            .history()
            .map_err(|e| AppError::from_js(AppError::NavigationError, e))?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|e| AppError::from_js(AppError::NavigationError, e))
    }

    fn force_reload(&self) -> Result<()> {
        use crate::shared::errors::AppError;

        let window = web_sys::window().ok_or(AppError::BrowserUnavailable("window"))?;
        window
            .location()
            .reload_with_forceget(true)
            .map_err(|e| AppError::from_js(AppError::ReloadError, e))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Host for BrowserHost {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn navigate_to(&self, _path: &str) -> Result<()> {
        Err(AppError::BrowserUnavailable("window.history"))
    }

    fn force_reload(&self) -> Result<()> {
        Err(AppError::BrowserUnavailable("window.location"))
    }
}
