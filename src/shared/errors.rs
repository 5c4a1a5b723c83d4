use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Browser API unavailable: {0}")]
    BrowserUnavailable(&'static str),

    #[error("Cookie error: {0}")]
    CookieError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("Reload error: {0}")]
    ReloadError(String),
}

impl AppError {
    /// Wrap a thrown JS value, keeping its debug rendering
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(kind: fn(String) -> AppError, value: wasm_bindgen::JsValue) -> Self {
        kind(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
