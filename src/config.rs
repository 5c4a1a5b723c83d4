//! Runtime configuration
//!
//! Native builds read overrides from the environment; the browser build always
//! uses the defaults.

/// Cookie the classic UI sets when it hands a session to Lens
pub const DEFAULT_LEGACY_COOKIE: &str = "lens";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct LensConfig {
    pub legacy_cookie: String,
    pub log_filter: String,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            legacy_cookie: DEFAULT_LEGACY_COOKIE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LensConfig {
    /// `LENS_LEGACY_COOKIE` and `RUST_LOG` override the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            legacy_cookie: non_empty("LENS_LEGACY_COOKIE").unwrap_or(defaults.legacy_cookie),
            log_filter: non_empty("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
