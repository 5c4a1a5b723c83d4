// Collaborator seams for the sidebar
// Browser implementations are WASM-only; native builds get inert fallbacks
pub mod cookies;
pub mod host;
pub mod legacy;

#[cfg(test)]
pub(crate) mod fakes;

use std::rc::Rc;

pub use cookies::{BrowserCookies, CookieStore};
pub use host::{BrowserHost, Host};
pub use legacy::{exit_once, exit_to_legacy_ui, is_legacy_mode_available};

/// Collaborators the sidebar reads from Dioxus context
#[derive(Clone)]
pub struct SidebarServices {
    pub cookies: Rc<dyn CookieStore>,
    pub host: Rc<dyn Host>,
}

impl SidebarServices {
    pub fn browser() -> Self {
        Self {
            cookies: Rc::new(BrowserCookies),
            host: Rc::new(BrowserHost),
        }
    }

    /// Location the sidebar matches against, falling back to the router's
    /// rendering of the route when the host has no live location
    pub fn current_path(&self, route_path: impl FnOnce() -> String) -> String {
        self.host.current_path().unwrap_or_else(route_path)
    }
}
