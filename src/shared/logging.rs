//! Structured logging module for Zipkin Lens
//!
//! Keeps field names consistent between the sidebar render path and the
//! legacy exit action.

/// Logged operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SidebarRender,
    LegacyExit,
    CookieStore,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SidebarRender => "sidebar_render",
            LogOperation::LegacyExit => "legacy_exit",
            LogOperation::CookieStore => "cookie_store",
        }
    }
}

/// Log a sidebar render pass
pub fn log_sidebar_render(current_path: &str, active: Option<&str>, legacy_available: bool) {
    tracing::trace!(
        operation = LogOperation::SidebarRender.as_str(),
        current_path = current_path,
        active_page = active.unwrap_or("none"),
        legacy_available = legacy_available,
        "Rendering sidebar"
    );
}

/// Log the start of a legacy exit
pub fn log_legacy_exit_start(current_path: &str, target_path: &str) {
    tracing::info!(
        operation = LogOperation::LegacyExit.as_str(),
        current_path = current_path,
        target_path = target_path,
        "Returning to classic UI"
    );
}

/// Log a cookie removal failure (non-fatal)
pub fn log_cookie_remove_error(name: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::CookieStore.as_str(),
        cookie = name,
        error = error,
        "Failed to clear cookie, continuing"
    );
}

/// Log a navigation failure; the reload is still issued
pub fn log_navigation_error(target_path: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::LegacyExit.as_str(),
        target_path = target_path,
        error = error,
        "Failed to push target path"
    );
}

/// Log a repeated activation while an exit is already in flight
pub fn log_legacy_exit_ignored() {
    tracing::debug!(
        operation = LogOperation::LegacyExit.as_str(),
        "Ignoring repeated activation"
    );
}

/// Log an exit that failed past the cookie step
pub fn log_legacy_exit_error(error: &str) {
    tracing::error!(
        operation = LogOperation::LegacyExit.as_str(),
        error = error,
        "Legacy exit failed"
    );
}
