//! Hand-off from Lens back to the classic server-rendered UI

use super::{CookieStore, Host};
use crate::domain::models::legacy_target_path;
use crate::shared::errors::Result;
use crate::shared::logging::{
    log_cookie_remove_error, log_legacy_exit_ignored, log_legacy_exit_start,
    log_navigation_error,
};

/// Whether the classic UI set up this session.
///
/// Presence is all that matters; an empty value still counts.
pub fn is_legacy_mode_available(cookies: &dyn CookieStore, cookie_name: &str) -> bool {
    cookies.get(cookie_name).is_some()
}

/// Clear the legacy flag, push the target path and reload the document.
///
/// Cookie removal is best-effort. The reload is issued even when the push
/// fails; the first navigation or reload error is returned.
pub fn exit_to_legacy_ui(
    cookies: &dyn CookieStore,
    host: &dyn Host,
    cookie_name: &str,
    current_path: &str,
) -> Result<()> {
    if let Err(e) = cookies.remove(cookie_name) {
        log_cookie_remove_error(cookie_name, &e.to_string());
    }

    let target = legacy_target_path(current_path);
    log_legacy_exit_start(current_path, target);

    let navigated = host.navigate_to(target);
    if let Err(e) = &navigated {
        log_navigation_error(target, &e.to_string());
    }

    let reloaded = host.force_reload();
    navigated.and(reloaded)
}

/// Run [`exit_to_legacy_ui`] unless `fired` is already set.
///
/// Returns `None` for a repeated activation; the reload is already under way.
pub fn exit_once(
    fired: &mut bool,
    cookies: &dyn CookieStore,
    host: &dyn Host,
    cookie_name: &str,
    current_path: &str,
) -> Option<Result<()>> {
    if *fired {
        log_legacy_exit_ignored();
        return None;
    }
    *fired = true;
    Some(exit_to_legacy_ui(cookies, host, cookie_name, current_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use crate::shared::services::fakes::{HostCall, MemoryCookieStore, RecordingHost};

    const COOKIE: &str = "lens";

    #[test]
    fn test_legacy_mode_follows_cookie_presence() {
        assert!(!is_legacy_mode_available(&MemoryCookieStore::default(), COOKIE));
        assert!(is_legacy_mode_available(&MemoryCookieStore::with(COOKIE, "true"), COOKIE));
        assert!(is_legacy_mode_available(&MemoryCookieStore::with(COOKIE, ""), COOKIE));
        assert!(!is_legacy_mode_available(&MemoryCookieStore::with("other", "1"), COOKIE));
    }

    #[test]
    fn test_legacy_mode_reads_fresh_each_time() {
        let cookies = MemoryCookieStore::default();
        assert!(!is_legacy_mode_available(&cookies, COOKIE));
        cookies.set(COOKIE, "1");
        assert!(is_legacy_mode_available(&cookies, COOKIE));
    }

    #[test]
    fn test_exit_from_root_uses_trailing_slash() {
        let cookies = MemoryCookieStore::with(COOKIE, "1");
        let host = RecordingHost::default();

        exit_to_legacy_ui(&cookies, &host, COOKIE, "/zipkin").unwrap();

        assert_eq!(cookies.get(COOKIE), None);
        assert_eq!(
            *host.calls.borrow(),
            vec![HostCall::Navigate("/zipkin/".to_string()), HostCall::Reload]
        );
    }

    #[test]
    fn test_exit_from_dependencies_keeps_path() {
        let cookies = MemoryCookieStore::with(COOKIE, "1");
        let host = RecordingHost::default();

        exit_to_legacy_ui(&cookies, &host, COOKIE, "/zipkin/dependency").unwrap();

        assert_eq!(cookies.get(COOKIE), None);
        assert_eq!(
            *host.calls.borrow(),
            vec![
                HostCall::Navigate("/zipkin/dependency".to_string()),
                HostCall::Reload
            ]
        );
    }

    #[test]
    fn test_exit_without_cookie_is_fine() {
        let cookies = MemoryCookieStore::default();
        let host = RecordingHost::default();

        assert!(exit_to_legacy_ui(&cookies, &host, COOKIE, "/zipkin/traces/abc").is_ok());
        assert_eq!(cookies.removals.get(), 1);
        assert_eq!(host.calls.borrow().len(), 2);
    }

    #[test]
    fn test_cookie_failure_does_not_block_navigation() {
        let cookies = MemoryCookieStore::with(COOKIE, "1");
        cookies.fail_removal.set(true);
        let host = RecordingHost::default();

        assert!(exit_to_legacy_ui(&cookies, &host, COOKIE, "/zipkin").is_ok());
        assert_eq!(
            *host.calls.borrow(),
            vec![HostCall::Navigate("/zipkin/".to_string()), HostCall::Reload]
        );
    }

    #[test]
    fn test_navigation_failure_still_reloads() {
        let cookies = MemoryCookieStore::with(COOKIE, "1");
        let host = RecordingHost::default();
        host.fail_navigation.set(true);

        let result = exit_to_legacy_ui(&cookies, &host, COOKIE, "/zipkin/dependency");

        assert!(matches!(result, Err(AppError::NavigationError(_))));
        assert_eq!(host.calls.borrow().last(), Some(&HostCall::Reload));
        assert_eq!(cookies.get(COOKIE), None);
    }

    #[test]
    fn test_exit_runs_once() {
        let cookies = MemoryCookieStore::with(COOKIE, "1");
        let host = RecordingHost::default();
        let mut fired = false;

        assert!(exit_once(&mut fired, &cookies, &host, COOKIE, "/zipkin").is_some());
        assert!(fired);
        assert!(exit_once(&mut fired, &cookies, &host, COOKIE, "/zipkin").is_none());

        assert_eq!(cookies.removals.get(), 1);
        assert_eq!(
            *host.calls.borrow(),
            vec![HostCall::Navigate("/zipkin/".to_string()), HostCall::Reload]
        );
    }

    #[test]
    fn test_exit_keeps_trailing_slash_location() {
        let cookies = MemoryCookieStore::with(COOKIE, "1");
        let host = RecordingHost::default();

        exit_to_legacy_ui(&cookies, &host, COOKIE, "/zipkin/dependency/").unwrap();

        assert_eq!(
            host.calls.borrow().first(),
            Some(&HostCall::Navigate("/zipkin/dependency/".to_string()))
        );
    }
}
