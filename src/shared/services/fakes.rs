//! In-memory collaborators for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{CookieStore, Host};
use crate::shared::errors::{AppError, Result};

#[derive(Default)]
pub struct MemoryCookieStore {
    cookies: RefCell<HashMap<String, String>>,
    pub fail_removal: Cell<bool>,
    pub removals: Cell<usize>,
}

impl MemoryCookieStore {
    pub fn with(name: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(name, value);
        store
    }

    /// Simulates another tab or the classic UI writing the cookie
    pub fn set(&self, name: &str, value: &str) {
        self.cookies
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned()
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.removals.set(self.removals.get() + 1);
        if self.fail_removal.get() {
            return Err(AppError::CookieError("cookie jar is read-only".to_string()));
        }
        self.cookies.borrow_mut().remove(name);
        Ok(())
    }
}

/// Effects issued against the host, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Navigate(String),
    Reload,
}

#[derive(Default)]
pub struct RecordingHost {
    pub location: Option<String>,
    pub calls: RefCell<Vec<HostCall>>,
    pub fail_navigation: Cell<bool>,
}

impl RecordingHost {
    /// Host whose browser location is `path`, verbatim
    pub fn at(path: &str) -> Self {
        Self {
            location: Some(path.to_string()),
            ..Self::default()
        }
    }
}

impl Host for RecordingHost {
    fn current_path(&self) -> Option<String> {
        self.location.clone()
    }

    fn navigate_to(&self, path: &str) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Navigate(path.to_string()));
        if self.fail_navigation.get() {
            return Err(AppError::NavigationError("history is locked".to_string()));
        }
        Ok(())
    }

    fn force_reload(&self) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Reload);
        Ok(())
    }
}
