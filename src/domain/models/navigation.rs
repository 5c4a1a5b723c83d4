//! Static navigation tables for the Lens sidebar
//!
//! The page and external-link tables are fixed at compile time. Which page is
//! selected is never stored: it is derived from the current path on every call.

use serde::Serialize;

/// Root path of the Lens application
pub const ROOT_PATH: &str = "/zipkin";

/// Root path with the trailing slash the classic UI expects
pub const CANONICAL_ROOT_PATH: &str = "/zipkin/";

/// Logical pages reachable from the sidebar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Search,
    Dependencies,
}

impl PageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Search => "search",
            PageId::Dependencies => "dependencies",
        }
    }
}

/// A configured destination within the new UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub id: PageId,
    pub path: &'static str,
    pub label: &'static str,
    /// Font Awesome solid icon class
    pub icon: &'static str,
}

/// Menu pages, in display order
pub static PAGES: [PageEntry; 2] = [
    PageEntry {
        id: PageId::Search,
        path: ROOT_PATH,
        label: "Search",
        icon: "fa-search",
    },
    PageEntry {
        id: PageId::Dependencies,
        path: "/zipkin/dependency",
        label: "Dependencies",
        icon: "fa-code-branch",
    },
];

impl PageEntry {
    pub fn get(id: PageId) -> &'static PageEntry {
        match id {
            PageId::Search => &PAGES[0],
            PageId::Dependencies => &PAGES[1],
        }
    }
}

/// Community link shown at the bottom of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub url: &'static str,
    /// Full Font Awesome class list (style prefix + icon)
    pub icon: &'static str,
    pub title: &'static str,
}

/// External links, in display order
pub static EXTERNAL_LINKS: [ExternalLink; 4] = [
    ExternalLink {
        url: "https://zipkin.apache.org/",
        icon: "fas fa-home",
        title: "Zipkin home page",
    },
    ExternalLink {
        url: "https://github.com/openzipkin/zipkin",
        icon: "fab fa-github",
        title: "Source code",
    },
    ExternalLink {
        url: "https://twitter.com/zipkinproject",
        icon: "fab fa-twitter",
        title: "Twitter",
    },
    ExternalLink {
        url: "https://gitter.im/openzipkin/zipkin/",
        icon: "fab fa-gitter",
        title: "Gitter chat",
    },
];

/// One row of the rendered menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub entry: &'static PageEntry,
    pub active: bool,
}

impl MenuItem {
    /// BEM modifier suffix for the selected variant
    pub fn modifier(&self) -> &'static str {
        if self.active { "--selected" } else { "" }
    }
}

/// Entry whose path equals `current_path` exactly, if any.
///
/// Sub-routes such as `/zipkin/traces/abc` select nothing.
pub fn compute_active_entry(current_path: &str) -> Option<&'static PageEntry> {
    PAGES.iter().find(|entry| entry.path == current_path)
}

/// Menu rows in fixed order, each flagged from [`compute_active_entry`]
pub fn render_menu(current_path: &str) -> [MenuItem; 2] {
    let active = compute_active_entry(current_path).map(|entry| entry.id);
    let [search, dependencies] = &PAGES;
    [search, dependencies].map(|entry| MenuItem {
        entry,
        active: active == Some(entry.id),
    })
}

/// Path to push before handing control to the classic UI.
///
/// The server redirects `/zipkin` to `/zipkin/`, so pushing the bare root
/// would bounce back into Lens.
pub fn legacy_target_path(current_path: &str) -> &str {
    if current_path == ROOT_PATH {
        CANONICAL_ROOT_PATH
    } else {
        current_path
    }
}
