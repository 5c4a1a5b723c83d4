//! Page bodies behind the sidebar
//!
//! Trace search and the dependency graph are served elsewhere; these views
//! only hold their place in the layout.

use dioxus::prelude::*;

#[component]
pub fn Search() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Search" }
        }
    }
}

#[component]
pub fn Dependencies() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Dependencies" }
        }
    }
}

#[component]
pub fn Trace(trace_id: String) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Trace {trace_id}" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Page not found" }
            p { "/{path}" }
        }
    }
}
