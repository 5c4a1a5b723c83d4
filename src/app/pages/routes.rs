use crate::app::layouts::Sidebar;
use crate::app::pages::views::{Dependencies, NotFound, Search, Trace};
use crate::config::LensConfig;
use crate::domain::models::PageId;
use crate::shared::services::SidebarServices;

use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[redirect("/", || Route::Search {})]
    #[route("/zipkin")]
    Search {},
    #[route("/zipkin/dependency")]
    Dependencies {},
    // Sub-route: no menu entry is selected here
    #[route("/zipkin/traces/:trace_id")]
    Trace { trace_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<PageId> for Route {
    fn from(id: PageId) -> Self {
        match id {
            PageId::Search => Route::Search {},
            PageId::Dependencies => Route::Dependencies {},
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(LensConfig::from_env);
    use_context_provider(SidebarServices::browser);

    use_effect(|| {
        tracing::info!("Zipkin Lens initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://use.fontawesome.com/releases/v5.15.4/css/all.css"
        }
        div { class: "c-layout",
            Sidebar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
