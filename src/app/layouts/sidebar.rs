use crate::app::pages::routes::Route;
use crate::config::LensConfig;
use crate::domain::models::{compute_active_entry, render_menu, MenuItem, EXTERNAL_LINKS};
use crate::shared::logging::{log_legacy_exit_error, log_sidebar_render};
use crate::shared::services::{exit_once, is_legacy_mode_available, SidebarServices};
use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/img/zipkin-logo.svg");

/// Persistent left navigation: brand, page menu, classic-UI exit, community links
#[component]
pub fn Sidebar() -> Element {
    // Subscribes the sidebar to navigation even though matching uses the raw location
    let route = use_route::<Route>();
    let config = use_context::<LensConfig>();
    let services = use_context::<SidebarServices>();
    // One-shot: the reload never comes back to this render
    let mut exiting = use_signal(|| false);

    // The router trims trailing slashes; matching must see the location as-is
    let current_path = services.current_path(|| route.to_string());
    let menu = render_menu(&current_path);
    // Other tabs and the classic UI write this cookie, so read it every render
    let legacy_available = is_legacy_mode_available(&*services.cookies, &config.legacy_cookie);

    log_sidebar_render(
        &current_path,
        compute_active_entry(&current_path).map(|entry| entry.id.as_str()),
        legacy_available,
    );

    let cookie_name = config.legacy_cookie.clone();
    let exit_path = current_path.clone();
    let on_exit = move |evt: MouseEvent| {
        let mut fired = exiting();
        let outcome = exit_once(
            &mut fired,
            &*services.cookies,
            &*services.host,
            &cookie_name,
            &exit_path,
        );
        exiting.set(fired);
        if let Some(Err(e)) = outcome {
            log_legacy_exit_error(&e.to_string());
        }
        evt.prevent_default();
    };

    rsx! {
        div { class: "sidebar",
            Link {
                to: Route::Search {},
                class: "sidebar__brand-link",
                img { class: "sidebar__brand-logo", src: LOGO, alt: "Zipkin" }
            }
            div { class: "sidebar__menu",
                for item in menu {
                    PageOption { key: "{item.entry.label}", item }
                }
            }
            if legacy_available {
                div { class: "sidebar__go-back-to-classic-button-wrapper",
                    button {
                        r#type: "button",
                        class: "sidebar__go-back-to-classic-button",
                        disabled: exiting(),
                        onclick: on_exit,
                        "Go back to classic Zipkin"
                    }
                }
            }
            div { class: "sidebar__other-links",
                for link in EXTERNAL_LINKS.iter() {
                    a {
                        key: "{link.url}",
                        href: link.url,
                        title: link.title,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        div { class: "sidebar__other-link {link.icon}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PageOption(item: MenuItem) -> Element {
    let modifier = item.modifier();

    rsx! {
        div { class: "sidebar__page-option{modifier}",
            Link {
                to: Route::from(item.entry.id),
                class: "sidebar__page-option-link{modifier}",
                div { class: "sidebar__page-option-icon",
                    i { class: "fas {item.entry.icon}" }
                }
                div { "{item.entry.label}" }
            }
        }
    }
}
