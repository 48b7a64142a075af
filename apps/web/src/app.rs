//! Root application component — header, status banner, sidebar, and the
//! main panel that switches between the landing screen and results.

use dioxus::prelude::*;
use litpath_core::events::{PointerDown, PointerHub};
use litpath_core::{Action, Effect};

use crate::landing::Landing;
use crate::results::{DetailOverlay, ResultsView};
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let hub = use_context_provider(PointerHub::new);

    // Health check, once per mount.
    use_hook(|| run(Effect::CheckHealth));

    let has_results = VIEW.read().results().is_some();
    let overlay_open = VIEW.read().overlay_open();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            // Document-level pointer events: the shell fills the viewport and
            // body has no margin, so this sees every mouse-down on the page.
            // Dropdowns stop propagation and publish their own.
            onmousedown: move |_| {
                hub.emit(PointerDown { inside: None });
            },

            Header {}
            StatusBanner {}

            div {
                class: "page",
                Sidebar {}
                main {
                    class: "main-panel",
                    if has_results {
                        ResultsView {}
                    } else {
                        Landing {}
                    }
                }
            }

            if overlay_open {
                DetailOverlay {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "topbar",
            div {
                class: "topbar-brand",
                span { class: "topbar-title", "DOST UNION CATALOG" }
                span {
                    class: "topbar-subtitle",
                    "LitPath AI: Smart PathFinder of Theses and Dissertation"
                }
            }
            nav {
                class: "topbar-nav",
                a {
                    href: "http://scinet.dost.gov.ph/#/opac",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Online Public Access Catalog"
                }
                a { class: "active", href: "#", "LitPath AI" }
            }
        }
    }
}

/// Backend health indicator. Hidden until the first health check resolves.
#[component]
fn StatusBanner() -> Element {
    let view = VIEW.read();
    let Some(status) = view.backend() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: if status.is_healthy() { "status-banner ok" } else { "status-banner error" },
            "{status.banner()}"
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                BookIcon { size: 24 }
                span { "LitPath AI" }
            }
            button {
                class: "new-chat",
                onclick: move |_| dispatch(Action::NewChat),
                "Start a new chat"
            }
            div {
                class: "sidebar-history",
                h3 { "Research history" }
                p { "After you start a new chat, your research history will be displayed here." }
            }
            p {
                class: "sidebar-footnote",
                "AI-generated content. Quality may vary. Check for accuracy."
            }
        }
    }
}

#[component]
pub fn BookIcon(size: u32) -> Element {
    rsx! {
        svg {
            class: "icon-book",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M2 3h6a4 4 0 014 4v14a3 3 0 00-3-3H2z" }
            path { d: "M22 3h-6a4 4 0 00-4 4v14a3 3 0 013-3h7z" }
        }
    }
}

#[component]
pub fn ArrowIcon(size: u32) -> Element {
    rsx! {
        svg {
            class: "icon-arrow",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            line { x1: "5", y1: "12", x2: "19", y2: "12" }
            polyline { points: "12 5 19 12 12 19" }
        }
    }
}
