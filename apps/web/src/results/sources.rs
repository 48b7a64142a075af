//! Source cards and the inline detail panel for the selected source.

use dioxus::prelude::*;
use litpath_core::format::abstract_preview;
use litpath_core::Action;

use crate::app::BookIcon;
use crate::state::*;

#[component]
pub fn SourceCarousel() -> Element {
    let view = VIEW.read();
    let Some(results) = view.results() else {
        return rsx! {};
    };
    let selected_id = view.selected_source().map(|s| s.id);

    rsx! {
        section {
            class: "sources",
            h3 {
                class: "section-title",
                BookIcon { size: 24 }
                span { "Sources" }
            }
            div {
                class: "source-strip",
                for source in results.sources.iter() {
                    div {
                        key: "{source.id}",
                        class: if selected_id == Some(source.id) { "source-card selected" } else { "source-card" },
                        onclick: {
                            let id = source.id;
                            move |_| dispatch(Action::SelectSource(id))
                        },
                        div { class: "source-badge", "{source.id}" }
                        h4 { class: "source-title", "{source.title}" }
                        p { class: "source-meta", "{source.author} \u{2022} {source.year}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SourceDetail() -> Element {
    let view = VIEW.read();
    let Some(source) = view.selected_source() else {
        return rsx! {};
    };
    let preview = abstract_preview(&source.abstract_text);

    rsx! {
        div {
            class: "source-detail",
            div {
                class: "source-detail-header",
                h3 { "{source.title}" }
                button {
                    class: "close",
                    onclick: move |_| dispatch(Action::ClearSelection),
                    "\u{00D7}"
                }
            }
            p { class: "source-meta", "{source.author} \u{2022} {source.year}" }
            div {
                class: "source-abstract",
                h4 { "Abstract:" }
                p { "{preview}" }
            }
            button {
                class: "more-details",
                onclick: move |_| dispatch(Action::OpenOverlay),
                "More details and request options"
            }
        }
    }
}
