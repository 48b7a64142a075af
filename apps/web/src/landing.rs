//! Pre-results screen: title, search box, loading and error states, and
//! example questions.

use dioxus::prelude::*;
use litpath_core::state::EXAMPLE_QUESTIONS;
use litpath_core::types::BackendStatus;
use litpath_core::Action;

use crate::app::{ArrowIcon, BookIcon};
use crate::search::SearchBox;
use crate::state::*;

#[component]
pub fn Landing() -> Element {
    let view = VIEW.read();
    let loading = view.is_loading();

    rsx! {
        div {
            class: "landing",

            div {
                class: "landing-hero",
                div {
                    class: "landing-title",
                    BookIcon { size: 40 }
                    h1 {
                        span { class: "brand-primary", "LitPath" }
                        " "
                        span { class: "brand-accent", "AI" }
                    }
                }
                p { class: "landing-tagline", "Discover easier and faster." }
            }

            SearchBox {}

            if loading {
                div {
                    class: "loading",
                    div { class: "spinner" }
                    "Searching for insights..."
                }
            }

            ErrorBox {}

            div {
                class: "examples",
                h3 { "Example questions" }
                div {
                    class: "question-grid",
                    for question in EXAMPLE_QUESTIONS.iter().copied() {
                        button {
                            key: "{question}",
                            class: "question-card",
                            onclick: move |_| dispatch(Action::AskQuestion(question.to_string())),
                            span { "{question}" }
                            ArrowIcon { size: 22 }
                        }
                    }
                }
            }
        }
    }
}

/// The current error, with a connection hint while the backend is down.
#[component]
pub fn ErrorBox() -> Element {
    let view = VIEW.read();
    let Some(error) = view.error() else {
        return rsx! {};
    };
    let backend_down = matches!(view.backend(), Some(BackendStatus::Error { .. }));
    let base = base_url();

    rsx! {
        div {
            class: "error-box",
            "{error}"
            if backend_down {
                div {
                    class: "error-hint",
                    "Make sure your backend is running on {base}"
                }
            }
        }
    }
}
