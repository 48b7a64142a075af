//! Overview text with `[n]` markers rendered as badges, and the related
//! questions grid.

use dioxus::prelude::*;
use litpath_core::citations::{overview_fragments, OverviewFragment};
use litpath_core::Action;

use crate::app::ArrowIcon;
use crate::state::*;

#[component]
pub fn Overview() -> Element {
    let view = VIEW.read();
    let Some(results) = view.results() else {
        return rsx! {};
    };
    let fragments = overview_fragments(&results.overview);

    rsx! {
        section {
            class: "overview",
            h3 { class: "section-title", "Overview of Sources" }
            div {
                class: "overview-body",
                for (i, fragment) in fragments.into_iter().enumerate() {
                    {render_fragment(i, fragment)}
                }
            }
        }
    }
}

/// Render one overview fragment; citations become round badges.
fn render_fragment(i: usize, fragment: OverviewFragment) -> Element {
    match fragment {
        OverviewFragment::Text(text) => rsx! {
            span { key: "{i}", "{text}" }
        },
        OverviewFragment::Citation(n) => rsx! {
            span { key: "{i}", class: "citation", "{n}" }
        },
        OverviewFragment::LineBreak => rsx! {
            br { key: "{i}" }
        },
    }
}

#[component]
pub fn RelatedQuestions() -> Element {
    let view = VIEW.read();
    let questions = view
        .results()
        .map(|r| r.related_questions.clone())
        .unwrap_or_default();
    if questions.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "related",
            h3 { class: "section-title", "Related research questions" }
            div {
                class: "question-grid",
                for (i, question) in questions.into_iter().enumerate() {
                    button {
                        key: "{i}",
                        class: "question-card related",
                        onclick: {
                            let q = question.clone();
                            move |_| dispatch(Action::AskQuestion(q.clone()))
                        },
                        span { "{question}" }
                        ArrowIcon { size: 20 }
                    }
                }
            }
        }
    }
}
