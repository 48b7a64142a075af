//! Results screen — sources carousel, selected-source panel, overview with
//! citation badges, related questions, and the detail overlay.

mod overlay;
mod overview;
mod sources;

use dioxus::prelude::*;
use litpath_core::state::MAX_RATING;
use litpath_core::Action;

use crate::landing::ErrorBox;
use crate::search::SearchBox;
use crate::state::*;

pub use overlay::DetailOverlay;
use overview::{Overview, RelatedQuestions};
use sources::{SourceCarousel, SourceDetail};

#[component]
pub fn ResultsView() -> Element {
    let view = VIEW.read();
    let Some(results) = view.results() else {
        return rsx! {};
    };
    let query = results.query.clone();
    let has_selection = view.selected_source().is_some();

    rsx! {
        div {
            class: "results",
            SearchBox {}
            ErrorBox {}

            h2 { class: "results-query", "{query}" }

            SourceCarousel {}
            if has_selection {
                SourceDetail {}
            }
            Overview {}
            RelatedQuestions {}
            Rating {}
        }
    }
}

/// Feedback stars for the current answer.
#[component]
fn Rating() -> Element {
    let rating = VIEW.read().rating();

    rsx! {
        div {
            class: "rating",
            span { class: "rating-label", "Was this helpful?" }
            for star in 1..=MAX_RATING {
                button {
                    key: "{star}",
                    class: if star <= rating { "rating-star filled" } else { "rating-star" },
                    title: "{star}",
                    onclick: move |_| dispatch(Action::SetRating(star)),
                    "\u{2605}"
                }
            }
        }
    }
}
