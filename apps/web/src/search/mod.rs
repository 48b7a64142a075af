//! Search box — question input plus subject/date filters.

mod filters;
mod search_input;

use dioxus::prelude::*;
use filters::Filters;
use search_input::SearchInput;

/// Search box shown on both the landing screen and above results.
#[component]
pub fn SearchBox() -> Element {
    rsx! {
        div {
            class: "search-box",
            SearchInput {}
            Filters {}
        }
    }
}
