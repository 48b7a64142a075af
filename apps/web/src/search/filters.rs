//! Subject and date filter dropdowns, plus custom year inputs.
//!
//! Dropdowns close when a mouse-down lands outside them. The component
//! subscribes to the app's `PointerHub` on mount; the subscription lives in
//! hook storage and is dropped with the component.

use std::rc::Rc;

use dioxus::prelude::*;
use litpath_core::events::{PointerDown, PointerHub};
use litpath_core::state::Dropdown;
use litpath_core::types::{DateFilter, SUBJECTS};
use litpath_core::Action;

use crate::state::*;

#[component]
pub fn Filters() -> Element {
    let hub = use_context::<PointerHub>();
    {
        let hub = hub.clone();
        use_hook(move || Rc::new(hub.subscribe(|event| dispatch(Action::PointerDown(*event)))));
    }

    let view = VIEW.read();
    let filters = view.filters().clone();
    let subject_open = view.is_open(Dropdown::Subject);
    let date_open = view.is_open(Dropdown::Date);

    // Mouse-downs inside a dropdown are published with its name and kept
    // away from the document-level handler.
    let inside = move |dropdown: Dropdown| {
        let hub = hub.clone();
        move |e: Event<MouseData>| {
            e.stop_propagation();
            hub.emit(PointerDown { inside: Some(dropdown) });
        }
    };

    rsx! {
        div {
            class: "filters",

            div {
                class: "dropdown",
                onmousedown: inside(Dropdown::Subject),
                button {
                    class: "dropdown-toggle",
                    onclick: move |_| dispatch(Action::ToggleDropdown(Dropdown::Subject)),
                    span { "{filters.subject}" }
                    span { class: "dropdown-caret", "\u{25BE}" }
                }
                if subject_open {
                    ul {
                        class: "dropdown-menu scrollable",
                        for subject in SUBJECTS.iter().copied() {
                            li {
                                key: "{subject}",
                                class: if subject == filters.subject { "dropdown-item active" } else { "dropdown-item" },
                                onclick: move |_| dispatch(Action::SetSubject(subject.to_string())),
                                "{subject}"
                            }
                        }
                    }
                }
            }

            div {
                class: "dropdown",
                onmousedown: inside(Dropdown::Date),
                button {
                    class: "dropdown-toggle",
                    onclick: move |_| dispatch(Action::ToggleDropdown(Dropdown::Date)),
                    span { "{filters.date}" }
                    span { class: "dropdown-caret", "\u{25BE}" }
                }
                if date_open {
                    ul {
                        class: "dropdown-menu",
                        for date in DateFilter::ALL {
                            li {
                                key: "{date}",
                                class: if date == filters.date { "dropdown-item active" } else { "dropdown-item" },
                                onclick: move |_| dispatch(Action::SetDateFilter(date)),
                                "{date}"
                            }
                        }
                    }
                }
            }

            if filters.date == DateFilter::Custom {
                div {
                    class: "year-range",
                    input {
                        class: "year-input",
                        r#type: "number",
                        placeholder: "From year",
                        value: "{filters.from_year}",
                        oninput: move |e: Event<FormData>| dispatch(Action::SetFromYear(e.value())),
                    }
                    span { class: "year-sep", "\u{2013}" }
                    input {
                        class: "year-input",
                        r#type: "number",
                        placeholder: "To year",
                        value: "{filters.to_year}",
                        oninput: move |e: Event<FormData>| dispatch(Action::SetToYear(e.value())),
                    }
                }
            }
        }
    }
}
