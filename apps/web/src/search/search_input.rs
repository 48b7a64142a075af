//! Question input with Enter/click submit.

use dioxus::prelude::*;
use litpath_core::Action;

use crate::app::ArrowIcon;
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let view = VIEW.read();
    let query = view.query().to_string();
    let loading = view.is_loading();

    rsx! {
        div {
            class: "search-field",

            svg {
                class: "search-icon",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "What is your research question?",
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| dispatch(Action::SetQuery(e.value())),
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        dispatch(Action::Submit);
                    }
                },
            }

            button {
                class: "search-submit",
                title: "Search",
                disabled: loading,
                onclick: move |_| dispatch(Action::Submit),
                ArrowIcon { size: 20 }
            }
        }
    }
}
