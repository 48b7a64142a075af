//! Full-screen detail panel for the selected source.

use dioxus::prelude::*;
use litpath_core::format::subjects_display;
use litpath_core::Action;

use crate::state::*;

#[component]
pub fn DetailOverlay() -> Element {
    let view = VIEW.read();
    let Some(source) = view.selected_source() else {
        return rsx! {};
    };
    let subjects = subjects_display(Some(&source.subjects));
    let call_no = source.call_no.clone().unwrap_or_default();

    rsx! {
        div {
            class: "overlay",
            div {
                class: "overlay-panel",
                div {
                    class: "overlay-header",
                    button {
                        class: "overlay-back",
                        onclick: move |_| dispatch(Action::CloseOverlay),
                        "\u{2190} Back"
                    }
                    h2 { "{source.title}" }
                }
                div {
                    class: "overlay-body",
                    dl {
                        class: "overlay-fields",
                        dt { "Degree:" }
                        dd { "{source.degree}" }
                        dt { "Author:" }
                        dd { "{source.author}" }
                        dt { "Publication Year:" }
                        dd { "{source.year}" }
                        dt { "Subject/s:" }
                        dd {
                            for (i, subject) in subjects.iter().enumerate() {
                                div { key: "{i}", "\u{2022} {subject}" }
                            }
                        }
                        dt { "University/College:" }
                        dd { "{source.school}" }
                        if !call_no.is_empty() {
                            dt { "Call Number:" }
                            dd { "{call_no}" }
                        }
                    }
                    div {
                        class: "library-contact",
                        div { class: "strong", "STII Bldg., Gen. Santos Ave., Upper Bicutan," }
                        div { "Taguig City, Metro Manila, 1631, Philippines" }
                        div { class: "contact-line", "library@stii.dost.gov.ph" }
                        div { class: "contact-line", "Full text available at DOST-STII Library from 8am - 5pm" }
                    }
                    h3 { class: "overlay-abstract-title", "ABSTRACT" }
                    p { class: "overlay-abstract", "{source.abstract_text}" }
                }
            }
        }
    }
}
