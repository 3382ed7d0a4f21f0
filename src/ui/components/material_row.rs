use dioxus::prelude::*;

use crate::{
    domain::{format_for_editing, LineReport},
    ui::{components::meseta_icon::MesetaIcon, theme},
};

/// One material of the recipe: requirement, owned stepper, price input and
/// the resulting cost.
#[component]
pub fn MaterialRow(
    line: LineReport,
    owned_text: String,
    price_text: String,
    on_step: EventHandler<i64>,
    on_price: EventHandler<String>,
) -> Element {
    let owned_display = format_for_editing(&owned_text);

    rsx! {
        div { class: "row",
            div {
                div { class: "name-jp", "{line.name_jp}" }
                div { class: "name-en", "{line.name_en}" }
            }

            div {
                span { class: "pill", "{line.required}" }
            }

            div {
                div { class: "stepper",
                    button {
                        r#type: "button",
                        class: "{theme::step_button(false)}",
                        title: "Decrease owned by 1",
                        onclick: move |_| on_step.call(-1),
                        "<"
                    }
                    input {
                        class: "field field-center",
                        r#type: "text",
                        inputmode: "numeric",
                        readonly: true,
                        value: "{owned_display}",
                        placeholder: "0",
                    }
                    button {
                        r#type: "button",
                        class: "{theme::step_button(true)}",
                        title: "Increase owned by 1 (max {line.max_owned})",
                        onclick: move |_| on_step.call(1),
                        ">"
                    }
                }
                if let Some(notice) = line.notice.clone() {
                    div { class: "notice", "{notice}" }
                }
            }

            div { class: "field-wrap",
                input {
                    class: "field",
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{price_text}",
                    placeholder: "0",
                    oninput: move |evt: FormEvent| on_price.call(evt.value()),
                }
                span { class: "field-icon", MesetaIcon {} }
            }

            div { class: "line-cost", "{line.line_cost_display}" }
        }
    }
}
