use dioxus::prelude::*;

use crate::ui::{
    components::meseta_icon::MesetaIcon,
    theme::{self, Tone},
};

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    hint: Option<String>,
    tone: Tone,
    #[props(default = true)] currency: bool,
) -> Element {
    rsx! {
        div { class: "kpi",
            div { class: "kpi-title",
                "{title}"
                if let Some(hint) = hint {
                    span { class: "kpi-hint", " = {hint}" }
                }
            }
            div { class: "{theme::kpi_value(tone)}",
                span { "{value}" }
                if currency {
                    MesetaIcon {}
                }
            }
        }
    }
}
