use dioxus::prelude::*;

use crate::{
    domain::SummaryDisplay,
    ui::{
        components::meseta_icon::MesetaIcon,
        theme::{self, Tone},
    },
};

/// Plain-language recap of the three headline figures.
#[component]
pub fn SummaryCard(display: SummaryDisplay, is_loss: bool) -> Element {
    let net_class = theme::highlight(if is_loss { Tone::Loss } else { Tone::Gain });

    rsx! {
        div { class: "panel panel-padded",
            h2 { class: "summary-title", "สรุป" }
            div { class: "summary-line",
                "ต้องการ "
                MesetaIcon {}
                " Meseta ในการซื้อหลอด Augment เป็นจำนวน "
                span { class: "{theme::highlight(Tone::Cost)}", "{display.total_expenses}" }
                " "
                MesetaIcon {}
            }
            div { class: "summary-line",
                "หากลงขายตลาดจะได้เป็นเงิน "
                span { class: "{theme::highlight(Tone::Gain)}", "{display.total_revenue}" }
                " "
                MesetaIcon {}
                " Meseta"
            }
            div { class: "summary-line",
                "กำไรทั้งหมดเมื่อหักลบต้นทุน "
                span { class: "{net_class}", "{display.net_income}" }
                " "
                MesetaIcon {}
                " Meseta"
            }
        }
    }
}
