use dioxus::prelude::*;

use crate::{
    domain::{evaluate_form, CalculationReport, FormState, Recipe},
    ui::{
        components::{
            controls::ControlsBar, kpi_card::KpiCard, material_row::MaterialRow,
            meseta_icon::MesetaIcon, summary_card::SummaryCard,
        },
        theme::Tone,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<FormState>>();
    let recipe = use_context::<Recipe>();

    let form = state();
    let report = CalculationReport::from(&evaluate_form(&form, &recipe));
    let display = report.display.clone();
    let net_tone = if report.is_loss { Tone::Loss } else { Tone::Gain };

    let rows = report
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let input = form.material(idx).cloned().unwrap_or_default();
            (idx, line.key.clone(), line.clone(), input)
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "panel",
            div { class: "table-head",
                div { "Augments" }
                div { "Require" }
                div { "Owned" }
                div { "Market Price" }
                div { style: "text-align: right", "N-Meseta" }
            }

            div { class: "rows",
                for (idx, key, line, input) in rows {
                    MaterialRow {
                        key: "{key}",
                        line,
                        owned_text: input.owned,
                        price_text: input.price,
                        on_step: {
                            let recipe = recipe.clone();
                            move |delta: i64| state.with_mut(|st| st.step_owned(&recipe, idx, delta))
                        },
                        on_price: move |raw: String| state.with_mut(|st| st.set_price(idx, &raw)),
                    }
                }
            }

            div { class: "total-bar",
                div { class: "label", "Total Expenses" }
                div { class: "value", "{display.total_expenses}" }
            }
        }

        section { class: "summary-grid",
            div { class: "panel panel-padded",
                div { class: "section-label", "Total Revenue (Sell Price)" }
                div { class: "field-wrap",
                    input {
                        class: "field field-large",
                        r#type: "text",
                        inputmode: "numeric",
                        value: "{form.sell_price}",
                        placeholder: "0",
                        oninput: move |evt: FormEvent| {
                            let raw = evt.value();
                            state.with_mut(|st| st.set_sell_price(&raw));
                        },
                    }
                    span { class: "field-icon", MesetaIcon {} }
                }

                div { class: "kpi-grid",
                    KpiCard {
                        title: "Gross profit".to_string(),
                        value: display.gross_profit.clone(),
                        tone: Tone::for_profit(report.gross_profit),
                    }
                    KpiCard {
                        title: "EBT (Tax)".to_string(),
                        value: display.tax.clone(),
                        hint: Some(recipe.tax_label()),
                        tone: Tone::Neutral,
                    }
                    KpiCard {
                        title: "Net income (N)".to_string(),
                        value: display.net_income.clone(),
                        tone: net_tone,
                    }
                    KpiCard {
                        title: "Net income (%)".to_string(),
                        value: display.net_income_percent.clone(),
                        tone: net_tone,
                        currency: false,
                    }
                }
            }

            SummaryCard { display: display.clone(), is_loss: report.is_loss }
        }

        ControlsBar {}
    }
}
