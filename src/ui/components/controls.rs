use dioxus::prelude::*;

use crate::domain::{format_grouped, FormState, Recipe};

const PRICE_STEPS: [i64; 3] = [1_000, 10_000, 100_000];

/// Bulk actions: owned shortcuts, price nudging and reset.
#[component]
pub fn ControlsBar() -> Element {
    let mut state = use_context::<Signal<FormState>>();
    let recipe = use_context::<Recipe>();
    let mut target = use_signal(|| 0_usize);

    let materials = recipe
        .materials
        .iter()
        .enumerate()
        .map(|(idx, material)| (idx, material.name_en.clone()))
        .collect::<Vec<_>>();

    let fill_recipe = recipe.clone();
    let clear_recipe = recipe.clone();

    rsx! {
        div { class: "controls",
            button {
                class: "btn btn-ghost",
                onclick: move |_| {
                    state.with_mut(|st| st.fill_owned(&fill_recipe));
                    tracing::debug!("owned amounts set to required");
                },
                "Owned: all"
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| {
                    state.with_mut(|st| st.clear_owned(&clear_recipe));
                    tracing::debug!("owned amounts cleared");
                },
                "Owned: none"
            }

            span { class: "divider" }

            select {
                value: "{target()}",
                onchange: move |evt: FormEvent| {
                    target.set(evt.value().parse::<usize>().unwrap_or_default());
                },
                for (idx, name) in materials {
                    option { value: "{idx}", "{name}" }
                }
            }
            for step in PRICE_STEPS {
                button {
                    key: "dec-{step}",
                    class: "btn btn-dec",
                    onclick: move |_| state.with_mut(|st| st.nudge_price(target(), -step)),
                    "-{format_grouped(step)}"
                }
            }
            for step in PRICE_STEPS {
                button {
                    key: "inc-{step}",
                    class: "btn btn-inc",
                    onclick: move |_| state.with_mut(|st| st.nudge_price(target(), step)),
                    "+{format_grouped(step)}"
                }
            }

            span { class: "divider" }

            button {
                class: "btn btn-ghost",
                onclick: move |_| {
                    state.with_mut(FormState::reset_prices);
                    tracing::info!("prices reset");
                },
                "Reset prices"
            }
        }
    }
}
