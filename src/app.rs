use dioxus::prelude::*;

use crate::{
    domain::{FormState, Recipe},
    ui::{pages::CalculatorPage, shell::Shell},
    util::assets,
};

#[component]
pub fn App() -> Element {
    let recipe = use_hook(Recipe::load_or_default);
    let state = use_signal({
        let recipe = recipe.clone();
        move || FormState::new(&recipe)
    });
    use_context_provider(|| recipe.clone());
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "icon", href: assets::meseta_icon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { CalculatorPage {} }
    }
}
