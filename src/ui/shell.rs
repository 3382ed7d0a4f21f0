use dioxus::prelude::*;

use crate::domain::Recipe;
use crate::util::version::{version_label, APP_AUTHOR, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let recipe = use_context::<Recipe>();

    rsx! {
        div { class: "page",
            header { class: "header",
                h1 { "{recipe.name_jp}" }
                p { class: "subtitle", "{recipe.name_en}" }
            }
            main {
                {children}
            }
            footer { class: "footer",
                "{APP_NAME} {version_label()} · contact dev : {APP_AUTHOR}"
            }
        }
    }
}
