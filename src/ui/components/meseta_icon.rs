use dioxus::prelude::*;

use crate::util::assets;

#[component]
pub fn MesetaIcon() -> Element {
    rsx! {
        img {
            class: "icon",
            src: assets::meseta_icon_data_uri(),
            alt: "N-Meseta",
        }
    }
}
