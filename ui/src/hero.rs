use dioxus::prelude::*;

use crate::t;

/// Landing banner. The backdrop image is applied by the theme stylesheet;
/// the call to action routes into the tour listing.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop", aria_hidden: "true" }
            div { class: "hero__inner",
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
                Link { class: "button button--primary hero__cta", to: "/tours",
                    {t!("hero-cta")}
                }
            }
        }
    }
}
