use dioxus::prelude::*;

use crate::components::{CategoryGrid, Testimonials, TourCard};
use crate::catalog::TOURS;
use crate::t;
use crate::Hero;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-home",
            Hero {}

            CategoryGrid {}

            section { class: "featured-tours",
                div { class: "featured-tours__header",
                    h2 { {t!("home-tours-title")} }
                    p { class: "featured-tours__subtitle", {t!("home-tours-subtitle")} }
                }
                div { class: "tour-grid",
                    for tour in TOURS.iter().take(3) {
                        TourCard { key: "{tour.id}", tour: *tour }
                    }
                }
            }

            Testimonials {}
        }
    }
}
