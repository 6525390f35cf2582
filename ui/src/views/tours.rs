use dioxus::prelude::*;

use crate::catalog::TOURS;
use crate::components::TourCard;

/// Full tour listing. The table is rendered as-is, in order; there is no
/// search or filtering surface.
#[component]
pub fn Tours() -> Element {
    rsx! {
        section { class: "page page-tours",
            header { class: "page__header",
                h1 { "Our Tours" }
                p { "{TOURS.len()} trips across the destinations travelers ask for most." }
            }

            div { class: "tour-grid",
                for tour in TOURS.iter() {
                    TourCard { key: "{tour.id}", tour: *tour }
                }
            }
        }
    }
}
