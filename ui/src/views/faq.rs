use dioxus::prelude::*;

use crate::components::FaqAccordion;

#[component]
pub fn Faq() -> Element {
    rsx! {
        section { class: "page page-faq",
            header { class: "page__header page__header--banner",
                h1 { "Travel Support Center" }
                p {
                    "Find answers to all your travel-related questions and get the "
                    "support you need for your journey."
                }
            }

            FaqAccordion {}

            div { class: "faq__resources",
                h2 { "Additional Resources" }
                div { class: "faq__resource-cards",
                    div { class: "faq__resource-card",
                        h3 { "Travel Guides" }
                        p { "Explore our comprehensive guides to popular destinations around the world." }
                    }
                    div { class: "faq__resource-card",
                        h3 { "Trip Planning" }
                        p { "Plan your perfect itinerary with our interactive tools and expert recommendations." }
                    }
                    div { class: "faq__resource-card",
                        h3 { "Travel Community" }
                        p { "Connect with fellow travelers, share experiences, and get inspired for your next adventure." }
                    }
                }
            }
        }
    }
}
