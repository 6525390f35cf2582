use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            header { class: "page__header page__header--banner",
                h1 { "About OmTour" }
                p { "We connect curious travelers with the trips worth taking." }
            }

            div { class: "about__body",
                p {
                    "OmTour started as a small collective of guides who believed booking a "
                    "trip should feel as good as taking one. Today we curate tours across "
                    "mountains, deserts, beaches, and everything in between, working only "
                    "with operators we have traveled with ourselves."
                }
                p {
                    "Every itinerary on this site is reviewed by our own team. We publish "
                    "real group sizes, real durations, and real prices, and we keep our "
                    "support center open around the clock."
                }
            }

            ul { class: "about__stats",
                li {
                    span { class: "about__stat-value", "620+" }
                    span { class: "about__stat-label", "Tours and activities" }
                }
                li {
                    span { class: "about__stat-value", "48" }
                    span { class: "about__stat-label", "Countries covered" }
                }
                li {
                    span { class: "about__stat-value", "24/7" }
                    span { class: "about__stat-label", "Traveler support" }
                }
            }
        }
    }
}
