use dioxus::prelude::*;

use crate::t;

struct Testimonial {
    name: &'static str,
    location: &'static str,
    rating: u8,
    content: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sara Mohamed",
        location: "Jakarta",
        rating: 5,
        content: "I've been using this booking system for several years now, and it's become my go-to platform for planning my trips. The interface is user-friendly, and I appreciate the detailed information and real-time availability of hotels.",
    },
    Testimonial {
        name: "Atend John",
        location: "California",
        rating: 5,
        content: "I've been using this booking system for several years now, and it's become my go-to platform for planning my trips. The interface is user-friendly, and I appreciate the detailed information and real-time availability of hotels.",
    },
    Testimonial {
        name: "Roger Williams",
        location: "London",
        rating: 5,
        content: "I've been using this booking system for several years now, and it's become my go-to platform for planning my trips. The interface is user-friendly, and I appreciate the detailed information and real-time availability of hotels.",
    },
];

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { class: "testimonials",
            h2 { {t!("home-testimonials-title")} }
            div { class: "testimonials__cards",
                for (index, item) in TESTIMONIALS.iter().enumerate() {
                    figure { key: "{index}", class: "testimonial-card",
                        div { class: "testimonial-card__stars", aria_label: "{item.rating} stars",
                            {"★".repeat(item.rating as usize)}
                        }
                        blockquote { class: "testimonial-card__quote", "{item.content}" }
                        figcaption { class: "testimonial-card__author",
                            span { class: "testimonial-card__name", "{item.name}" }
                            span { class: "testimonial-card__location", "{item.location}" }
                        }
                    }
                }
            }
        }
    }
}
