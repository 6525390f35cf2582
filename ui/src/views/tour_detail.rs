use dioxus::prelude::*;

use crate::catalog::{self, tag_class, Tour};
use crate::core::format;

/// Detail page for one tour, looked up by id from the static table. An
/// unknown id renders a not-found state rather than an error.
#[component]
pub fn TourDetail(id: u32) -> Element {
    match catalog::tour_by_id(id) {
        Some(tour) => detail(tour),
        None => not_found(id),
    }
}

fn detail(tour: &'static Tour) -> Element {
    let tag_chip = format!("tour-card__tag {}", tag_class(tour.tag));
    let rating = format::format_rating(tour.rating);
    let reviews = format::format_reviews(tour.reviews);
    let duration = format::format_duration(tour.days, tour.nights);
    let price = format::format_price(tour.price);

    rsx! {
        section { class: "page page-tour-detail",
            div { class: "tour-detail__media",
                img { src: "{tour.image}", alt: "{tour.title}" }
                span { class: "{tag_chip}", "{tour.tag}" }
            }

            header { class: "tour-detail__header",
                h1 { "{tour.title}" }
                p { class: "tour-detail__location", "{tour.location}" }
                p { class: "tour-detail__rating", "★ {rating} {reviews} reviews" }
            }

            ul { class: "tour-detail__facts",
                li { span { "Duration" } span { "{duration}" } }
                li { span { "Group size" } span { "{tour.guests} guests" } }
                li { span { "From" } span { "{price} /person" } }
            }

            div { class: "tour-detail__actions",
                // Booking is handled offline; the site only points at the
                // contact channel.
                Link { class: "button button--primary", to: "/contact", "Contact us to book" }
                Link { class: "button button--ghost", to: "/tours", "Back to tours" }
            }
        }
    }
}

fn not_found(id: u32) -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { "Tour not found" }
            p { "No tour with id {id} exists. Please check our other trips." }
            Link { class: "button button--primary", to: "/tours", "Browse all tours" }
        }
    }
}
