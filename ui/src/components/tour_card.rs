use dioxus::prelude::*;

use crate::catalog::{tag_class, Tour};
use crate::core::{format, storage, timing};

/// Listing card for one tour. Carries the favorites toggle; the favorite
/// state is persisted through `core::storage` and a transient toast
/// confirms additions, dismissing itself after three seconds.
#[component]
pub fn TourCard(tour: Tour) -> Element {
    let mut favorites = use_signal(|| {
        storage::load_favorites().unwrap_or_else(|err| {
            eprintln!("[storage] couldn't load favorites: {err}");
            storage::Favorites::default()
        })
    });
    let mut toast = use_signal(|| Option::<String>::None);

    let is_favorite = favorites().contains(tour.id);
    let favorite_class = if is_favorite {
        "tour-card__favorite tour-card__favorite--active"
    } else {
        "tour-card__favorite"
    };
    let favorite_label = if is_favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    let on_toggle = move |_| {
        let mut current = favorites();
        let added = current.toggle(tour.id);
        if let Err(err) = storage::save_favorites(&current) {
            eprintln!("[storage] couldn't save favorites: {err}");
        }
        favorites.set(current);

        if added {
            toast.set(Some(format!("{} added to favorites!", tour.title)));
            spawn(async move {
                timing::sleep_ms(3000).await;
                toast.set(None);
            });
        }
    };

    let detail_href = format!("/tours/{}", tour.id);
    let tag_chip = format!("tour-card__tag {}", tag_class(tour.tag));
    let rating = format::format_rating(tour.rating);
    let reviews = format::format_reviews(tour.reviews);
    let duration = format::format_duration(tour.days, tour.nights);
    let price = format::format_price(tour.price);
    let price_short = format::format_price_short(tour.price);

    rsx! {
        article { class: "tour-card",
            div { class: "tour-card__media",
                img { src: "{tour.image}", alt: "{tour.title}", loading: "lazy" }
                span { class: "{tag_chip}", "{tour.tag}" }
                button {
                    r#type: "button",
                    class: "{favorite_class}",
                    aria_label: "{favorite_label}",
                    onclick: on_toggle,
                    "♥"
                }
                div { class: "tour-card__overlay",
                    span { class: "tour-card__rating", "★ {rating} {reviews}" }
                    span { class: "tour-card__price-short", "{price_short}" }
                }
            }

            div { class: "tour-card__body",
                Link { class: "tour-card__title", to: detail_href.clone(),
                    "{tour.title}"
                }
                p { class: "tour-card__location", "{tour.location}" }
                p { class: "tour-card__meta", "{duration} · {tour.guests} guests" }

                div { class: "tour-card__footer",
                    div { class: "tour-card__pricing",
                        span { class: "tour-card__from", "From" }
                        span { class: "tour-card__price", "{price}" }
                        span { class: "tour-card__per", "/person" }
                    }
                    Link { class: "button button--primary", to: detail_href,
                        "View Details"
                    }
                }
            }

            if let Some(message) = toast() {
                div { class: "tour-card__toast", role: "status", "{message}" }
            }
        }
    }
}
