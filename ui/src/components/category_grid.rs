use dioxus::prelude::*;

use crate::catalog::{Category, CATEGORIES};
use crate::core::nav::category_href;
use crate::t;

/// Card grid over the static category table. Order and keys follow the
/// table; each card links to the category detail page. Re-rendering with
/// the same table is idempotent — the grid holds no state of its own.
#[component]
pub fn CategoryGrid() -> Element {
    rsx! {
        section { class: "category-grid",
            div { class: "category-grid__header",
                div {
                    h2 { {t!("home-categories-title")} }
                    p { class: "category-grid__subtitle", {t!("home-categories-subtitle")} }
                }
                Link { class: "button button--ghost category-grid__more", to: "/categories",
                    {t!("home-categories-more")}
                }
            }

            div { class: "category-grid__cards",
                for category in CATEGORIES.iter() {
                    {category_card(category)}
                }
            }
        }
    }
}

fn category_card(category: &'static Category) -> Element {
    let href = category_href(category.slug);

    rsx! {
        article { key: "{category.id}", class: "category-card",
            Link { to: href,
                div { class: "category-card__media",
                    img {
                        src: "{category.image}",
                        alt: "{category.title}",
                        loading: "lazy",
                    }
                }
                div { class: "category-card__row",
                    h3 { class: "category-card__title", "{category.title}" }
                    span { class: "category-card__chevron", aria_hidden: "true", "›" }
                }
                p { class: "category-card__count", "{category.count}" }
            }
        }
    }
}
