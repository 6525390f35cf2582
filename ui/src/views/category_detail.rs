use dioxus::prelude::*;

use crate::catalog::{self, Category};

/// Detail page for one category, looked up by slug from the static table.
/// Unknown slugs fall through to a not-found state in the same layout.
#[component]
pub fn CategoryDetail(slug: String) -> Element {
    match catalog::category_by_slug(&slug) {
        Some(category) => detail(category),
        None => not_found(slug),
    }
}

fn detail(category: &'static Category) -> Element {
    rsx! {
        section { class: "page page-category-detail",
            div { class: "category-detail__media",
                img { src: "{category.image}", alt: "{category.title}" }
            }
            header { class: "page__header",
                h1 { "{category.title}" }
                p { class: "category-detail__count", "{category.count}" }
            }
            p { class: "category-detail__description", "{category.description}" }

            div { class: "category-detail__actions",
                Link { class: "button button--primary", to: "/tours", "See matching tours" }
                Link { class: "button button--ghost", to: "/categories", "All categories" }
            }
        }
    }
}

fn not_found(slug: String) -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { "Category not found" }
            p { "No category named \"{slug}\" exists. Please check our other categories." }
            Link { class: "button button--primary", to: "/categories", "Browse categories" }
        }
    }
}
