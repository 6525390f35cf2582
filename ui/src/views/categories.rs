use dioxus::prelude::*;

use crate::catalog::{Category, CATEGORIES};
use crate::core::nav::category_href;

/// Index of every tour category, with the long descriptions the showcase
/// grid leaves out.
#[component]
pub fn Categories() -> Element {
    rsx! {
        section { class: "page page-categories",
            header { class: "page__header",
                h1 { "All Categories" }
                p { "Browse every kind of trip we run, from summits to shorelines." }
            }

            ul { class: "category-index",
                for category in CATEGORIES.iter() {
                    {index_entry(category)}
                }
            }
        }
    }
}

fn index_entry(category: &'static Category) -> Element {
    rsx! {
        li { key: "{category.id}", class: "category-index__entry",
            Link { to: category_href(category.slug),
                div { class: "category-index__media",
                    img { src: "{category.image}", alt: "{category.title}", loading: "lazy" }
                }
                div { class: "category-index__body",
                    h2 { "{category.title}" }
                    p { class: "category-index__count", "{category.count}" }
                    p { class: "category-index__description", "{category.description}" }
                }
            }
        }
    }
}
