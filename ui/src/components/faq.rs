use std::collections::HashSet;

use dioxus::prelude::*;

use crate::catalog::{FaqEntry, FAQS};

/// Accordion over the static FAQ table. The first question starts expanded,
/// matching the marketing page default. Open state lives only in this
/// component; the entries themselves never change.
#[component]
pub fn FaqAccordion() -> Element {
    let mut open = use_signal(|| HashSet::from([FAQS[0].id]));

    rsx! {
        section { class: "faq",
            ul { class: "faq__items",
                for entry in FAQS.iter() {
                    {faq_item(entry, open(), move |id| {
                        let mut set = open();
                        if !set.insert(id) {
                            set.remove(id);
                        }
                        open.set(set);
                    })}
                }
            }
        }
    }
}

fn faq_item(
    entry: &'static FaqEntry,
    open: HashSet<&'static str>,
    mut on_toggle: impl FnMut(&'static str) + 'static,
) -> Element {
    let is_open = open.contains(entry.id);
    let item_class = if is_open {
        "faq__item faq__item--open"
    } else {
        "faq__item"
    };

    rsx! {
        li { key: "{entry.id}", class: "{item_class}",
            button {
                r#type: "button",
                class: "faq__question",
                aria_expanded: "{is_open}",
                onclick: move |_| on_toggle(entry.id),
                span { class: "faq__number", "{entry.id}" }
                span { class: "faq__question-text", "{entry.question}" }
                span { class: "faq__indicator", aria_hidden: "true",
                    if is_open { "×" } else { "+" }
                }
            }
            if is_open {
                p { class: "faq__answer", "{entry.answer}" }
            }
        }
    }
}
