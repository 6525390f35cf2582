use dioxus::prelude::*;

/// Site footer: company links, support links, and social placeholders. The
/// social anchors are inert, like the marketing page they mirror.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__mark", "OmTour" }
                    p { class: "footer__blurb",
                        "Premium travel experiences, hotels, and tours across the globe."
                    }
                }

                nav { class: "footer__column", aria_label: "Company",
                    h3 { "Company" }
                    ul {
                        li { Link { to: "/about", "About Us" } }
                        li { Link { to: "/contact", "Contact Us" } }
                        li { Link { to: "/faq", "Support Center" } }
                    }
                }

                nav { class: "footer__column", aria_label: "Services",
                    h3 { "Services" }
                    ul {
                        li { Link { to: "/tours", "Tour Guide" } }
                        li { Link { to: "/categories", "Tour Categories" } }
                        li { Link { to: "/login", "My Account" } }
                    }
                }

                div { class: "footer__column",
                    h3 { "Follow Us" }
                    div { class: "footer__social",
                        a { href: "#", class: "footer__social-link", aria_label: "Facebook", "f" }
                        a { href: "#", class: "footer__social-link", aria_label: "Instagram", "i" }
                        a { href: "#", class: "footer__social-link", aria_label: "X", "x" }
                    }
                }
            }

            div { class: "footer__bottom",
                span { "© 2025 OmTour. All rights reserved." }
            }
        }
    }
}
