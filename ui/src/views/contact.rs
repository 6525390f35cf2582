use dioxus::prelude::*;

/// Contact details plus a visual-only message form. The form has no
/// submission path; inquiries go through the listed channels.
#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            header { class: "page__header",
                h1 { "Contact Us" }
                p { "Questions about a trip? We answer within one business day." }
            }

            div { class: "contact__channels",
                div { class: "contact__channel",
                    h3 { "Email" }
                    p { "hello@omtour.example" }
                }
                div { class: "contact__channel",
                    h3 { "Phone" }
                    p { "+1 (555) 010-8264" }
                }
                div { class: "contact__channel",
                    h3 { "Office" }
                    p { "4th Floor, 128 Harbor Lane, San Francisco, CA" }
                }
            }

            form { class: "contact__form",
                label { r#for: "contact-name", "Name" }
                input { id: "contact-name", r#type: "text", placeholder: "Your name" }

                label { r#for: "contact-email", "Email" }
                input { id: "contact-email", r#type: "email", placeholder: "you@example.com" }

                label { r#for: "contact-message", "Message" }
                textarea { id: "contact-message", rows: "5", placeholder: "How can we help?" }

                button { r#type: "button", class: "button button--primary", disabled: true,
                    "Send (coming soon)"
                }
            }
        }
    }
}
