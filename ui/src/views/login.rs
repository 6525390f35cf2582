use dioxus::prelude::*;

/// Placeholder destination for both navbar auth links. Accounts do not
/// exist yet; the form renders but never submits.
#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page page-login",
            div { class: "login__card",
                h1 { "Sign in to OmTour" }
                p { class: "login__note",
                    "Traveler accounts are on the way. Until then, bookings and "
                    "support run through our contact channels."
                }

                form { class: "login__form",
                    label { r#for: "login-email", "Email" }
                    input { id: "login-email", r#type: "email", placeholder: "you@example.com" }

                    label { r#for: "login-password", "Password" }
                    input { id: "login-password", r#type: "password", placeholder: "••••••••" }

                    button { r#type: "button", class: "button button--primary", disabled: true,
                        "Sign in (coming soon)"
                    }
                }

                Link { class: "login__back", to: "/", "Back to home" }
            }
        }
    }
}
