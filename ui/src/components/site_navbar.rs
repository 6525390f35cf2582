use crate::core::nav::{self, NavLink};
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet plus the shared site theme. Both ride along with the
// navbar so every routed page pulls them in.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each primary-link closure receives the localized label and whether its
/// destination is the active route; it returns a link that already contains
/// that label. The two auth closures receive only the label — their target
/// is never highlighted.
///
/// Wiring steps for a platform crate (web/desktop/mobile):
/// 1. Define functions matching the closure signatures, each constructing a
///    `Link { class: ..., to: Route::..., "{label}" }`.
/// 2. Call `ui::components::site_navbar::register_nav(builder)` before
///    rendering the root (e.g. at the top of `App()`).
/// 3. Render `SiteNavbar { current_path }` from the router layout, passing
///    the path of the route being shown.
///
/// Active state is recomputed per link on every render from `current_path`
/// via [`nav::is_active`]; nothing stores it.
pub struct NavBuilder {
    pub home: fn(label: &str, active: bool) -> Element,
    pub tours: fn(label: &str, active: bool) -> Element,
    pub about: fn(label: &str, active: bool) -> Element,
    pub faq: fn(label: &str, active: bool) -> Element,
    pub contact: fn(label: &str, active: bool) -> Element,
    pub sign_in: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn SiteNavbar(current_path: String) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain the global language code signal if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        println!("[nav] SiteNavbar render path={current_path}");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Propagate to the global language code signal if the platform provided one
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let builder = NAV_BUILDER.get();

    // Build the localized primary links with their active flags. Each flag is
    // a pure function of the current path and the link's own path.
    let primary_links: Option<VNode> = builder.map(|b| {
        let active = |link: NavLink| nav::is_active(&current_path, link.path);
        let home = (b.home)(&t!("nav-home"), active(nav::HOME));
        let tours = (b.tours)(&t!("nav-tours"), active(nav::TOURS));
        let about = (b.about)(&t!("nav-about"), active(nav::ABOUT));
        let faq = (b.faq)(&t!("nav-faq"), active(nav::FAQ));
        let contact = (b.contact)(&t!("nav-contact"), active(nav::CONTACT));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {tours}
                {about}
                {faq}
                {contact}
            }
        }
        .expect("SiteNavbar: rsx render failed")
    });

    // Both auth links target the login placeholder; see nav::LOGIN_PATH.
    let auth_links: Option<VNode> = builder.map(|b| {
        let sign_in = (b.sign_in)(&t!("nav-signin"));
        let login = (b.login)(&t!("nav-login"));

        rsx! {
            div { class: "navbar__auth",
                {sign_in}
                {login}
            }
        }
        .expect("SiteNavbar: rsx render failed")
    });

    let tagline = t!("tagline");

    rsx! {
        // Shared stylesheets (and inline navbar rules in release native)
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures SiteNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "OmTour" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                // Primary navigation (platform-registered links)
                if let Some(links) = primary_links {
                    {links}
                } else {
                    nav { class: "navbar__links" }
                }

                if let Some(auth) = auth_links {
                    {auth}
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
