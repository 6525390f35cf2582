#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::site_navbar::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteNavbar};
use ui::views::{About, Categories, CategoryDetail, Contact, Faq, Home, Login, TourDetail, Tours};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/tours")]
    Tours {},
    #[route("/tours/:id")]
    TourDetail { id: u32 },
    #[route("/categories")]
    Categories {},
    #[route("/categories/:slug")]
    CategoryDetail { slug: String },
    #[route("/about")]
    About {},
    #[route("/faq")]
    Faq {},
    #[route("/contact")]
    Contact {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("OmTour – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

fn nav_home(label: &str, active: bool) -> Element {
    rsx!(Link { class: nav_link_class(active), to: Route::Home {}, "{label}" })
}
fn nav_tours(label: &str, active: bool) -> Element {
    rsx!(Link { class: nav_link_class(active), to: Route::Tours {}, "{label}" })
}
fn nav_about(label: &str, active: bool) -> Element {
    rsx!(Link { class: nav_link_class(active), to: Route::About {}, "{label}" })
}
fn nav_faq(label: &str, active: bool) -> Element {
    rsx!(Link { class: nav_link_class(active), to: Route::Faq {}, "{label}" })
}
fn nav_contact(label: &str, active: bool) -> Element {
    rsx!(Link { class: nav_link_class(active), to: Route::Contact {}, "{label}" })
}
fn nav_sign_in(label: &str) -> Element {
    rsx!(Link { class: "navbar__auth-link", to: Route::Login {}, "{label}" })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link { class: "navbar__auth-button", to: Route::Login {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide a global reactive language code signal (mirrors the web
    // approach). SiteNavbar updates it via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register the navigation builder (desktop routes)
    register_nav(NavBuilder {
        home: nav_home,
        tours: nav_tours,
        about: nav_about,
        faq: nav_faq,
        contact: nav_contact,
        sign_in: nav_sign_in,
        login: nav_login,
    });

    rsx! {
        // Always inline the embedded theme (no external file dependency for
        // desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div forces a full remount on language change; the
        // hidden marker keeps an explicit reactive dependency on lang_code.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

/// Desktop shell around every routed page: shared navbar fed the current
/// path, the page, then the footer.
#[component]
fn DesktopShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        SiteNavbar { current_path: route.to_string() }
        Outlet::<Route> {}
        SiteFooter {}
    }
}
