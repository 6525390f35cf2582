use dioxus::prelude::*;

use ui::components::site_navbar::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteNavbar};
use ui::views::{About, Categories, CategoryDetail, Contact, Faq, Home, Login, TourDetail, Tours};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
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
));

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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            tours: nav_tours,
            about: nav_about,
            faq: nav_faq,
            contact: nav_contact,
            sign_in: nav_sign_in,
            login: nav_login,
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Mobile shell around every routed page.
#[component]
fn MobileShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        SiteNavbar { current_path: route.to_string() }
        Outlet::<Route> {}
        SiteFooter {}
    }
}
