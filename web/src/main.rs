use dioxus::prelude::*;

use ui::components::site_navbar::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteNavbar};
use ui::views::{About, Categories, CategoryDetail, Contact, Faq, Home, Login, TourDetail, Tours};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

fn nav_home(label: &str, active: bool) -> Element {
    rsx!(Link {
        class: nav_link_class(active),
        to: Route::Home {},
        "{label}"
    })
}
fn nav_tours(label: &str, active: bool) -> Element {
    rsx!(Link {
        class: nav_link_class(active),
        to: Route::Tours {},
        "{label}"
    })
}
fn nav_about(label: &str, active: bool) -> Element {
    rsx!(Link {
        class: nav_link_class(active),
        to: Route::About {},
        "{label}"
    })
}
fn nav_faq(label: &str, active: bool) -> Element {
    rsx!(Link {
        class: nav_link_class(active),
        to: Route::Faq {},
        "{label}"
    })
}
fn nav_contact(label: &str, active: bool) -> Element {
    rsx!(Link {
        class: nav_link_class(active),
        to: Route::Contact {},
        "{label}"
    })
}
fn nav_sign_in(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__auth-link",
        to: Route::Login {},
        "{label}"
    })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__auth-button",
        to: Route::Login {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register the navigation builder so the shared navbar can render
        // router-aware links without knowing this crate's Route enum.
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
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell around every routed page: the shared navbar (fed the current
/// path so it can highlight the active section), the page itself, and the
/// footer.
#[component]
fn WebShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        SiteNavbar { current_path: route.to_string() }
        Outlet::<Route> {}
        SiteFooter {}
    }
}
