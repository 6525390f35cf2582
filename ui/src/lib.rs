//! Shared UI crate for OmTour. Cross-platform views, components, and the
//! static site catalog live here.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized site navbar (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::register_nav;
    pub use site_navbar::NavBuilder;
    pub use site_navbar::SiteNavbar;

    mod category_grid;
    pub use category_grid::CategoryGrid;

    mod tour_card;
    pub use tour_card::TourCard;

    mod faq;
    pub use faq::FaqAccordion;

    mod testimonials;
    pub use testimonials::Testimonials;

    mod footer;
    pub use footer::SiteFooter;
}

mod hero;
pub use hero::Hero;
