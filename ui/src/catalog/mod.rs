//! Static site data: tour categories, the tour listing, and FAQ entries.
//!
//! Everything here is a compile-time constant table. Nothing mutates at
//! runtime; views borrow entries for the lifetime of the process.

mod categories;
pub use categories::{Category, CATEGORIES};

mod tours;
pub use tours::{tag_class, Tour, TOURS};

mod faqs;
pub use faqs::{FaqEntry, FAQS};

/// Look up a category by its routing slug.
pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

/// Look up a tour by id.
pub fn tour_by_id(id: u32) -> Option<&'static Tour> {
    TOURS.iter().find(|tour| tour.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn categories_keep_showcase_order() {
        let titles: Vec<&str> = CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Mountain", "Safari", "Desert", "Flower", "Beach", "Temples", "Yacht", "Valley"
            ]
        );
    }

    #[test]
    fn category_ids_are_unique() {
        let ids: HashSet<u32> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATEGORIES.len());
    }

    #[test]
    fn category_slugs_are_unique_and_lowercase() {
        let slugs: HashSet<&str> = CATEGORIES.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), CATEGORIES.len());
        for slug in slugs {
            assert_eq!(slug, slug.to_lowercase());
        }
    }

    #[test]
    fn slug_lookup_hits_and_misses() {
        let safari = category_by_slug("safari").expect("safari is in the table");
        assert_eq!(safari.title, "Safari");
        assert!(category_by_slug("atlantis").is_none());
    }

    #[test]
    fn tour_ids_are_unique() {
        let ids: HashSet<u32> = TOURS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOURS.len());
    }

    #[test]
    fn tour_lookup_hits_and_misses() {
        let first = tour_by_id(1).expect("tour 1 is in the table");
        assert_eq!(first.title, "California Sunset/Twilight Boat Cruise");
        assert!(tour_by_id(999).is_none());
    }

    #[test]
    fn grid_projection_is_idempotent() {
        // The card grid is a pure projection of the table; two passes must
        // agree on identity, order, and targets.
        let project = || {
            CATEGORIES
                .iter()
                .map(|c| (c.id, c.title, crate::core::nav::category_href(c.slug)))
                .collect::<Vec<_>>()
        };
        assert_eq!(project(), project());
        assert_eq!(project()[1].2, "/categories/safari");
    }

    #[test]
    fn every_tour_tag_has_a_chip_class() {
        for tour in TOURS.iter() {
            assert!(tag_class(tour.tag).starts_with("tour-card__tag--"));
        }
    }

    #[test]
    fn first_faq_entry_is_the_reservation_question() {
        assert_eq!(FAQS[0].id, "01");
        assert!(FAQS[0].question.contains("reservation"));
    }
}
