//! The tour listing table and tag presentation helpers.

/// A bookable tour as shown on listing cards and the detail page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tour {
    pub id: u32,
    pub title: &'static str,
    pub tag: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub days: u8,
    pub nights: u8,
    pub guests: &'static str,
    pub price: f64,
    pub image: &'static str,
    pub location: &'static str,
}

pub static TOURS: [Tour; 6] = [
    Tour {
        id: 1,
        title: "California Sunset/Twilight Boat Cruise",
        tag: "Top Rated",
        rating: 4.96,
        reviews: 672,
        days: 2,
        nights: 3,
        guests: "4-6",
        price: 48.25,
        image: "/images/boating.jpg",
        location: "San Francisco, California",
    },
    Tour {
        id: 2,
        title: "NYC: Food Tastings and Culture Tour",
        tag: "Best Sale",
        rating: 4.96,
        reviews: 672,
        days: 3,
        nights: 3,
        guests: "4-6",
        price: 17.32,
        image: "/images/santorini.jpg",
        location: "New York City, New York",
    },
    Tour {
        id: 3,
        title: "Grand Canyon Horseshoe Bend 2 days",
        tag: "25% Off",
        rating: 4.96,
        reviews: 672,
        days: 7,
        nights: 6,
        guests: "4-6",
        price: 15.63,
        image: "/images/maldives.jpg",
        location: "Grand Canyon, Arizona",
    },
    Tour {
        id: 4,
        title: "California Sunset/Twilight Boat Cruise",
        tag: "Top Rated",
        rating: 4.96,
        reviews: 672,
        days: 2,
        nights: 3,
        guests: "4-6",
        price: 48.25,
        image: "/images/boating.jpg",
        location: "San Francisco, California",
    },
    Tour {
        id: 5,
        title: "NYC: Food Tastings and Culture Tour",
        tag: "Best Sale",
        rating: 4.96,
        reviews: 672,
        days: 3,
        nights: 3,
        guests: "4-6",
        price: 17.32,
        image: "/images/santorini.jpg",
        location: "New York City, New York",
    },
    Tour {
        id: 6,
        title: "Grand Canyon Horseshoe Bend 2 days",
        tag: "25% Off",
        rating: 4.96,
        reviews: 672,
        days: 7,
        nights: 6,
        guests: "4-6",
        price: 15.63,
        image: "/images/maldives.jpg",
        location: "Grand Canyon, Arizona",
    },
];

/// Chip modifier class for a tour's tag ribbon.
pub fn tag_class(tag: &str) -> &'static str {
    match tag {
        "Top Rated" => "tour-card__tag--rated",
        "Best Sale" => "tour-card__tag--sale",
        _ => "tour-card__tag--offer",
    }
}
