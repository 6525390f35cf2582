//! The tour category showcase table.

/// One entry in the category showcase. `slug` addresses the detail page at
/// `/categories/{slug}`; `image` is an opaque path resolved by the asset
/// pipeline of whichever bundle serves the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub count: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

pub static CATEGORIES: [Category; 8] = [
    Category {
        id: 1,
        title: "Mountain",
        image: "/images/ocean-wave.jpg",
        count: "356 Tours, 264 Activities",
        slug: "mountain",
        description: "Explore majestic mountain ranges, challenging peaks, and breathtaking views with our mountain tours and activities.",
    },
    Category {
        id: 2,
        title: "Safari",
        image: "/images/maldives.jpg",
        count: "356 Tours, 264 Activities",
        slug: "safari",
        description: "Experience wildlife in its natural habitat with our safari tours that take you through some of the world's most stunning national parks.",
    },
    Category {
        id: 3,
        title: "Desert",
        image: "/images/santorini.jpg",
        count: "356 Tours, 264 Activities",
        slug: "desert",
        description: "Discover the stark beauty and unique landscapes of the world's most fascinating deserts with our specialized desert tours.",
    },
    Category {
        id: 4,
        title: "Flower",
        image: "/images/ocean-wave.jpg",
        count: "356 Tours, 264 Activities",
        slug: "flower",
        description: "Witness the spectacular beauty of flower blooms and botanical gardens around the world with our seasonal flower tours.",
    },
    Category {
        id: 5,
        title: "Beach",
        image: "/images/maldives.jpg",
        count: "356 Tours, 264 Activities",
        slug: "beach",
        description: "Relax and unwind on the world's most beautiful beaches with our beach destination tours and activities.",
    },
    Category {
        id: 6,
        title: "Temples",
        image: "/images/santorini.jpg",
        count: "356 Tours, 264 Activities",
        slug: "temples",
        description: "Explore ancient temples and spiritual sites around the world, experiencing the rich cultural heritage and history.",
    },
    Category {
        id: 7,
        title: "Yacht",
        image: "/images/boating.jpg",
        count: "356 Tours, 264 Activities",
        slug: "yacht",
        description: "Set sail on luxurious yacht tours, exploring coastlines and enjoying the freedom of the open water.",
    },
    Category {
        id: 8,
        title: "Valley",
        image: "/images/ocean-wave.jpg",
        count: "356 Tours, 264 Activities",
        slug: "valley",
        description: "Experience the serene beauty of valleys with lush landscapes, rivers, and unique geological formations.",
    },
];
