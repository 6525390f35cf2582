//! Navigation link tables and the active-route rule for the site navbar.

/// One navbar destination. `label` is the Fluent message key for the
/// visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const HOME: NavLink = NavLink {
    path: "/",
    label: "nav-home",
};
pub const TOURS: NavLink = NavLink {
    path: "/tours",
    label: "nav-tours",
};
pub const ABOUT: NavLink = NavLink {
    path: "/about",
    label: "nav-about",
};
pub const FAQ: NavLink = NavLink {
    path: "/faq",
    label: "nav-faq",
};
pub const CONTACT: NavLink = NavLink {
    path: "/contact",
    label: "nav-contact",
};

/// Primary links in display order.
pub static NAV_LINKS: [NavLink; 5] = [HOME, TOURS, ABOUT, FAQ, CONTACT];

/// Both auth links point here until separate destinations exist.
pub const LOGIN_PATH: &str = "/login";

/// Whether the link at `candidate_path` should be highlighted while
/// `current_path` is shown. Root only matches itself; every other link
/// matches by literal string prefix. The comparison is not segment-aware,
/// so `/tours` also claims `/toursomething`.
pub fn is_active(current_path: &str, candidate_path: &str) -> bool {
    if candidate_path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(candidate_path)
}

/// Href for a category detail page.
pub fn category_href(slug: &str) -> String {
    format!("/categories/{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_link_matches_itself() {
        for link in NAV_LINKS.iter() {
            assert!(is_active(link.path, link.path), "{} should self-match", link.path);
        }
    }

    #[test]
    fn root_matches_exactly_and_never_as_prefix() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/tours", "/"));
        assert!(!is_active("/about", "/"));
    }

    #[test]
    fn nested_paths_match_their_section() {
        assert!(is_active("/tours/123", "/tours"));
        assert!(!is_active("/categories/safari", "/tours"));
        assert!(!is_active("/about", "/tours"));
    }

    #[test]
    fn prefix_match_is_not_segment_aware() {
        // Deliberately preserved quirk of the original matcher.
        assert!(is_active("/toursomething", "/tours"));
    }

    #[test]
    fn each_nav_route_activates_exactly_one_link() {
        for current in NAV_LINKS.iter() {
            let active = NAV_LINKS
                .iter()
                .filter(|link| is_active(current.path, link.path))
                .count();
            assert_eq!(active, 1, "{} should light exactly one link", current.path);
        }
    }

    #[test]
    fn off_nav_routes_activate_nothing() {
        for current in [LOGIN_PATH, "/categories", "/categories/safari", ""] {
            let active = NAV_LINKS
                .iter()
                .filter(|link| is_active(current, link.path))
                .count();
            assert_eq!(active, 0, "{current} should light no link");
        }
    }

    #[test]
    fn category_hrefs_join_slug_onto_base() {
        assert_eq!(category_href("safari"), "/categories/safari");
        assert_eq!(category_href("valley"), "/categories/valley");
    }
}
