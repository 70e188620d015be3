//! Fixed registry of the page's anchored regions.
//!
//! The set is compile-time and immutable for the whole page view: the
//! tracker opens one observation channel per entry, and every navigation
//! command is validated against this list.

/// A named, anchorable region of the single page. The anchor target is the
/// DOM element whose `id` attribute equals [`Section::id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    /// Anchor href for plain links (`#home`, `#contact`, ...).
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// The page's regions, in display order.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "packages", label: "Packages" },
    Section { id: "amenities", label: "Amenities" },
    Section { id: "gallery", label: "Gallery" },
    Section { id: "reviews", label: "Reviews" },
    Section { id: "contact", label: "Contact" },
];

/// Look a section up by id.
pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// The mount-time default active section.
pub fn first() -> &'static Section {
    &SECTIONS[0]
}

#[cfg(test)]
mod tests {
    use super::{SECTIONS, find, first};

    #[test]
    fn ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn finds_registered_sections() {
        for section in SECTIONS {
            assert_eq!(find(section.id), Some(section));
        }
    }

    #[test]
    fn unknown_id_is_absent() {
        assert_eq!(find("pricing"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn default_is_the_first_region() {
        assert_eq!(first().id, "home");
    }

    #[test]
    fn href_prefixes_the_anchor() {
        assert_eq!(first().href(), "#home");
    }
}
