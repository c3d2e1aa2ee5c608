use std::collections::BTreeSet;

use folio_protocol::contract::css;
use folio_protocol::{PageCommand, Target};

/// Fraction of an element that must be visible to count as intersecting.
pub const INTERSECT_THRESHOLD: f64 = 0.1;

/// Pixels shaved off the bottom of the viewport when observing, so cards
/// reveal slightly before fully entering view.
pub const BOTTOM_MARGIN: f64 = 50.0;

/// Card classes watched for scroll reveal.
pub const REVEAL_CLASSES: [&str; 5] = [
    "project-card",
    "skill-category",
    "timeline-item",
    "cert-card",
    "contact-card",
];

/// Scroll-triggered reveal animation.
///
/// Elements are tagged with a base class at startup; the first time one
/// intersects the viewport it gains the `animated` class permanently.
/// Leaving view never removes it, and repeat intersections are no-ops.
#[derive(Debug, Default)]
pub struct ScrollReveal {
    animated: BTreeSet<String>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every watched card class with the base animation class. The
    /// host then registers its visibility observer over the same classes
    /// using [`INTERSECT_THRESHOLD`] and [`BOTTOM_MARGIN`].
    pub fn prime(&self) -> Vec<PageCommand> {
        REVEAL_CLASSES
            .iter()
            .map(|class| PageCommand::add_class(Target::class(*class), css::ANIMATE_ON_SCROLL))
            .collect()
    }

    /// An observed element changed intersection state.
    pub fn on_intersection(&mut self, element_id: &str, intersecting: bool) -> Vec<PageCommand> {
        if !intersecting || self.animated.contains(element_id) {
            return Vec::new();
        }
        self.animated.insert(element_id.to_string());
        vec![PageCommand::add_class(
            Target::id(element_id),
            css::ANIMATED,
        )]
    }

    pub fn is_animated(&self, element_id: &str) -> bool {
        self.animated.contains(element_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_tags_every_watched_class() {
        let reveal = ScrollReveal::new();
        let commands = reveal.prime();
        assert_eq!(commands.len(), REVEAL_CLASSES.len());
        assert!(commands.contains(&PageCommand::add_class(
            Target::class("timeline-item"),
            css::ANIMATE_ON_SCROLL,
        )));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut reveal = ScrollReveal::new();

        let commands = reveal.on_intersection("card-1", true);
        assert_eq!(
            commands,
            vec![PageCommand::add_class(Target::id("card-1"), css::ANIMATED)]
        );

        // Leaving and re-entering view changes nothing.
        assert!(reveal.on_intersection("card-1", false).is_empty());
        assert!(reveal.on_intersection("card-1", true).is_empty());
        assert!(reveal.is_animated("card-1"));
    }

    #[test]
    fn non_intersecting_elements_stay_untouched() {
        let mut reveal = ScrollReveal::new();
        assert!(reveal.on_intersection("card-2", false).is_empty());
        assert!(!reveal.is_animated("card-2"));
    }
}
