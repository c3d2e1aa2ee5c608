use folio_protocol::contract::{css, CARD_ENTRY_ANIMATION};
use folio_protocol::{PageCommand, Target};
use serde::{Deserialize, Serialize};

/// The filter key that matches every card.
pub const ALL: &str = "all";

/// One project card as reported by the host: its element id and its
/// category list (a card may belong to several categories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardInfo {
    pub id: String,
    pub categories: String,
}

/// Category-based project show/hide.
///
/// Exactly one filter button is active at any time — the most recently
/// clicked one. Cards shown by a filter change re-trigger their entry
/// animation.
#[derive(Debug)]
pub struct ProjectFilter {
    active: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self { active: ALL.into() }
    }
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether a card with this category list passes the active filter.
    /// Matching is containment, so `"ml data"` passes both `ml` and
    /// `data` filters.
    pub fn matches(&self, categories: &str) -> bool {
        self.active == ALL || categories.contains(&self.active)
    }

    /// A filter button was clicked: mark it active (clearing its
    /// siblings) and show or hide every card accordingly.
    pub fn apply(&mut self, filter: &str, cards: &[CardInfo]) -> Vec<PageCommand> {
        self.active = filter.to_string();

        let mut commands = Vec::with_capacity(cards.len() + 2);
        commands.push(PageCommand::remove_class(
            Target::class(css::FILTER_BUTTON),
            css::ACTIVE,
        ));
        commands.push(PageCommand::add_class(
            Target::attr("data-filter", filter),
            css::ACTIVE,
        ));

        for card in cards {
            let visible = self.matches(&card.categories);
            commands.push(PageCommand::SetVisible {
                target: Target::id(card.id.clone()),
                visible,
                animation: visible.then(|| CARD_ENTRY_ANIMATION.to_string()),
            });
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<CardInfo> {
        vec![
            CardInfo {
                id: "card-sentiment".into(),
                categories: "ml nlp".into(),
            },
            CardInfo {
                id: "card-pale".into(),
                categories: "iot".into(),
            },
            CardInfo {
                id: "card-ecommerce".into(),
                categories: "ml nlp data".into(),
            },
        ]
    }

    fn visible_ids(commands: &[PageCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                PageCommand::SetVisible {
                    target: Target::Id(id),
                    visible: true,
                    ..
                } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn all_shows_everything() {
        let mut filter = ProjectFilter::new();
        let commands = filter.apply(ALL, &cards());
        assert_eq!(visible_ids(&commands).len(), 3);
    }

    #[test]
    fn category_containment_match() {
        let mut filter = ProjectFilter::new();
        let commands = filter.apply("ml", &cards());
        assert_eq!(visible_ids(&commands), ["card-sentiment", "card-ecommerce"]);

        let commands = filter.apply("iot", &cards());
        assert_eq!(visible_ids(&commands), ["card-pale"]);
    }

    #[test]
    fn most_recent_click_is_the_active_button() {
        let mut filter = ProjectFilter::new();
        for key in ["ml", "iot", ALL, "nlp"] {
            let commands = filter.apply(key, &cards());
            assert_eq!(filter.active(), key);
            // Exactly one button activation per click, after the sibling clear.
            let activations: Vec<_> = commands
                .iter()
                .filter(|c| {
                    matches!(
                        c,
                        PageCommand::AddClass {
                            target: Target::Attr { name, .. },
                            ..
                        } if name == "data-filter"
                    )
                })
                .collect();
            assert_eq!(activations.len(), 1);
        }
    }

    #[test]
    fn shown_cards_retrigger_entry_animation() {
        let mut filter = ProjectFilter::new();
        let commands = filter.apply("iot", &cards());
        let pale = commands.iter().find(|c| {
            matches!(c, PageCommand::SetVisible { target: Target::Id(id), .. } if id == "card-pale")
        });
        assert!(matches!(
            pale,
            Some(PageCommand::SetVisible {
                visible: true,
                animation: Some(_),
                ..
            })
        ));
        // Hidden cards carry no animation.
        let sentiment = commands.iter().find(|c| {
            matches!(c, PageCommand::SetVisible { target: Target::Id(id), .. } if id == "card-sentiment")
        });
        assert!(matches!(
            sentiment,
            Some(PageCommand::SetVisible {
                visible: false,
                animation: None,
                ..
            })
        ));
    }
}
