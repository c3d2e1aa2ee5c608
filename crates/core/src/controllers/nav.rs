use folio_protocol::contract::{css, ids};
use folio_protocol::{PageCommand, Target};
use serde::{Deserialize, Serialize};

/// Scroll offset past which the navbar picks up its `scrolled` styling.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// How far above a section's top the "current section" predicate fires.
pub const SECTION_PROBE_OFFSET: f64 = 200.0;

/// One page section as reported by the host: its id and top offset in
/// document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Navigation bar state: scroll styling, active-link tracking, and the
/// mobile menu flag.
#[derive(Debug, Default)]
pub struct NavController {
    menu_open: bool,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recompute scroll-dependent styling. Idempotent — the same offset
    /// always yields the same commands, with no hysteresis.
    ///
    /// The current section is the *last* one in document order whose top,
    /// less the probe offset, is at or above the scroll position; later
    /// sections override earlier ones. Before any section qualifies, no
    /// link is active.
    pub fn on_scroll(&self, scroll_y: f64, sections: &[SectionOffset]) -> Vec<PageCommand> {
        let mut commands = Vec::with_capacity(4);

        if scroll_y > SCROLLED_THRESHOLD {
            commands.push(PageCommand::add_class(Target::id(ids::NAVBAR), css::SCROLLED));
        } else {
            commands.push(PageCommand::remove_class(
                Target::id(ids::NAVBAR),
                css::SCROLLED,
            ));
        }

        let mut current = "";
        for section in sections {
            if scroll_y >= section.top - SECTION_PROBE_OFFSET {
                current = &section.id;
            }
        }

        commands.push(PageCommand::remove_class(
            Target::class(css::NAV_LINK),
            css::ACTIVE,
        ));
        if !current.is_empty() {
            commands.push(PageCommand::add_class(
                Target::attr("href", format!("#{current}")),
                css::ACTIVE,
            ));
        }

        commands
    }

    /// Flip the mobile menu open/closed.
    pub fn toggle_menu(&mut self) -> Vec<PageCommand> {
        self.menu_open = !self.menu_open;
        self.menu_commands()
    }

    /// A navigation link was activated: the menu closes unconditionally.
    pub fn on_link_activated(&mut self) -> Vec<PageCommand> {
        self.menu_open = false;
        self.menu_commands()
    }

    fn menu_commands(&self) -> Vec<PageCommand> {
        let targets = [Target::id(ids::NAV_TOGGLE), Target::id(ids::NAV_MENU)];
        targets
            .into_iter()
            .map(|target| {
                if self.menu_open {
                    PageCommand::add_class(target, css::ACTIVE)
                } else {
                    PageCommand::remove_class(target, css::ACTIVE)
                }
            })
            .collect()
    }
}

/// Smooth-scroll an in-page anchor's section into view.
pub fn anchor_clicked(fragment: &str) -> Option<PageCommand> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        return None;
    }
    Some(PageCommand::ScrollTo {
        target: Target::id(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset {
                id: "home".into(),
                top: 0.0,
            },
            SectionOffset {
                id: "about".into(),
                top: 600.0,
            },
            SectionOffset {
                id: "projects".into(),
                top: 1400.0,
            },
        ]
    }

    fn has_scrolled(commands: &[PageCommand]) -> bool {
        commands.contains(&PageCommand::add_class(
            Target::id(ids::NAVBAR),
            css::SCROLLED,
        ))
    }

    fn active_link(commands: &[PageCommand]) -> Option<String> {
        commands.iter().find_map(|c| match c {
            PageCommand::AddClass {
                target: Target::Attr { name, value },
                class,
            } if name == "href" && class == css::ACTIVE => Some(value.clone()),
            _ => None,
        })
    }

    #[test]
    fn scrolled_flag_threshold() {
        let nav = NavController::new();
        assert!(!has_scrolled(&nav.on_scroll(0.0, &[])));
        assert!(!has_scrolled(&nav.on_scroll(50.0, &[])));
        assert!(has_scrolled(&nav.on_scroll(51.0, &[])));
    }

    #[test]
    fn last_qualifying_section_wins() {
        let nav = NavController::new();
        // 600 - 200 = 400 <= 450, so "about" qualifies; "projects" does not.
        assert_eq!(
            active_link(&nav.on_scroll(450.0, &sections())),
            Some("#about".into())
        );
        // All three qualify; the last wins.
        assert_eq!(
            active_link(&nav.on_scroll(5000.0, &sections())),
            Some("#projects".into())
        );
    }

    #[test]
    fn no_active_link_before_first_section_qualifies() {
        let nav = NavController::new();
        let sections = vec![SectionOffset {
            id: "about".into(),
            top: 600.0,
        }];
        let commands = nav.on_scroll(0.0, &sections);
        assert_eq!(active_link(&commands), None);
        // All links still get cleared.
        assert!(commands.contains(&PageCommand::remove_class(
            Target::class(css::NAV_LINK),
            css::ACTIVE,
        )));
    }

    #[test]
    fn menu_toggles_and_closes_on_link() {
        let mut nav = NavController::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());

        nav.toggle_menu();
        let commands = nav.on_link_activated();
        assert!(!nav.menu_open());
        assert!(commands.contains(&PageCommand::remove_class(
            Target::id(ids::NAV_MENU),
            css::ACTIVE,
        )));
    }

    #[test]
    fn anchor_scroll_command() {
        assert_eq!(
            anchor_clicked("#about"),
            Some(PageCommand::ScrollTo {
                target: Target::id("about"),
            })
        );
        assert_eq!(anchor_clicked("#"), None);
    }
}
