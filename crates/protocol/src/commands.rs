use serde::{Deserialize, Serialize};

use crate::types::Target;

/// A single, stateless page mutation instruction.
///
/// Controllers emit a `Vec<PageCommand>` per page event. Hosts apply the
/// list sequentially against the real page — each command carries all the
/// data it needs, and every command is an idempotent write, so replaying a
/// list is harmless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageCommand {
    /// Add a style class to the target.
    AddClass { target: Target, class: String },

    /// Remove a style class from the target.
    RemoveClass { target: Target, class: String },

    /// Replace the target's text content.
    SetText { target: Target, text: String },

    /// Replace the target's inner markup. Markup is trusted authoring
    /// content, inserted verbatim.
    SetMarkup { target: Target, markup: String },

    /// Append a markup fragment after the target's existing content.
    AppendMarkup { target: Target, markup: String },

    /// Set the target's rendered width to a percentage (skill bar fill).
    SetWidth { target: Target, percent: f64 },

    /// Show or hide the target. `animation` names an entry animation to
    /// (re-)trigger when showing; it is ignored on hide.
    SetVisible {
        target: Target,
        visible: bool,
        animation: Option<String>,
    },

    /// Suspend background page scrolling (modal open).
    LockScroll,

    /// Restore background page scrolling (modal close).
    UnlockScroll,

    /// Smoothly scroll the target's section into view.
    ScrollTo { target: Target },
}

impl PageCommand {
    pub fn add_class(target: Target, class: impl Into<String>) -> Self {
        Self::AddClass {
            target,
            class: class.into(),
        }
    }

    pub fn remove_class(target: Target, class: impl Into<String>) -> Self {
        Self::RemoveClass {
            target,
            class: class.into(),
        }
    }

    pub fn set_text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText {
            target,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_list_roundtrips_as_json() {
        let commands = vec![
            PageCommand::add_class(Target::id("navbar"), "scrolled"),
            PageCommand::SetWidth {
                target: Target::id("skill-python"),
                percent: 90.0,
            },
            PageCommand::LockScroll,
        ];
        let json = serde_json::to_string(&commands).unwrap_or_default();
        let back: Vec<PageCommand> = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(back, commands);
    }
}
