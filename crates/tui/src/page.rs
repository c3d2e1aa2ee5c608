//! In-memory page model: the terminal's stand-in for the DOM.
//!
//! Applies `PageCommand` lists the same way the browser glue would, so
//! the renderer draws exclusively from command-produced state.

use std::collections::{HashMap, HashSet};

use folio_protocol::{PageCommand, Target};

#[derive(Debug, Default)]
pub struct PageModel {
    /// Classes per element id.
    id_classes: HashMap<String, HashSet<String>>,
    /// Classes applied to a whole class group (`Target::Class`).
    group_classes: HashMap<String, HashSet<String>>,
    /// Classes applied per attribute match (`Target::Attr`).
    attr_classes: HashMap<(String, String), HashSet<String>>,
    texts: HashMap<String, String>,
    markup: HashMap<String, String>,
    widths: HashMap<String, f64>,
    hidden: HashSet<String>,
    pub scroll_locked: bool,
    /// Last smooth-scroll request, consumed by the app loop.
    pub scroll_request: Option<String>,
}

impl PageModel {
    pub fn apply_all(&mut self, commands: &[PageCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: &PageCommand) {
        match command {
            PageCommand::AddClass { target, class } => {
                self.classes_mut(target).insert(class.clone());
            }
            PageCommand::RemoveClass { target, class } => {
                self.classes_mut(target).remove(class);
            }
            PageCommand::SetText { target, text } => {
                if let Target::Id(id) = target {
                    self.texts.insert(id.clone(), text.clone());
                }
            }
            PageCommand::SetMarkup { target, markup } => {
                if let Target::Id(id) = target {
                    self.markup.insert(id.clone(), markup.clone());
                }
            }
            PageCommand::AppendMarkup { target, markup } => {
                if let Target::Id(id) = target {
                    self.markup.entry(id.clone()).or_default().push_str(markup);
                }
            }
            PageCommand::SetWidth { target, percent } => {
                if let Target::Id(id) = target {
                    self.widths.insert(id.clone(), *percent);
                }
            }
            PageCommand::SetVisible {
                target, visible, ..
            } => {
                if let Target::Id(id) = target {
                    if *visible {
                        self.hidden.remove(id);
                    } else {
                        self.hidden.insert(id.clone());
                    }
                }
            }
            PageCommand::LockScroll => self.scroll_locked = true,
            PageCommand::UnlockScroll => self.scroll_locked = false,
            PageCommand::ScrollTo { target } => {
                if let Target::Id(id) = target {
                    self.scroll_request = Some(id.clone());
                }
            }
        }
    }

    fn classes_mut(&mut self, target: &Target) -> &mut HashSet<String> {
        match target {
            Target::Id(id) => self.id_classes.entry(id.clone()).or_default(),
            Target::Class(class) => self.group_classes.entry(class.clone()).or_default(),
            Target::Attr { name, value } => self
                .attr_classes
                .entry((name.clone(), value.clone()))
                .or_default(),
        }
    }

    pub fn id_has_class(&self, id: &str, class: &str) -> bool {
        self.id_classes
            .get(id)
            .is_some_and(|set| set.contains(class))
    }

    pub fn attr_has_class(&self, name: &str, value: &str, class: &str) -> bool {
        self.attr_classes
            .get(&(name.to_string(), value.to_string()))
            .is_some_and(|set| set.contains(class))
    }

    pub fn text(&self, id: &str) -> &str {
        self.texts.get(id).map_or("", String::as_str)
    }

    pub fn markup(&self, id: &str) -> Option<&str> {
        self.markup.get(id).map(String::as_str)
    }

    pub fn width(&self, id: &str) -> Option<f64> {
        self.widths.get(id).copied()
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_add_remove_roundtrip() {
        let mut model = PageModel::default();
        model.apply(&PageCommand::add_class(Target::id("navbar"), "scrolled"));
        assert!(model.id_has_class("navbar", "scrolled"));
        model.apply(&PageCommand::remove_class(Target::id("navbar"), "scrolled"));
        assert!(!model.id_has_class("navbar", "scrolled"));
    }

    #[test]
    fn append_markup_extends_existing() {
        let mut model = PageModel::default();
        model.apply(&PageCommand::SetMarkup {
            target: Target::id("modal-content"),
            markup: "<p>a</p>".into(),
        });
        model.apply(&PageCommand::AppendMarkup {
            target: Target::id("modal-content"),
            markup: "<p>b</p>".into(),
        });
        assert_eq!(
            model.markup.get("modal-content").map(String::as_str),
            Some("<p>a</p><p>b</p>")
        );
    }

    #[test]
    fn scroll_lock_follows_commands() {
        let mut model = PageModel::default();
        model.apply(&PageCommand::LockScroll);
        assert!(model.scroll_locked);
        model.apply(&PageCommand::UnlockScroll);
        assert!(!model.scroll_locked);
    }
}
