use serde::{Deserialize, Serialize};

/// Addresses one element or one group of elements on the page.
///
/// Mirrors the ways the page is actually queried: a unique id
/// (`getElementById`), every element carrying a class
/// (`querySelectorAll(".x")`), or every element whose attribute has an
/// exact value (`querySelectorAll("[data-filter=x]")`). Hosts that cannot
/// resolve a target treat the command as a no-op — a missing element never
/// fails a command list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A single element with this id.
    Id(String),
    /// Every element carrying this class.
    Class(String),
    /// Every element whose attribute `name` equals `value`. Used for
    /// navigation links (`href` = `#section`) and data-attribute widgets
    /// (`data-filter`, `data-target`).
    Attr { name: String, value: String },
}

impl Target {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attr {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let targets = vec![
            Target::id("navbar"),
            Target::class("nav-link"),
            Target::attr("data-filter", "ml"),
        ];
        let json = serde_json::to_string(&targets).unwrap_or_default();
        let back: Vec<Target> = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(back, targets);
    }
}
