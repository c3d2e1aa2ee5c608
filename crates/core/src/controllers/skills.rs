//! Skill-bar progress reveal.

use folio_protocol::{PageCommand, Target};

/// Half the bar must be visible before the fill animates in.
pub const INTERSECT_THRESHOLD: f64 = 0.5;

/// A skill bar became (or stopped being) visible. The bar's target
/// percentage rides on the element as data; on intersection its rendered
/// width is set to that percentage. The observer stays registered, so
/// repeat triggers re-issue the same width — an idempotent no-op.
pub fn on_intersection(
    element_id: &str,
    progress_percent: f64,
    intersecting: bool,
) -> Option<PageCommand> {
    if !intersecting {
        return None;
    }
    Some(PageCommand::SetWidth {
        target: Target::id(element_id),
        percent: progress_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_width_on_intersection() {
        assert_eq!(
            on_intersection("skill-python", 90.0, true),
            Some(PageCommand::SetWidth {
                target: Target::id("skill-python"),
                percent: 90.0,
            })
        );
    }

    #[test]
    fn ignores_non_intersecting_bars() {
        assert_eq!(on_intersection("skill-python", 90.0, false), None);
    }

    #[test]
    fn repeat_triggers_are_identical() {
        let first = on_intersection("skill-sql", 75.0, true);
        let second = on_intersection("skill-sql", 75.0, true);
        assert_eq!(first, second);
    }
}
