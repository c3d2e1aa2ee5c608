//! Fixed design tokens for chart styling.
//!
//! These are the page's design constants, not user configuration: every
//! chart the modal draws uses the same legend, tick, and gridline colors.

/// Legend label text.
pub const LEGEND_TEXT: &str = "#a0a0b0";

/// Axis tick labels.
pub const AXIS_TICK: &str = "#6b6b7b";

/// Axis gridlines.
pub const GRID_LINE: &str = "rgba(255,255,255,0.05)";

/// Derive the translucent area fill for a line series from its stroke
/// color by appending a hex alpha. Non-hex inputs pass through with the
/// suffix as well — the backend treats unparseable colors as transparent,
/// which matches the fallback the page shipped with.
pub fn translucent_fill(color: &str) -> String {
    format!("{color}20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_appends_alpha() {
        assert_eq!(translucent_fill("#ef4444"), "#ef444420");
    }
}
