//! The page structure contract: element ids and class names the
//! controllers address.
//!
//! These are the only page coordinates the core knows about. A page that
//! lacks one of these elements simply never produces the matching events,
//! and hosts drop commands aimed at absent targets — each controller
//! degrades independently.

/// Well-known element ids.
pub mod ids {
    /// The fixed navigation bar.
    pub const NAVBAR: &str = "navbar";
    /// The mobile menu toggle button.
    pub const NAV_TOGGLE: &str = "nav-toggle";
    /// The collapsible navigation menu.
    pub const NAV_MENU: &str = "nav-menu";
    /// The hero line the typing animator writes into.
    pub const TYPING_TEXT: &str = "typing-text";
    /// The modal backdrop.
    pub const MODAL_OVERLAY: &str = "modal-overlay";
    /// The modal content container.
    pub const MODAL_CONTENT: &str = "modal-content";
    /// The modal close control.
    pub const MODAL_CLOSE: &str = "modal-close";
    /// The CV download trigger.
    pub const DOWNLOAD_BUTTON: &str = "download-cv";
    /// The download counter display.
    pub const DOWNLOAD_COUNT: &str = "download-count";

    /// Live sensor slots inside the IoT dashboard section.
    pub const TEMP_VALUE: &str = "temp-value";
    pub const TEMP_STATUS: &str = "temp-status";
    pub const AMMONIA_VALUE: &str = "ammonia-value";
    pub const AMMONIA_STATUS: &str = "ammonia-status";
    pub const PH_VALUE: &str = "ph-value";
    pub const PH_STATUS: &str = "ph-status";
}

/// Well-known class names.
pub mod css {
    /// Navigation links; also carries `active` for the current section.
    pub const NAV_LINK: &str = "nav-link";
    /// Navbar styling past the scroll threshold.
    pub const SCROLLED: &str = "scrolled";
    /// Generic "on" state: open menu, active filter, visible modal…
    pub const ACTIVE: &str = "active";
    /// Base class tagged onto revealable cards at startup.
    pub const ANIMATE_ON_SCROLL: &str = "animate-on-scroll";
    /// Permanent class added once a card first becomes visible.
    pub const ANIMATED: &str = "animated";
    /// Skill bar fill elements.
    pub const SKILL_PROGRESS: &str = "skill-progress";
    /// Project filter buttons.
    pub const FILTER_BUTTON: &str = "filter-btn";
    /// Project cards.
    pub const PROJECT_CARD: &str = "project-card";
    /// Before/after toggle controls inside modal sections.
    pub const TOGGLE_BUTTON: &str = "toggle-btn";
    /// Before/after toggle panels inside modal sections.
    pub const TOGGLE_CONTENT: &str = "toggle-content";
    /// Sensor badge states.
    pub const STATUS_NORMAL: &str = "status-normal";
    pub const STATUS_WARNING: &str = "status-warning";
}

/// Entry animation re-triggered on cards shown by the project filter.
pub const CARD_ENTRY_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// Persistent key holding the download counter.
pub const DOWNLOAD_COUNT_KEY: &str = "cv-downloads";
