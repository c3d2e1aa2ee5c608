use std::time::Duration;

use folio_protocol::contract::{ids, DOWNLOAD_COUNT_KEY};
use folio_protocol::{PageCommand, Target};

use crate::storage::CounterStore;

/// How long the "Downloaded!" acknowledgment stays on the trigger.
pub const ACK_WINDOW: Duration = Duration::from_millis(2000);

/// Markup shown on the trigger during the acknowledgment window.
pub const ACK_LABEL: &str = r#"<i class="fas fa-check"></i> Downloaded!"#;

/// The trigger's resting markup, restored after the window.
pub const DEFAULT_LABEL: &str = r#"<i class="fas fa-download"></i> Download CV"#;

/// One acknowledged download click.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadAck {
    pub count: u64,
    /// Persist/display/acknowledge commands, applied immediately.
    pub commands: Vec<PageCommand>,
    /// When to ask for [`DownloadCounter::restore_commands`]. Every click
    /// schedules its own restore; overlapping windows each fire.
    pub restore_after: Duration,
}

/// The persisted download counter.
///
/// Reads once at startup, increments on every click, never decrements.
/// Malformed or absent persisted values read as zero.
#[derive(Debug)]
pub struct DownloadCounter {
    count: u64,
    trigger_label: String,
}

impl Default for DownloadCounter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl DownloadCounter {
    /// `trigger_label` is the trigger's resting markup, re-applied when an
    /// acknowledgment window ends.
    pub fn new(trigger_label: impl Into<String>) -> Self {
        Self {
            count: 0,
            trigger_label: trigger_label.into(),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Load the persisted count and display it.
    pub fn init(&mut self, store: &dyn CounterStore) -> Vec<PageCommand> {
        self.count = store
            .get(DOWNLOAD_COUNT_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        vec![self.display_command()]
    }

    /// Record one download: increment, persist, display, acknowledge.
    pub fn record(&mut self, store: &mut dyn CounterStore) -> DownloadAck {
        self.count += 1;
        store.set(DOWNLOAD_COUNT_KEY, self.count.to_string());

        DownloadAck {
            count: self.count,
            commands: vec![
                self.display_command(),
                PageCommand::SetMarkup {
                    target: Target::id(ids::DOWNLOAD_BUTTON),
                    markup: ACK_LABEL.into(),
                },
            ],
            restore_after: ACK_WINDOW,
        }
    }

    /// Commands for an expiring acknowledgment window: restore the resting
    /// label and re-display the counter. Reads the *current* count, so a
    /// click landing inside an earlier window restores to the final value.
    pub fn restore_commands(&self) -> Vec<PageCommand> {
        vec![
            PageCommand::SetMarkup {
                target: Target::id(ids::DOWNLOAD_BUTTON),
                markup: self.trigger_label.clone(),
            },
            self.display_command(),
        ]
    }

    fn display_command(&self) -> PageCommand {
        PageCommand::set_text(Target::id(ids::DOWNLOAD_COUNT), self.count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn absent_value_initializes_to_zero() {
        let mut counter = DownloadCounter::default();
        let store = MemoryStore::new();
        let commands = counter.init(&store);
        assert_eq!(counter.count(), 0);
        assert_eq!(
            commands,
            vec![PageCommand::set_text(Target::id(ids::DOWNLOAD_COUNT), "0")]
        );
    }

    #[test]
    fn malformed_value_reads_as_zero() {
        let mut counter = DownloadCounter::default();
        let mut store = MemoryStore::new();
        store.set(DOWNLOAD_COUNT_KEY, "not a number".into());
        counter.init(&store);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn one_click_persists_and_displays_one() {
        let mut counter = DownloadCounter::default();
        let mut store = MemoryStore::new();
        counter.init(&store);

        let ack = counter.record(&mut store);
        assert_eq!(ack.count, 1);
        assert_eq!(store.get(DOWNLOAD_COUNT_KEY).as_deref(), Some("1"));
        assert_eq!(ack.restore_after, ACK_WINDOW);
        assert!(ack.commands.iter().any(|c| matches!(
            c,
            PageCommand::SetMarkup { markup, .. } if markup == ACK_LABEL
        )));
    }

    #[test]
    fn overlapping_clicks_both_count() {
        let mut counter = DownloadCounter::default();
        let mut store = MemoryStore::new();
        counter.init(&store);

        // Second click lands inside the first acknowledgment window.
        counter.record(&mut store);
        counter.record(&mut store);
        assert_eq!(store.get(DOWNLOAD_COUNT_KEY).as_deref(), Some("2"));

        // Both pending restores display the final value.
        let restore = counter.restore_commands();
        assert!(restore.contains(&PageCommand::set_text(Target::id(ids::DOWNLOAD_COUNT), "2")));
        assert!(restore.iter().any(|c| matches!(
            c,
            PageCommand::SetMarkup { markup, .. } if markup == DEFAULT_LABEL
        )));
    }

    #[test]
    fn counter_survives_reinit_from_store() {
        let mut store = MemoryStore::new();
        let mut counter = DownloadCounter::default();
        counter.init(&store);
        counter.record(&mut store);
        counter.record(&mut store);

        let mut fresh = DownloadCounter::default();
        fresh.init(&store);
        assert_eq!(fresh.count(), 2);
    }
}
