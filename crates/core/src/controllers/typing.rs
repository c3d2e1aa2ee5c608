use std::time::Duration;

use folio_protocol::contract::ids;
use folio_protocol::{PageCommand, Target};

/// Delay after revealing one more character.
pub const TYPE_TICK: Duration = Duration::from_millis(100);
/// Delay after removing one character.
pub const DELETE_TICK: Duration = Duration::from_millis(50);
/// Hold with the full phrase shown before deletion starts.
pub const HOLD: Duration = Duration::from_millis(2000);
/// Rest on the empty string before the next phrase starts typing.
pub const REST: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Result of one animator tick: the text to show and when to tick next.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingTick {
    pub text: String,
    pub next_delay: Duration,
}

impl TypingTick {
    pub fn command(&self) -> PageCommand {
        PageCommand::set_text(Target::id(ids::TYPING_TEXT), self.text.clone())
    }
}

/// The typed-text hero animation: a two-phase cycle over a phrase list.
///
/// The animator is tick-driven — each `tick` advances one step and reports
/// the delay before the next. The host owns the timer; dropping the
/// animator (or ceasing to tick it) is the stop handle, so tests can step
/// it synchronously.
#[derive(Debug)]
pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl Default for TypingAnimator {
    fn default() -> Self {
        Self::with_phrases(
            [
                "Data Analyst",
                "Machine Learning Enthusiast",
                "Python Developer",
                "Data Visualization Expert",
            ]
            .map(String::from)
            .to_vec(),
        )
    }
}

impl TypingAnimator {
    pub fn with_phrases(phrases: Vec<String>) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Advance one step.
    ///
    /// Typing reveals one character per tick until the phrase is complete,
    /// then holds before switching to deletion. Deleting removes one
    /// character per tick until empty, then rests, wraps to the next
    /// phrase, and types again. Shown length stays within
    /// `[0, phrase length]` throughout.
    pub fn tick(&mut self) -> TypingTick {
        let Some(current) = self.phrases.get(self.phrase) else {
            // No phrases: stay idle and check back at the long delay.
            return TypingTick {
                text: String::new(),
                next_delay: HOLD,
            };
        };

        let mut next_delay = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(current.len());
                TYPE_TICK
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                DELETE_TICK
            }
        };

        if self.phase == Phase::Typing && self.shown == current.len() {
            self.phase = Phase::Deleting;
            next_delay = HOLD;
        } else if self.phase == Phase::Deleting && self.shown == 0 {
            self.phase = Phase::Typing;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            next_delay = REST;
        }

        TypingTick {
            text: current[..self.shown].iter().collect(),
            next_delay,
        }
    }
}
