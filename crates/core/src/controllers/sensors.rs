use std::ops::RangeInclusive;
use std::time::Duration;

use folio_protocol::contract::{css, ids};
use folio_protocol::{PageCommand, Target};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How often fresh readings are generated while the dashboard is open.
pub const TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// Generation ranges for the simulated readings.
pub const TEMP_RANGE: RangeInclusive<f64> = 27.0..=31.0;
pub const AMMONIA_RANGE: RangeInclusive<f64> = 0.01..=0.05;
pub const PH_RANGE: RangeInclusive<f64> = 6.8..=7.6;

/// "Normal" classification intervals. Generation ranges deliberately
/// exceed them, so warnings do occur.
pub const TEMP_NORMAL: RangeInclusive<f64> = 25.0..=30.0;
pub const AMMONIA_NORMAL: RangeInclusive<f64> = 0.0..=0.03;
pub const PH_NORMAL: RangeInclusive<f64> = 6.5..=7.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorStatus {
    Normal,
    Warning,
}

impl SensorStatus {
    fn classify(value: f64, normal: &RangeInclusive<f64>) -> Self {
        if normal.contains(&value) {
            Self::Normal
        } else {
            Self::Warning
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Normal => css::STATUS_NORMAL,
            Self::Warning => css::STATUS_WARNING,
        }
    }
}

/// One round of simulated readings, pre-rounded to display precision —
/// classification runs on what the user sees, not the raw draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub temperature: f64,
    pub ammonia: f64,
    pub ph: f64,
}

impl SensorReadings {
    pub fn temperature_status(&self) -> SensorStatus {
        SensorStatus::classify(self.temperature, &TEMP_NORMAL)
    }

    pub fn ammonia_status(&self) -> SensorStatus {
        SensorStatus::classify(self.ammonia, &AMMONIA_NORMAL)
    }

    pub fn ph_status(&self) -> SensorStatus {
        SensorStatus::classify(self.ph, &PH_NORMAL)
    }

    pub fn temperature_text(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    pub fn ammonia_text(&self) -> String {
        format!("{:.3} ppm", self.ammonia)
    }

    pub fn ph_text(&self) -> String {
        format!("{:.1}", self.ph)
    }
}

/// Decorative live-sensor simulation behind the IoT dashboard section.
///
/// Host-driven: started when a dashboard section is rendered, ticked
/// every [`TICK_INTERVAL`], dropped when the modal closes. Seeded so
/// tests replay exact sequences.
#[derive(Debug)]
pub struct SensorSim {
    rng: SmallRng,
}

impl SensorSim {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh reading set, rounded to display precision.
    pub fn sample(&mut self) -> SensorReadings {
        let round = |value: f64, places: i32| {
            let scale = 10f64.powi(places);
            (value * scale).round() / scale
        };
        SensorReadings {
            temperature: round(self.rng.gen_range(TEMP_RANGE), 1),
            ammonia: round(self.rng.gen_range(AMMONIA_RANGE), 3),
            ph: round(self.rng.gen_range(PH_RANGE), 1),
        }
    }

    /// One simulation tick: update the three value slots and their
    /// status badges.
    pub fn tick(&mut self) -> Vec<PageCommand> {
        let readings = self.sample();
        let mut commands = Vec::with_capacity(9);
        slot_commands(
            &mut commands,
            ids::TEMP_VALUE,
            ids::TEMP_STATUS,
            readings.temperature_text(),
            readings.temperature_status(),
        );
        slot_commands(
            &mut commands,
            ids::AMMONIA_VALUE,
            ids::AMMONIA_STATUS,
            readings.ammonia_text(),
            readings.ammonia_status(),
        );
        slot_commands(
            &mut commands,
            ids::PH_VALUE,
            ids::PH_STATUS,
            readings.ph_text(),
            readings.ph_status(),
        );
        commands
    }
}

fn slot_commands(
    commands: &mut Vec<PageCommand>,
    value_id: &str,
    status_id: &str,
    text: String,
    status: SensorStatus,
) {
    commands.push(PageCommand::set_text(Target::id(value_id), text));
    commands.push(PageCommand::set_text(Target::id(status_id), status.label()));
    let other = match status {
        SensorStatus::Normal => SensorStatus::Warning,
        SensorStatus::Warning => SensorStatus::Normal,
    };
    commands.push(PageCommand::remove_class(
        Target::id(status_id),
        other.css_class(),
    ));
    commands.push(PageCommand::add_class(
        Target::id(status_id),
        status.css_class(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_independent_per_sensor() {
        let readings = SensorReadings {
            temperature: 30.5,
            ammonia: 0.02,
            ph: 7.6,
        };
        assert_eq!(readings.temperature_status(), SensorStatus::Warning);
        assert_eq!(readings.ammonia_status(), SensorStatus::Normal);
        assert_eq!(readings.ph_status(), SensorStatus::Warning);
    }

    #[test]
    fn interval_endpoints_are_normal() {
        let readings = SensorReadings {
            temperature: 30.0,
            ammonia: 0.03,
            ph: 6.5,
        };
        assert_eq!(readings.temperature_status(), SensorStatus::Normal);
        assert_eq!(readings.ammonia_status(), SensorStatus::Normal);
        assert_eq!(readings.ph_status(), SensorStatus::Normal);
    }

    #[test]
    fn samples_stay_in_generation_ranges() {
        let mut sim = SensorSim::new(7);
        for _ in 0..200 {
            let r = sim.sample();
            assert!(TEMP_RANGE.contains(&r.temperature), "{}", r.temperature);
            assert!(AMMONIA_RANGE.contains(&r.ammonia), "{}", r.ammonia);
            assert!(PH_RANGE.contains(&r.ph), "{}", r.ph);
        }
    }

    #[test]
    fn same_seed_replays_the_sequence() {
        let mut a = SensorSim::new(42);
        let mut b = SensorSim::new(42);
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn display_formatting() {
        let readings = SensorReadings {
            temperature: 28.5,
            ammonia: 0.02,
            ph: 7.2,
        };
        assert_eq!(readings.temperature_text(), "28.5°C");
        assert_eq!(readings.ammonia_text(), "0.020 ppm");
        assert_eq!(readings.ph_text(), "7.2");
    }

    #[test]
    fn tick_updates_all_three_slots() {
        let mut sim = SensorSim::new(1);
        let commands = sim.tick();
        assert_eq!(commands.len(), 12);
        let texts = commands
            .iter()
            .filter(|c| matches!(c, PageCommand::SetText { .. }))
            .count();
        assert_eq!(texts, 6); // three values + three badge labels
    }
}
