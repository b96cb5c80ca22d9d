//! Day cycle: when the installation is awake and when it sleeps.
//!
//! Pure local-time arithmetic. The host arms a timer for the instant
//! `next_transition` returns and sends the tuner an alarm event when it
//! fires; nothing here touches OS alarms.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Whether the screen should be on right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Awake,
    Asleep,
}

/// The daily awake window, `[wake_hour, sleep_hour)` in local hours.
#[derive(Debug, Clone, Copy)]
pub struct DayCycle {
    wake_hour: u32,
    sleep_hour: u32,
}

impl DayCycle {
    /// Create a cycle. Hours must be valid and the wake hour must precede
    /// the sleep hour; anything else is a configuration bug.
    pub fn new(wake_hour: u32, sleep_hour: u32) -> Self {
        assert!(sleep_hour < 24, "sleep hour {} out of range", sleep_hour);
        assert!(
            wake_hour < sleep_hour,
            "wake hour {} must precede sleep hour {}",
            wake_hour,
            sleep_hour
        );
        Self { wake_hour, sleep_hour }
    }

    pub fn wake_hour(&self) -> u32 {
        self.wake_hour
    }

    pub fn sleep_hour(&self) -> u32 {
        self.sleep_hour
    }

    /// Phase at a local time
    pub fn phase_at(&self, t: NaiveDateTime) -> DayPhase {
        let hour = t.hour();
        if hour >= self.wake_hour && hour < self.sleep_hour {
            DayPhase::Awake
        } else {
            DayPhase::Asleep
        }
    }

    /// The next top-of-hour instant at which the phase flips: the sleep hour
    /// while awake, the wake hour while asleep. Rolls to the next day when
    /// today's occurrence has already passed.
    pub fn next_transition(&self, t: NaiveDateTime) -> NaiveDateTime {
        let target = match self.phase_at(t) {
            DayPhase::Awake => self.sleep_hour,
            DayPhase::Asleep => self.wake_hour,
        };
        let day = if t.hour() >= target {
            t.date() + Duration::days(1)
        } else {
            t.date()
        };
        day.and_hms_opt(target, 0, 0)
            .expect("transition hour validated in constructor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 11)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_phase_boundaries() {
        let cycle = DayCycle::new(7, 19);
        assert_eq!(cycle.phase_at(at(6, 59)), DayPhase::Asleep);
        assert_eq!(cycle.phase_at(at(7, 0)), DayPhase::Awake);
        assert_eq!(cycle.phase_at(at(18, 59)), DayPhase::Awake);
        assert_eq!(cycle.phase_at(at(19, 0)), DayPhase::Asleep);
        assert_eq!(cycle.phase_at(at(23, 30)), DayPhase::Asleep);
    }

    #[test]
    fn test_next_transition_while_awake() {
        let cycle = DayCycle::new(7, 19);
        assert_eq!(cycle.next_transition(at(10, 15)), at(19, 0));
    }

    #[test]
    fn test_next_transition_late_night_rolls_to_morning() {
        let cycle = DayCycle::new(7, 19);
        let next = cycle.next_transition(at(21, 0));
        let tomorrow_morning = NaiveDate::from_ymd_opt(2024, 3, 12)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        assert_eq!(next, tomorrow_morning);
    }

    #[test]
    fn test_next_transition_early_morning_same_day() {
        let cycle = DayCycle::new(7, 19);
        assert_eq!(cycle.next_transition(at(3, 30)), at(7, 0));
    }

    #[test]
    fn test_transition_instants_alternate() {
        let cycle = DayCycle::new(7, 19);
        let sleep_at = cycle.next_transition(at(8, 0));
        assert_eq!(cycle.phase_at(sleep_at), DayPhase::Asleep);
        let wake_at = cycle.next_transition(sleep_at);
        assert_eq!(cycle.phase_at(wake_at), DayPhase::Awake);
        assert!(wake_at > sleep_at);
    }

    #[test]
    #[should_panic(expected = "must precede")]
    fn test_inverted_hours_rejected() {
        DayCycle::new(19, 7);
    }
}
