pub mod day_cycle;

pub use day_cycle::{DayCycle, DayPhase};
