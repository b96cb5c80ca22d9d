pub mod engine;

pub use engine::{PlaybackEngine, SimulatedPlayer};
