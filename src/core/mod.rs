//! Core types for the virtual-television lineup.
//!
//! This module provides the fundamental data structures for channels, clips,
//! the lineup, and time representation. All time values are integer
//! milliseconds (u64).

pub mod channel;
pub mod clip;
pub mod lineup;
pub mod time;

// Re-export core data structures for easier access.
pub use channel::{Channel, TuningMode};
pub use clip::{Clip, ClipId};
pub use lineup::{Lineup, CHANNEL_COUNT};
pub use time::{Millis, Timestamp};
