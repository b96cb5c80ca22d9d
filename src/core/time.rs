//! Time representation in integer milliseconds.
//! Every duration the catalog reports and every position the player reports
//! is a millisecond count, so the whole crate computes in u64 milliseconds.

/// A duration or offset in milliseconds
pub type Millis = u64;

/// A wall-clock instant in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Time constants for conversions
pub mod constants {
    use super::Millis;

    pub const MILLIS_PER_SECOND: Millis = 1_000;
    pub const MILLIS_PER_MINUTE: Millis = 60 * MILLIS_PER_SECOND;
    pub const MILLIS_PER_HOUR: Millis = 60 * MILLIS_PER_MINUTE;
}

/// Convert whole seconds to milliseconds
#[inline]
pub fn from_seconds(seconds: u64) -> Millis {
    seconds * constants::MILLIS_PER_SECOND
}

/// Convert whole minutes to milliseconds
#[inline]
pub fn from_minutes(minutes: u64) -> Millis {
    minutes * constants::MILLIS_PER_MINUTE
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis() as Timestamp
}

/// Format a millisecond count as HH:MM:SS.mmm
pub fn format_clock(millis: Millis) -> String {
    let hours = millis / constants::MILLIS_PER_HOUR;
    let minutes = (millis % constants::MILLIS_PER_HOUR) / constants::MILLIS_PER_MINUTE;
    let seconds = (millis % constants::MILLIS_PER_MINUTE) / constants::MILLIS_PER_SECOND;
    let remainder = millis % constants::MILLIS_PER_SECOND;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, remainder)
}
