//! Clip data structure: one playable media unit with a known duration.

use crate::core::time::Millis;
use serde::{Deserialize, Serialize};

/// Unique identifier for a clip
pub type ClipId = u64;

/// A clip references a playable media item and carries its duration.
///
/// The core never opens the media itself; `source` is an opaque reference
/// (file name, content URI) that only the playback engine interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    pub source: String,
    pub duration: Millis,
}

impl Clip {
    /// Create a new clip.
    ///
    /// A zero duration is allowed (the catalog may fail to read metadata);
    /// the scheduler treats such clips as never airing.
    pub fn new(id: ClipId, source: impl Into<String>, duration: Millis) -> Self {
        Self {
            id,
            source: source.into(),
            duration,
        }
    }

    /// Check if an intra-clip offset falls inside this clip
    pub fn contains_offset(&self, offset: Millis) -> bool {
        offset < self.duration
    }
}
