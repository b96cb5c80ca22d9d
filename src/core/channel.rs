//! Channel model: an ordered, looping playlist simulating one broadcast feed.
//!
//! A channel holds its clip list, the parallel duration list, the derived
//! total duration, and the last playback location the player reported for it.
//! It is a leaf component: pure data, no device I/O, no scheduling decisions.

use crate::core::clip::Clip;
use crate::core::time::Millis;

/// How the tuner restores a channel when it becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TuningMode {
    /// Recompute the due position from the virtual clock; the channel keeps
    /// "airing" while backgrounded and stored positions are ignored.
    #[default]
    Live,
    /// Resume exactly at the stored (track, position), like a paused tape.
    Resume,
}

/// One channel in the lineup.
///
/// Invariants, maintained by the mutators below:
/// - `durations.len() == clips.len()`
/// - `total_duration` equals the exact sum of `durations`
/// - `current_track < clips.len()` whenever clips are present
/// - `current_position <= durations[current_track]`
#[derive(Debug, Clone)]
pub struct Channel {
    name: String,
    clips: Vec<Clip>,
    durations: Vec<Millis>,
    total_duration: Millis,
    current_track: usize,
    current_position: Millis,
    mode: TuningMode,
}

impl Channel {
    /// Create an empty channel with a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clips: Vec::new(),
            durations: Vec::new(),
            total_duration: 0,
            current_track: 0,
            current_position: 0,
            mode: TuningMode::default(),
        }
    }

    /// Replace the channel content wholesale and recompute the total.
    ///
    /// The clip and duration lists must be parallel; a length mismatch is a
    /// caller bug and panics rather than leaving the channel inconsistent.
    /// The stored (track, position) is left untouched.
    pub fn load(&mut self, clips: Vec<Clip>, durations: Vec<Millis>) {
        assert_eq!(
            clips.len(),
            durations.len(),
            "channel {:?}: clip and duration lists must have equal length",
            self.name
        );
        self.total_duration = durations.iter().sum();
        self.clips = clips;
        self.durations = durations;
    }

    /// Store the last live playback location reported by the player.
    ///
    /// `track` must be a valid index. The position is clamped to the clip
    /// duration: players report a few milliseconds past the end while they
    /// transition between items.
    pub fn record_position(&mut self, track: usize, position: Millis) {
        assert!(
            track < self.clips.len(),
            "channel {:?}: track {} out of range ({} clips)",
            self.name,
            track,
            self.clips.len()
        );
        self.current_track = track;
        self.current_position = position.min(self.durations[track]);
    }

    /// True iff the channel has no clips
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Number of clips in the loop
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn durations(&self) -> &[Millis] {
        &self.durations
    }

    /// Exact sum of all clip durations
    pub fn total_duration(&self) -> Millis {
        self.total_duration
    }

    /// Last stored (track, position) pair
    pub fn stored_position(&self) -> (usize, Millis) {
        (self.current_track, self.current_position)
    }

    pub fn mode(&self) -> TuningMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TuningMode) {
        self.mode = mode;
    }

    /// Total milliseconds played from the top of the loop to the given
    /// location: the durations of all preceding tracks plus the offset.
    pub fn elapsed_in_loop(&self, track: usize, position: Millis) -> Millis {
        assert!(
            track < self.clips.len(),
            "channel {:?}: track {} out of range ({} clips)",
            self.name,
            track,
            self.clips.len()
        );
        let preceding: Millis = self.durations[..track].iter().sum();
        preceding + position.min(self.durations[track])
    }
}
