//! Lineup: the fixed, ordered set of channels plus the shared virtual-clock
//! reference. Channels are created once at startup and live for the whole
//! process; only reloads and position updates mutate them.

use crate::core::channel::Channel;
use crate::core::clip::Clip;
use crate::core::time::{Millis, Timestamp};
use tracing::info;

/// Number of channels a standard lineup carries
pub const CHANNEL_COUNT: usize = 3;

/// The channel set, addressed by index.
///
/// `epoch` marks when the simulated broadcasts started. It is written once
/// when the lineup is (re)loaded and read-only afterwards; every live-tuned
/// channel measures elapsed air time against it.
#[derive(Debug, Clone)]
pub struct Lineup {
    channels: Vec<Channel>,
    epoch: Timestamp,
}

impl Lineup {
    /// Create the standard three-channel lineup with the given epoch
    pub fn standard(epoch: Timestamp) -> Self {
        let channels = (1..=CHANNEL_COUNT)
            .map(|n| Channel::new(format!("TV {}", n)))
            .collect();
        Self { channels, epoch }
    }

    /// Create a lineup from pre-built channels (tests, custom hosts)
    pub fn with_channels(channels: Vec<Channel>, epoch: Timestamp) -> Self {
        Self { channels, epoch }
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The virtual-clock reference timestamp
    pub fn epoch(&self) -> Timestamp {
        self.epoch
    }

    /// Restart the virtual clock. Only (re)load logic calls this; resolving
    /// against a moving reference would defeat the simulation.
    pub fn reset_epoch(&mut self, epoch: Timestamp) {
        self.epoch = epoch;
    }

    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    pub fn channel_mut(&mut self, index: usize) -> &mut Channel {
        &mut self.channels[index]
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Replace one channel's content and log the reloaded totals
    pub fn load_channel(&mut self, index: usize, clips: Vec<Clip>, durations: Vec<Millis>) {
        let channel = &mut self.channels[index];
        channel.load(clips, durations);
        info!(
            channel = channel.name(),
            clips = channel.len(),
            total_ms = channel.total_duration(),
            "channel loaded"
        );
    }

    /// Store the last live playback location for one channel
    pub fn record_position(&mut self, index: usize, track: usize, position: Millis) {
        self.channels[index].record_position(track, position);
    }

    /// True iff the addressed channel has no clips
    pub fn is_channel_empty(&self, index: usize) -> bool {
        self.channels[index].is_empty()
    }
}
