//! Virtual-clock synchronization: computes which clip is currently airing.
//!
//! A channel is treated as an infinitely repeating loop that has been playing
//! since the lineup epoch. Resolving maps the elapsed wall-clock time onto a
//! (track, intra-clip offset) pair with one modulo over the loop length and a
//! single bounded walk over the clip durations, so the cost is O(clips) no
//! matter how long the viewer has been away.

use crate::core::channel::Channel;
use crate::core::lineup::Lineup;
use crate::core::time::{Millis, Timestamp};

/// Error type for resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The channel has no clips; nothing can air.
    #[error("channel has no clips")]
    EmptyChannel,
    /// The channel has clips but a zero total duration, so no instant of the
    /// loop maps to playable content. Usually bad duration metadata.
    #[error("channel content has zero total duration")]
    DegenerateChannel,
}

/// Where playback should land: clip index plus offset into that clip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeekTarget {
    pub track: usize,
    pub offset: Millis,
}

/// Resolve the currently-due position for a channel.
///
/// `epoch` is when the channel's simulated broadcast started; `now` is the
/// current wall clock. A `now` before `epoch` is clamped to the loop start
/// rather than producing a negative offset.
///
/// The returned offset always satisfies `offset < durations[track]`: an exact
/// clip-boundary instant belongs to the next clip, never to the finished one.
pub fn resolve(channel: &Channel, epoch: Timestamp, now: Timestamp) -> Result<SeekTarget, SyncError> {
    if channel.is_empty() {
        return Err(SyncError::EmptyChannel);
    }
    let total = channel.total_duration();
    if total == 0 {
        return Err(SyncError::DegenerateChannel);
    }

    let elapsed = now.saturating_sub(epoch);
    let mut offset = elapsed % total;

    let durations = channel.durations();
    let mut track = 0;
    // One full pass is always enough: offset < total and total is the exact
    // sum of the durations, so some track must absorb the remainder. The
    // wraparound and the iteration bound are safety nets, not the normal path.
    for _ in 0..durations.len() {
        let length = durations[track];
        if offset < length {
            return Ok(SeekTarget { track, offset });
        }
        offset -= length;
        track = if track + 1 < durations.len() { track + 1 } else { 0 };
    }

    Ok(SeekTarget::default())
}

/// Resolve a channel of the lineup against the lineup's own epoch
pub fn resolve_channel(lineup: &Lineup, index: usize, now: Timestamp) -> Result<SeekTarget, SyncError> {
    resolve(lineup.channel(index), lineup.epoch(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clip::Clip;

    fn channel(durations: &[Millis]) -> Channel {
        let clips = durations
            .iter()
            .enumerate()
            .map(|(i, d)| Clip::new(i as u64, format!("do_clip_{}.mp4", i), *d))
            .collect();
        let mut channel = Channel::new("TV 1");
        channel.load(clips, durations.to_vec());
        channel
    }

    fn target(track: usize, offset: Millis) -> SeekTarget {
        SeekTarget { track, offset }
    }

    #[test]
    fn test_boundary_table() {
        // Two clips of 1s and 2s, broadcast started at 0
        let ch = channel(&[1_000, 2_000]);
        assert_eq!(resolve(&ch, 0, 500).unwrap(), target(0, 500));
        assert_eq!(resolve(&ch, 0, 1_000).unwrap(), target(1, 0));
        assert_eq!(resolve(&ch, 0, 2_999).unwrap(), target(1, 1_999));
        assert_eq!(resolve(&ch, 0, 3_000).unwrap(), target(0, 0));
        assert_eq!(resolve(&ch, 0, 4_500).unwrap(), target(1, 500));
    }

    #[test]
    fn test_offset_strictly_inside_clip() {
        let ch = channel(&[1_000, 2_000, 750]);
        for now in (0..15_000).step_by(113) {
            let hit = resolve(&ch, 0, now).unwrap();
            assert!(
                hit.offset < ch.durations()[hit.track],
                "now={}: offset {} not inside track {}",
                now,
                hit.offset,
                hit.track
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let ch = channel(&[1_000, 2_000]);
        let first = resolve(&ch, 40, 2_340).unwrap();
        let second = resolve(&ch, 40, 2_340).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_periodicity() {
        let ch = channel(&[1_000, 2_000]);
        let base = resolve(&ch, 0, 1_234).unwrap();
        for k in 1..5u64 {
            let shifted = resolve(&ch, 0, 1_234 + k * 3_000).unwrap();
            assert_eq!(shifted, base, "k={}", k);
        }
    }

    #[test]
    fn test_continuity_within_a_clip() {
        let ch = channel(&[1_000, 2_000]);
        let before = resolve(&ch, 0, 1_200).unwrap();
        let after = resolve(&ch, 0, 1_450).unwrap();
        assert_eq!(after.track, before.track);
        assert_eq!(after.offset, before.offset + 250);
    }

    #[test]
    fn test_empty_channel_is_an_error() {
        let ch = Channel::new("TV 1");
        assert_eq!(resolve(&ch, 0, 5_000), Err(SyncError::EmptyChannel));
    }

    #[test]
    fn test_zero_total_duration_is_an_error() {
        let ch = channel(&[0, 0]);
        assert_eq!(resolve(&ch, 0, 5_000), Err(SyncError::DegenerateChannel));
    }

    #[test]
    fn test_now_before_epoch_clamps_to_loop_start() {
        let ch = channel(&[1_000, 2_000]);
        assert_eq!(resolve(&ch, 10_000, 4_000).unwrap(), target(0, 0));
    }

    #[test]
    fn test_zero_duration_clip_never_airs() {
        // The empty middle clip occupies no air time; the boundary instant
        // lands on the clip after it
        let ch = channel(&[1_000, 0, 2_000]);
        assert_eq!(resolve(&ch, 0, 999).unwrap(), target(0, 999));
        assert_eq!(resolve(&ch, 0, 1_000).unwrap(), target(2, 0));
        assert_eq!(resolve(&ch, 0, 1_500).unwrap(), target(2, 500));
    }

    #[test]
    fn test_zero_duration_leading_clip() {
        let ch = channel(&[0, 1_000]);
        assert_eq!(resolve(&ch, 0, 0).unwrap(), target(1, 0));
        assert_eq!(resolve(&ch, 0, 999).unwrap(), target(1, 999));
    }

    #[test]
    fn test_hours_of_elapsed_time() {
        // The viewer comes back after most of a day; the single modulo keeps
        // this O(clips), and the result matches direct arithmetic
        let ch = channel(&[90_000, 150_000, 60_000]);
        let away = 20 * 60 * 60 * 1_000u64 + 12_345;
        let expected_loop_pos = away % 300_000;
        let hit = resolve(&ch, 0, away).unwrap();
        assert_eq!(ch.elapsed_in_loop(hit.track, hit.offset), expected_loop_pos);
    }

    #[test]
    fn test_resolve_channel_uses_lineup_epoch() {
        let mut lineup = Lineup::with_channels(vec![channel(&[1_000, 2_000])], 1_000);
        assert_eq!(resolve_channel(&lineup, 0, 2_000).unwrap(), target(1, 0));
        lineup.reset_epoch(2_000);
        assert_eq!(resolve_channel(&lineup, 0, 2_000).unwrap(), target(0, 0));
    }
}
