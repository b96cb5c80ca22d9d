//! Playback engine port.
//!
//! The core never decodes or renders; it drives an external player through
//! this trait and reads the live position back from it. The surface is the
//! handful of verbs a channel switch needs: load a playlist, seek to a clip
//! and offset, start/stop, and report where playback currently is.

use crate::core::clip::Clip;
use crate::core::time::Millis;
use std::time::Instant;
use tracing::debug;

/// The player the tuner commands.
///
/// Implementations wrap whatever actually plays video on the device. The
/// tuner queries `current_track`/`current_position` immediately before a
/// switch and issues `set_playlist` + `seek_to` immediately after one.
pub trait PlaybackEngine {
    /// Replace the player's queue with the given clips, in order
    fn set_playlist(&mut self, clips: &[Clip]);

    /// Jump to a clip index and intra-clip offset
    fn seek_to(&mut self, track: usize, offset: Millis);

    /// Loop the whole queue endlessly
    fn set_repeat_all(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    /// Index of the item currently presented
    fn current_track(&self) -> usize;

    /// Offset into the current item, in milliseconds
    fn current_position(&self) -> Millis;
}

/// A wall-clock-driven player stand-in.
///
/// Holds a playlist and advances through it in real time while "playing",
/// wrapping at the end when repeat-all is set. Good enough to run the kiosk
/// loop without a real video stack, and to observe seeks land where the
/// scheduler said they would.
pub struct SimulatedPlayer {
    playlist: Vec<Clip>,
    repeat_all: bool,
    /// Position the last seek/pause established
    anchor_track: usize,
    anchor_offset: Millis,
    /// Set while playing; elapsed time since it advances the position
    started: Option<Instant>,
}

impl SimulatedPlayer {
    pub fn new() -> Self {
        Self {
            playlist: Vec::new(),
            repeat_all: false,
            anchor_track: 0,
            anchor_offset: 0,
            started: None,
        }
    }

    fn total_duration(&self) -> Millis {
        self.playlist.iter().map(|c| c.duration).sum()
    }

    /// Where playback stands after `advance` milliseconds beyond the anchor.
    ///
    /// Without repeat-all the position saturates at the end of the last clip;
    /// with it, the advance wraps around the playlist loop.
    fn position_after(&self, advance: Millis) -> (usize, Millis) {
        if self.playlist.is_empty() {
            return (0, 0);
        }
        let total = self.total_duration();
        if total == 0 {
            return (self.anchor_track, 0);
        }

        let anchor: Millis = self.playlist[..self.anchor_track]
            .iter()
            .map(|c| c.duration)
            .sum::<Millis>()
            + self.anchor_offset;
        let reached = anchor + advance;

        let mut remaining = if self.repeat_all {
            reached % total
        } else if reached >= total {
            // Stopped at the very end of the last clip
            let last = self.playlist.len() - 1;
            return (last, self.playlist[last].duration);
        } else {
            reached
        };

        for (track, clip) in self.playlist.iter().enumerate() {
            if clip.contains_offset(remaining) {
                return (track, remaining);
            }
            remaining -= clip.duration;
        }
        (0, 0)
    }

    fn elapsed_since_start(&self) -> Millis {
        self.started
            .map(|at| at.elapsed().as_millis() as Millis)
            .unwrap_or(0)
    }

    pub fn is_playing(&self) -> bool {
        self.started.is_some()
    }
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackEngine for SimulatedPlayer {
    fn set_playlist(&mut self, clips: &[Clip]) {
        debug!(items = clips.len(), "playlist replaced");
        self.playlist = clips.to_vec();
        self.anchor_track = 0;
        self.anchor_offset = 0;
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    fn seek_to(&mut self, track: usize, offset: Millis) {
        debug!(track, offset, "seek");
        self.anchor_track = track.min(self.playlist.len().saturating_sub(1));
        self.anchor_offset = offset;
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    fn set_repeat_all(&mut self) {
        self.repeat_all = true;
    }

    fn play(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if self.started.is_some() {
            let (track, offset) = self.position_after(self.elapsed_since_start());
            self.anchor_track = track;
            self.anchor_offset = offset;
            self.started = None;
        }
    }

    fn current_track(&self) -> usize {
        self.position_after(self.elapsed_since_start()).0
    }

    fn current_position(&self) -> Millis {
        self.position_after(self.elapsed_since_start()).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(durations: &[Millis]) -> SimulatedPlayer {
        let clips: Vec<Clip> = durations
            .iter()
            .enumerate()
            .map(|(i, d)| Clip::new(i as u64, format!("ad_clip_{}.mp4", i), *d))
            .collect();
        let mut player = SimulatedPlayer::new();
        player.set_playlist(&clips);
        player
    }

    #[test]
    fn test_starts_at_playlist_top() {
        let player = player(&[1_000, 2_000]);
        assert_eq!(player.current_track(), 0);
        assert_eq!(player.current_position(), 0);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_seek_moves_anchor() {
        let mut player = player(&[1_000, 2_000]);
        player.seek_to(1, 500);
        assert_eq!(player.current_track(), 1);
        assert_eq!(player.current_position(), 500);
    }

    #[test]
    fn test_advance_crosses_clip_boundary() {
        let mut player = player(&[1_000, 2_000]);
        player.seek_to(0, 900);
        assert_eq!(player.position_after(300), (1, 200));
    }

    #[test]
    fn test_advance_wraps_with_repeat_all() {
        let mut player = player(&[1_000, 2_000]);
        player.set_repeat_all();
        player.seek_to(1, 1_900);
        // 100ms to the end of the loop, then 250ms into clip 0 again
        assert_eq!(player.position_after(350), (0, 250));
    }

    #[test]
    fn test_advance_saturates_without_repeat() {
        let mut player = player(&[1_000, 2_000]);
        player.seek_to(1, 1_900);
        assert_eq!(player.position_after(10_000), (1, 2_000));
    }

    #[test]
    fn test_empty_playlist_reports_zero() {
        let player = SimulatedPlayer::new();
        assert_eq!(player.current_track(), 0);
        assert_eq!(player.current_position(), 0);
    }

    #[test]
    fn test_pause_freezes_position() {
        let mut player = player(&[1_000, 2_000]);
        player.seek_to(1, 250);
        player.play();
        player.pause();
        // Whatever ran between play and pause is frozen into the anchor
        let frozen = player.current_position();
        assert_eq!(player.current_track(), 1);
        assert!(frozen >= 250);
        assert!(!player.is_playing());
    }
}
