//! The tuner: serialized channel switching and day-cycle transitions.
//!
//! Every external event funnels through one `Tuner` instance on one thread.
//! A switch is a read-modify-write across two channels (record the outgoing
//! live position, then seek the incoming channel), so events must never
//! interleave; processing them strictly in arrival order is the whole
//! concurrency story.

use crate::config::KioskConfig;
use crate::core::channel::TuningMode;
use crate::core::clip::Clip;
use crate::core::lineup::Lineup;
use crate::core::time::{Millis, Timestamp};
use crate::device::DeviceControl;
use crate::playback::engine::PlaybackEngine;
use crate::schedule::day_cycle::{DayCycle, DayPhase};
use crate::tuner::event::InputEvent;
use crate::tuner::state::ChannelState;
use crate::tuner::sync::{self, SeekTarget, SyncError};
use chrono::NaiveDateTime;
use tracing::{info, warn};

/// Owns the lineup and drives the playback engine and device ports.
pub struct Tuner<P, D> {
    lineup: Lineup,
    player: P,
    device: D,
    config: KioskConfig,
    day_cycle: DayCycle,
    states: Vec<ChannelState>,
    active: Option<usize>,
    awake: bool,
}

impl<P, D> Tuner<P, D>
where
    P: PlaybackEngine,
    D: DeviceControl,
{
    pub fn new(lineup: Lineup, player: P, device: D, config: KioskConfig) -> Self {
        let states = lineup
            .channels()
            .iter()
            .map(|c| {
                if c.is_empty() {
                    ChannelState::Idle
                } else {
                    ChannelState::Loaded
                }
            })
            .collect();
        let day_cycle = DayCycle::new(config.wake_hour, config.sleep_hour);
        Self {
            lineup,
            player,
            device,
            config,
            day_cycle,
            states,
            active: None,
            awake: true,
        }
    }

    /// Switch to a channel, resolving the position its tuning mode demands.
    ///
    /// On `EmptyChannel`/`DegenerateChannel` the switch is aborted before any
    /// player call: the prior channel keeps playing and a message tells the
    /// viewer why. Those are steady-state conditions, not faults.
    pub fn select_channel(&mut self, index: usize, now: Timestamp) -> Result<SeekTarget, SyncError> {
        if !self.awake {
            self.wake();
        }
        self.device.show_message(self.lineup.channel(index).name());
        self.save_active_position();

        let channel = self.lineup.channel(index);
        if channel.is_empty() {
            self.device.show_message("No video files in channel!");
            return Err(SyncError::EmptyChannel);
        }

        let target = match channel.mode() {
            TuningMode::Live => match sync::resolve(channel, self.lineup.epoch(), now) {
                Ok(target) => target,
                Err(error) => {
                    if error == SyncError::DegenerateChannel {
                        warn!(channel = channel.name(), "all clip durations are zero");
                    }
                    self.device.show_message("No video files in channel!");
                    return Err(error);
                }
            },
            TuningMode::Resume => {
                let (track, offset) = channel.stored_position();
                if self.active == Some(index) {
                    // Already on air and frozen positions don't move
                    return Ok(SeekTarget { track, offset });
                }
                SeekTarget { track, offset }
            }
        };

        info!(
            channel = self.lineup.channel(index).name(),
            track = target.track,
            offset = target.offset,
            "channel switch"
        );

        self.player.set_playlist(self.lineup.channel(index).clips());
        self.player.seek_to(target.track, target.offset);
        self.player.set_repeat_all();
        self.player.play();
        self.device.set_brightness(self.config.screen_brightness);
        self.apply_sound_policy();

        if let Some(previous) = self.active.take() {
            if previous != index {
                self.states[previous] = ChannelState::Backgrounded;
            }
        }
        self.states[index] = ChannelState::Active;
        self.active = Some(index);

        Ok(target)
    }

    /// Dark screen, muted audio, paused playback
    pub fn sleep(&mut self) {
        info!("going to sleep");
        self.device.show_message("Sleeping");
        self.device.set_brightness(0.0);
        self.device.set_volume(0.0);
        self.player.pause();
        self.awake = false;
    }

    /// Restore brightness and the sound policy, resume playback
    pub fn wake(&mut self) {
        info!("waking up");
        self.device.show_message("Awake");
        self.device.set_brightness(self.config.screen_brightness);
        self.apply_sound_policy();
        self.player.play();
        self.awake = true;
    }

    /// Apply whichever phase the day cycle says the local time is in
    pub fn handle_alarm(&mut self, local: NaiveDateTime) {
        match self.day_cycle.phase_at(local) {
            DayPhase::Asleep => self.sleep(),
            DayPhase::Awake => self.wake(),
        }
    }

    pub fn handle_headset(&mut self, plugged: bool) {
        if plugged {
            self.device.show_message("Headset connected!");
            self.device.set_volume(self.config.sound_level);
        } else {
            self.device.show_message("Insert headset!");
            self.device.set_volume(0.0);
        }
    }

    /// Replace a channel's content (catalog refresh, permission grant)
    pub fn reload_channel(&mut self, index: usize, clips: Vec<Clip>, durations: Vec<Millis>) {
        self.lineup.load_channel(index, clips, durations);
        self.states[index] = if self.lineup.channel(index).is_empty() {
            ChannelState::Idle
        } else if self.active == Some(index) {
            ChannelState::Active
        } else {
            ChannelState::Loaded
        };
    }

    /// Restart the virtual clock, e.g. after a full catalog reload
    pub fn restart_clock(&mut self, now: Timestamp) {
        self.lineup.reset_epoch(now);
    }

    /// Handle one event. Returns false when the loop should stop.
    pub fn process(&mut self, event: InputEvent, now: Timestamp, local: NaiveDateTime) -> bool {
        match event {
            InputEvent::SelectChannel(index) if index < self.lineup.len() => {
                // Failures already surfaced to the viewer; keep the loop alive
                let _ = self.select_channel(index, now);
            }
            InputEvent::SelectChannel(index) => {
                warn!(index, "select for unknown channel ignored");
            }
            InputEvent::AlarmTick => self.handle_alarm(local),
            InputEvent::Sleep => self.sleep(),
            InputEvent::Wake => self.wake(),
            InputEvent::HeadsetPlugged => self.handle_headset(true),
            InputEvent::HeadsetUnplugged => self.handle_headset(false),
            InputEvent::Quit => return false,
        }
        true
    }

    fn save_active_position(&mut self) {
        if let Some(index) = self.active {
            let track = self.player.current_track();
            let position = self.player.current_position();
            self.lineup.record_position(index, track, position);
        }
    }

    fn apply_sound_policy(&mut self) {
        // Audio is only ever unmuted while a headset is present
        if self.device.headset_present() {
            self.device.set_volume(self.config.sound_level);
        } else {
            self.device.set_volume(0.0);
        }
    }

    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    pub fn lineup_mut(&mut self) -> &mut Lineup {
        &mut self.lineup
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn day_cycle(&self) -> &DayCycle {
        &self.day_cycle
    }

    pub fn state(&self, index: usize) -> ChannelState {
        self.states[index]
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }
}
