//! Device control port: the OS side effects a channel switch or a day-cycle
//! transition triggers. Brightness, volume, headset presence, and short
//! user-visible messages are all simple calls with no algorithmic content,
//! so the core only ever talks to this trait.

use tracing::info;

/// The device surface the tuner drives.
pub trait DeviceControl {
    /// Screen brightness, 0.0 (dark) to 1.0 (full)
    fn set_brightness(&mut self, level: f32);

    /// Media volume, 0.0 (muted) to 1.0 (maximum)
    fn set_volume(&mut self, level: f32);

    /// True while a wired headset is connected
    fn headset_present(&self) -> bool;

    /// Short status text for the viewer (toast / overlay)
    fn show_message(&mut self, text: &str);
}

/// Device backend that reports everything through the log stream.
///
/// Serves the demo binary, where there is no real screen or mixer to drive.
pub struct ConsoleDevice {
    headset: bool,
}

impl ConsoleDevice {
    pub fn new(headset: bool) -> Self {
        Self { headset }
    }

    pub fn set_headset(&mut self, present: bool) {
        self.headset = present;
    }
}

impl DeviceControl for ConsoleDevice {
    fn set_brightness(&mut self, level: f32) {
        info!(level, "brightness");
    }

    fn set_volume(&mut self, level: f32) {
        info!(level, "volume");
    }

    fn headset_present(&self) -> bool {
        self.headset
    }

    fn show_message(&mut self, text: &str) {
        info!(message = text, "osd");
    }
}
