//! Channel tuning: the virtual-clock scheduler and the switch controller.

pub mod controller;
pub mod event;
pub mod state;
pub mod sync;

pub use controller::Tuner;
pub use event::{event_queue, InputEvent};
pub use state::ChannelState;
pub use sync::{resolve, resolve_channel, SeekTarget, SyncError};
