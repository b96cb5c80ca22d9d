//! loopcast: a virtual-television core.
//!
//! Turns a set of clip playlists into a simulated broadcast lineup. Each
//! channel loops its clips forever against a shared reference clock, so
//! tuning in lands where a continuous broadcast would currently be, not
//! where the viewer left off. The crate owns the scheduling and switching
//! logic only; playing video and touching the device happen behind the
//! `playback` and `device` ports.

pub mod config;
pub mod core;
pub mod device;
pub mod media;
pub mod playback;
pub mod schedule;
pub mod tuner;
