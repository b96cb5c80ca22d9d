//! Input events feeding the tuner.
//!
//! Producers (key handlers, alarm timers, headset detection) may live on any
//! thread; they push events into a crossbeam channel and a single consumer
//! drains it in arrival order. That single-consumer rule is what guarantees
//! the save-outgoing/seek-incoming sequence of a switch never interleaves
//! with another switch.

use crossbeam::channel::{unbounded, Receiver, Sender};

/// A discrete external event for the tuner to process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A physical button mapped to a channel index
    SelectChannel(usize),
    /// Day-cycle timer fired; re-evaluate the phase and re-arm
    AlarmTick,
    /// Force the sleep transition (screen dark, audio off, playback paused)
    Sleep,
    /// Force the wake transition
    Wake,
    /// Wired headset plugged in
    HeadsetPlugged,
    /// Wired headset removed
    HeadsetUnplugged,
    /// Stop the event loop
    Quit,
}

/// Create the event queue connecting input producers to the tuner
pub fn event_queue() -> (Sender<InputEvent>, Receiver<InputEvent>) {
    unbounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (tx, rx) = event_queue();
        tx.send(InputEvent::SelectChannel(0)).unwrap();
        tx.send(InputEvent::SelectChannel(2)).unwrap();
        tx.send(InputEvent::AlarmTick).unwrap();

        assert_eq!(rx.recv().unwrap(), InputEvent::SelectChannel(0));
        assert_eq!(rx.recv().unwrap(), InputEvent::SelectChannel(2));
        assert_eq!(rx.recv().unwrap(), InputEvent::AlarmTick);
    }

    #[test]
    fn test_queue_works_across_threads() {
        let (tx, rx) = event_queue();
        let producer = std::thread::spawn(move || {
            for i in 0..3 {
                tx.send(InputEvent::SelectChannel(i)).unwrap();
            }
        });
        producer.join().unwrap();

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                InputEvent::SelectChannel(0),
                InputEvent::SelectChannel(1),
                InputEvent::SelectChannel(2),
            ]
        );
    }
}
