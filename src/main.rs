//! Kiosk entry point.
//!
//! Wires a manifest-backed lineup to the simulated player and the console
//! device, then drains the event queue on this thread. Keyboard stands in
//! for the kiosk's physical buttons: `1`-`3` tune, `h` toggles the wired
//! headset, `s`/`w` force sleep/wake, `q` quits. A background thread fires
//! an alarm event at every day-cycle boundary, the way the device's alarm
//! manager would.

use clap::Parser;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use loopcast::config::KioskConfig;
use loopcast::core::time::now_millis;
use loopcast::device::ConsoleDevice;
use loopcast::media::{load_lineup, ManifestCatalog};
use loopcast::playback::SimulatedPlayer;
use loopcast::schedule::DayCycle;
use loopcast::tuner::{event_queue, InputEvent, Tuner};

#[derive(Parser)]
#[command(name = "loopcast", about = "Always-on virtual television kiosk")]
struct Args {
    /// JSON manifest listing media files and their durations
    manifest: PathBuf,

    /// JSON config overriding the default installation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with a wired headset present
    #[arg(long)]
    headset: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => KioskConfig::from_path(path)?,
        None => KioskConfig::default(),
    };
    let catalog = ManifestCatalog::from_path(&args.manifest)?;
    let lineup = load_lineup(&catalog, now_millis());
    let mut tuner = Tuner::new(
        lineup,
        SimulatedPlayer::new(),
        ConsoleDevice::new(args.headset),
        config.clone(),
    );

    let (tx, rx) = event_queue();

    // Alarm thread: sleep until the next wake/sleep boundary, fire, repeat
    let cycle = DayCycle::new(config.wake_hour, config.sleep_hour);
    let alarm_tx = tx.clone();
    thread::spawn(move || loop {
        let now = chrono::Local::now().naive_local();
        let next = cycle.next_transition(now);
        let wait = (next - now).num_milliseconds().max(0) as u64;
        thread::sleep(Duration::from_millis(wait));
        if alarm_tx.send(InputEvent::AlarmTick).is_err() {
            break;
        }
    });

    // Key reader thread: each line is one button press
    let mut headset = args.headset;
    thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            if stdin.read_line(&mut line).unwrap_or(0) == 0 {
                let _ = tx.send(InputEvent::Quit);
                break;
            }
            let event = match line.trim() {
                "1" => InputEvent::SelectChannel(0),
                "2" => InputEvent::SelectChannel(1),
                "3" => InputEvent::SelectChannel(2),
                "h" => {
                    headset = !headset;
                    if headset {
                        InputEvent::HeadsetPlugged
                    } else {
                        InputEvent::HeadsetUnplugged
                    }
                }
                "s" => InputEvent::Sleep,
                "w" => InputEvent::Wake,
                "q" => InputEvent::Quit,
                _ => continue,
            };
            let quit = event == InputEvent::Quit;
            if tx.send(event).is_err() || quit {
                break;
            }
        }
    });

    println!("loopcast ready: 1-3 tune, h headset, s sleep, w wake, q quit");

    // Single consumer: events are handled strictly in arrival order
    for event in rx.iter() {
        // The console device has no hardware to ask, so plug events also
        // update its headset state before the tuner reads it
        match event {
            InputEvent::HeadsetPlugged => tuner.device_mut().set_headset(true),
            InputEvent::HeadsetUnplugged => tuner.device_mut().set_headset(false),
            _ => {}
        }
        let local = chrono::Local::now().naive_local();
        if !tuner.process(event, now_millis(), local) {
            break;
        }
    }

    Ok(())
}
