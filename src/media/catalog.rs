//! Media catalog: where channel content comes from.
//!
//! Enumeration and metadata extraction happen outside the core; a catalog
//! only has to hand over ordered clips per channel slot. `ManifestCatalog`
//! is the bundled implementation: a JSON list of file names and durations,
//! routed into channel slots by file-name prefix the same way the kiosk
//! sorts its video folder.

use crate::core::clip::Clip;
use crate::core::lineup::{Lineup, CHANNEL_COUNT};
use crate::core::time::{Millis, Timestamp};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies ordered clips per channel slot.
///
/// Insertion order is broadcast order; the scheduler relies on it.
pub trait MediaCatalog {
    fn channel_count(&self) -> usize;

    /// Ordered clips (with durations) for one channel slot
    fn clips_for_channel(&self, slot: usize) -> Vec<Clip>;
}

/// One manifest line: a media file and its duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    pub duration_ms: Millis,
}

/// Channel slot for a file name, by prefix.
///
/// `ad_` spots land on the first channel, `do_`/`mu_` features on the
/// second, `us_` house footage on the third. Anything else is not broadcast
/// material.
pub fn slot_for_file(name: &str) -> Option<usize> {
    match name.get(..3)? {
        "ad_" => Some(0),
        "do_" | "mu_" => Some(1),
        "us_" => Some(2),
        _ => None,
    }
}

/// Manifest-backed catalog.
pub struct ManifestCatalog {
    slots: Vec<Vec<Clip>>,
}

impl ManifestCatalog {
    /// Build the catalog from manifest entries, in order
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        let mut slots: Vec<Vec<Clip>> = vec![Vec::new(); CHANNEL_COUNT];
        let mut next_id = 0u64;
        for entry in entries {
            match slot_for_file(&entry.file) {
                Some(slot) => {
                    slots[slot].push(Clip::new(next_id, entry.file, entry.duration_ms));
                    next_id += 1;
                }
                None => {
                    debug!(file = %entry.file, "no channel prefix, skipped");
                }
            }
        }
        Self { slots }
    }

    /// Parse a JSON manifest: an array of `{"file", "duration_ms"}` objects
    pub fn from_str(text: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(text)?;
        Ok(Self::new(entries))
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text)
    }
}

impl MediaCatalog for ManifestCatalog {
    fn channel_count(&self) -> usize {
        self.slots.len()
    }

    fn clips_for_channel(&self, slot: usize) -> Vec<Clip> {
        self.slots[slot].clone()
    }
}

/// Build a lineup from a catalog, with the virtual clock starting at `epoch`
pub fn load_lineup<C: MediaCatalog>(catalog: &C, epoch: Timestamp) -> Lineup {
    let mut lineup = Lineup::standard(epoch);
    for slot in 0..catalog.channel_count().min(lineup.len()) {
        let clips = catalog.clips_for_channel(slot);
        if clips.is_empty() {
            continue;
        }
        let durations = clips.iter().map(|c| c.duration).collect();
        lineup.load_channel(slot, clips, durations);
    }
    lineup
}
