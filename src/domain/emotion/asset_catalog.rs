//! Closed catalog of static audio assets.

use serde::Serialize;

use super::music::{MusicTrack, AUDIO_PREFIX};

/// Sound effects played by the dissolve stages.
const SOUND_EFFECTS: &[&str] = &["fire_burning.wav", "dissolve.wav"];

/// Every audio asset the client may request.
///
/// Built once at startup and shared read-only; the set is closed, so there
/// is nothing to evict or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetCatalog {
    pub music: Vec<String>,
    pub effects: Vec<String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self {
            music: MusicTrack::ALL.iter().map(MusicTrack::public_path).collect(),
            effects: SOUND_EFFECTS
                .iter()
                .map(|name| format!("{}{}", AUDIO_PREFIX, name))
                .collect(),
        }
    }

    /// Whether `path` names a catalogued asset.
    pub fn contains(&self, path: &str) -> bool {
        self.music.iter().chain(&self.effects).any(|p| p == path)
    }

    /// All asset paths, music first.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.music.iter().chain(&self.effects).map(String::as_str)
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
