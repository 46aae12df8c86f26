// Initial widget settings: orientation, starting split, and draggability.
// Hosts may keep these in a JSON document next to their own configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use splitpane_core::{Orientation, SizeUnit};

use crate::PaneState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterSettings {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub splitter: SizeUnit,
    #[serde(default = "default_draggable")]
    pub draggable: bool,
}

fn default_draggable() -> bool {
    true
}

impl Default for SplitterSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            splitter: SizeUnit::default(),
            draggable: default_draggable(),
        }
    }
}

impl SplitterSettings {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Build the widget state these settings describe.
    pub fn into_state(self) -> PaneState {
        PaneState::init(self.orientation)
            .configure_splitter(self.splitter)
            .set_draggable(self.draggable)
    }
}

/// Read settings from `path`, falling back to defaults when the file is
/// missing or malformed.
pub fn load_settings(path: &Path) -> SplitterSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => match SplitterSettings::from_json(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                SplitterSettings::default()
            }
        },
        Err(e) => {
            log::debug!("No splitter settings at {}: {}", path.display(), e);
            SplitterSettings::default()
        }
    }
}
