//! User settings which steer every propagation pass.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::mode::AutoStrutMode;

/// Global auto-strut settings.
///
/// Passed by reference into each propagation pass and never mutated by it.
/// Fields missing from a persisted record fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch. Attach notifications are ignored while this is off.
    pub enabled: bool,
    /// Mode applied when `auto_select` is off.
    pub mode: AutoStrutMode,
    /// Derive the mode from the position of the part in the tree.
    pub auto_select: bool,
    /// Walk the subtree below the triggering part as well.
    pub apply_children: bool,
    pub rigid_attachment: bool,
    /// Always enable same-vessel collisions on assigned parts.
    pub same_vessel_interaction: bool,
    /// Enable same-vessel collisions on robotic parts.
    pub automatic_same_vessel_interaction: bool,
    /// Walk the subtrees below symmetry counterparts too, not only below the
    /// triggering part.
    pub propagate_symmetry_descendants: bool,
    pub window_x: f32,
    pub window_y: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            enabled: true,
            mode: AutoStrutMode::Off,
            auto_select: true,
            apply_children: false,
            rigid_attachment: false,
            same_vessel_interaction: false,
            automatic_same_vessel_interaction: false,
            propagate_symmetry_descendants: false,
            window_x: 0.5,
            window_y: 0.5,
        }
    }
}

impl Settings {
    /// Parses settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings into pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
