//! Auto-strut modes and the attribute triple the propagation engine writes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part, if any, a part rigidly anchors itself to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoStrutMode {
    /// No auto-strut.
    Off,
    /// Strut to the root part of the vessel.
    Root,
    /// Strut to the heaviest part of the vessel. Only reachable by manual choice.
    Heaviest,
    /// Strut to the parent of the parent part.
    Grandparent,
}

impl Default for AutoStrutMode {
    fn default() -> Self {
        AutoStrutMode::Off
    }
}

impl fmt::Display for AutoStrutMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            AutoStrutMode::Off => "Off",
            AutoStrutMode::Root => "Root",
            AutoStrutMode::Heaviest => "Heaviest",
            AutoStrutMode::Grandparent => "Grandparent",
        };

        f.write_str(name)
    }
}

/// The strut-related attributes of a part.
///
/// Every part carries two of these: the prefab default captured at creation,
/// and the live value the engine mutates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrutAttributes {
    pub mode: AutoStrutMode,
    pub rigid_attachment: bool,
    pub same_vessel_collision: bool,
}

impl StrutAttributes {
    pub fn new(mode: AutoStrutMode, rigid_attachment: bool, same_vessel_collision: bool) -> Self {
        StrutAttributes {
            mode,
            rigid_attachment,
            same_vessel_collision,
        }
    }
}
