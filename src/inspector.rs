//! Capability queries: may a part receive auto-struts at all, and does it hang
//! off an articulated joint which must be left alone.

use inlinable_string::InlinableString;
use regex::{Regex, RegexBuilder};

use crate::assembly::prelude::{PartId, PartTree};
use crate::errors::Result;

/// Module names of stock robotic servos and Infernal Robotics parts.
pub const DEFAULT_ROBOTIC_SIGNATURE: &str = "^ModuleRobotic(?:Rotation)?Servo|^MuMechToggle";

/// Returns true unless `part` is gone or exempt from auto-struts.
#[inline]
pub fn allows_assignment<T: PartTree + ?Sized>(tree: &T, part: PartId) -> bool {
    tree.contains(part) && tree.allows_auto_strut(part)
}

/// A case-insensitive pattern matched against the module names of a part.
#[derive(Debug, Clone)]
pub struct RoboticSignature {
    pattern: Regex,
}

impl RoboticSignature {
    pub fn new<T: AsRef<str>>(pattern: T) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern.as_ref())
            .case_insensitive(true)
            .build()?;

        Ok(RoboticSignature { pattern })
    }

    /// Returns true if any of `modules` matches this signature.
    pub fn is_match(&self, modules: &[InlinableString]) -> bool {
        modules.iter().any(|v| self.pattern.is_match(v.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RoboticSignature {
    fn default() -> Self {
        RoboticSignature::new(DEFAULT_ROBOTIC_SIGNATURE)
            .expect("the built-in robotic signature is a valid pattern")
    }
}

/// Answers capability queries about parts.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    signature: RoboticSignature,
}

impl Inspector {
    pub fn new(signature: RoboticSignature) -> Self {
        Inspector { signature }
    }

    #[inline]
    pub fn signature(&self) -> &RoboticSignature {
        &self.signature
    }

    /// Returns true if `part` itself, or any of its ancestors, carries a robotic
    /// joint module. Robotic parts are always excluded from auto-struts.
    pub fn is_robotic_hierarchy<T: PartTree + ?Sized>(&self, tree: &T, part: PartId) -> bool {
        let mut cursor = Some(part);
        while let Some(v) = cursor {
            if self.signature.is_match(tree.modules(v)) {
                return true;
            }

            cursor = tree.parent(v);
        }

        false
    }
}
