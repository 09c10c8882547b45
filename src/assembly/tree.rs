//! The seams between the propagation engine and the host's part hierarchy.

use inlinable_string::InlinableString;

use crate::errors::Result;
use crate::mode::{AutoStrutMode, StrutAttributes};

use super::graph::Assembly;
use super::PartId;

/// Read-only queries the propagation engine needs about parts.
///
/// Every query answers "nothing" for a part that no longer exists, so a stale
/// id simply ends the walk along that branch.
pub trait PartTree {
    fn contains(&self, part: PartId) -> bool;
    fn parent(&self, part: PartId) -> Option<PartId>;
    /// Children in placement order.
    fn children_of(&self, part: PartId) -> Vec<PartId>;
    fn counterparts(&self, part: PartId) -> Vec<PartId>;
    fn modules(&self, part: PartId) -> &[InlinableString];
    fn allows_auto_strut(&self, part: PartId) -> bool;
    fn prefab(&self, part: PartId) -> Option<StrutAttributes>;
    fn live(&self, part: PartId) -> Option<StrutAttributes>;
}

/// Mutates the live strut attributes of a part.
pub trait Applier {
    fn set_mode(&mut self, part: PartId, mode: AutoStrutMode) -> Result<()>;
    fn set_rigid_attachment(&mut self, part: PartId, rigid: bool) -> Result<()>;
    fn set_same_vessel_collision(&mut self, part: PartId, collision: bool) -> Result<()>;

    /// Writes all three attributes at once.
    fn apply(&mut self, part: PartId, attributes: StrutAttributes) -> Result<()> {
        self.set_mode(part, attributes.mode)?;
        self.set_rigid_attachment(part, attributes.rigid_attachment)?;
        self.set_same_vessel_collision(part, attributes.same_vessel_collision)
    }
}

impl PartTree for Assembly {
    #[inline]
    fn contains(&self, part: PartId) -> bool {
        Assembly::contains(self, part)
    }

    #[inline]
    fn parent(&self, part: PartId) -> Option<PartId> {
        Assembly::parent(self, part)
    }

    #[inline]
    fn children_of(&self, part: PartId) -> Vec<PartId> {
        self.children(part).collect()
    }

    #[inline]
    fn counterparts(&self, part: PartId) -> Vec<PartId> {
        self.symmetry(part).to_vec()
    }

    #[inline]
    fn modules(&self, part: PartId) -> &[InlinableString] {
        self.part(part).map(|v| v.modules()).unwrap_or(&[])
    }

    #[inline]
    fn allows_auto_strut(&self, part: PartId) -> bool {
        self.part(part).map(|v| v.allows_auto_strut()).unwrap_or(false)
    }

    #[inline]
    fn prefab(&self, part: PartId) -> Option<StrutAttributes> {
        self.part(part).map(|v| v.prefab())
    }

    #[inline]
    fn live(&self, part: PartId) -> Option<StrutAttributes> {
        self.part(part).map(|v| v.live())
    }
}

impl Applier for Assembly {
    fn set_mode(&mut self, part: PartId, mode: AutoStrutMode) -> Result<()> {
        self.live_mut(part)?.mode = mode;
        Ok(())
    }

    fn set_rigid_attachment(&mut self, part: PartId, rigid: bool) -> Result<()> {
        self.live_mut(part)?.rigid_attachment = rigid;
        Ok(())
    }

    fn set_same_vessel_collision(&mut self, part: PartId, collision: bool) -> Result<()> {
        self.live_mut(part)?.same_vessel_collision = collision;
        Ok(())
    }

    fn apply(&mut self, part: PartId, attributes: StrutAttributes) -> Result<()> {
        self.set_live(part, attributes)
    }
}
