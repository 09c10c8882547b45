use crate::assembly::prelude::{PartId, PartTree};
use crate::mode::AutoStrutMode;

/// Picks the auto-strut mode a part gets from its position in the tree.
///
/// Root parts get `Off`, direct children of a root strut to it, and everything
/// deeper struts to its grandparent. `Heaviest` is never chosen here.
pub fn resolve_default<T: PartTree + ?Sized>(tree: &T, part: PartId) -> AutoStrutMode {
    match tree.parent(part) {
        None => AutoStrutMode::Off,
        Some(parent) => match tree.parent(parent) {
            None => AutoStrutMode::Root,
            Some(_) => AutoStrutMode::Grandparent,
        },
    }
}
