//! The part hierarchy: identities, tree links, symmetry groups and the
//! strut attributes attached to every part.

pub mod graph;
pub mod node;
pub mod part;
pub mod tree;

impl_handle!(PartId);

pub mod prelude {
    pub use super::graph::{Ancestors, Assembly, Children, Descendants};
    pub use super::part::{Part, PartTemplate};
    pub use super::tree::{Applier, PartTree};
    pub use super::PartId;
}
