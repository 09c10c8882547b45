use super::PartId;

/// `Node` records where a part sits in the assembly tree.
///
/// Links are `PartId`s resolved through the arena, never references. A child
/// does not own its parent, and siblings form a doubly linked list in
/// placement order.
#[derive(Default, Debug, Clone, Copy)]
pub struct Node {
    pub parent: Option<PartId>,
    pub next_sib: Option<PartId>,
    pub prev_sib: Option<PartId>,
    pub first_child: Option<PartId>,
}
