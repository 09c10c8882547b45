use std::iter;

use crate::errors::{Error, Result};
use crate::mode::StrutAttributes;
use crate::utils::prelude::{FastHashMap, FastHashSet, HandlePool};

use super::node::Node;
use super::part::{Part, PartTemplate};
use super::PartId;

/// The part hierarchy of the vessel under construction.
///
/// Parts live in flat tables addressed through `PartId`. The tree relationship
/// is kept in `Node` links, so walking upwards never borrows the parent, and
/// removing a part never has to untangle ownership cycles.
#[derive(Default)]
pub struct Assembly {
    handles: HandlePool<PartId>,
    remap: FastHashMap<PartId, usize>,
    ids: Vec<PartId>,
    nodes: Vec<Node>,
    parts: Vec<Part>,

    roots: FastHashSet<PartId>,
}

impl Assembly {
    pub fn new() -> Self {
        Assembly::default()
    }

    /// Gets the number of parts in this assembly.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checks if `part` was created by this assembly and has not been deleted yet.
    #[inline]
    pub fn contains(&self, part: PartId) -> bool {
        self.handles.contains(part) && self.remap.contains_key(&part)
    }

    /// Places a new, unparented part. Its prefab attributes are captured here.
    pub fn create(&mut self, template: PartTemplate) -> PartId {
        let part = self.handles.create();
        trace!("[Assembly] creates {} ({}).", part, template.name);

        self.remap.insert(part, self.ids.len());
        self.ids.push(part);
        self.nodes.push(Node::default());
        self.parts.push(Part::new(template));
        self.roots.insert(part);
        part
    }

    /// Removes a part and all of its descendants. Symmetry counterparts which
    /// survive forget about the removed parts.
    pub fn delete(&mut self, part: PartId) -> Option<Vec<PartId>> {
        if !self.contains(part) {
            return None;
        }

        self.remove_from_parent(part).ok()?;
        self.roots.remove(&part);

        let removes: Vec<_> = iter::once(part).chain(self.descendants(part)).collect();
        for &v in &removes {
            self.unlink_symmetry(v);
        }

        for &v in &removes {
            if let Some(index) = self.remap.remove(&v) {
                self.ids.swap_remove(index);
                self.nodes.swap_remove(index);
                self.parts.swap_remove(index);

                if self.ids.len() != index {
                    let moved = self.ids[index];
                    self.remap.insert(moved, index);
                }
            }

            self.handles.free(v);
        }

        Some(removes)
    }

    /// Returns the record of `part`.
    #[inline]
    pub fn part(&self, part: PartId) -> Option<&Part> {
        self.remap.get(&part).map(|&index| &self.parts[index])
    }

    #[inline]
    pub fn name(&self, part: PartId) -> Option<&str> {
        self.part(part).map(|v| v.name())
    }

    /// Returns the parts without parent.
    #[inline]
    pub fn roots(&self) -> impl Iterator<Item = PartId> + '_ {
        self.roots.iter().cloned()
    }

    #[inline]
    fn index(&self, part: PartId) -> Result<usize> {
        self.remap
            .get(&part)
            .cloned()
            .ok_or_else(|| Error::PartNotFound(part))
    }

    #[inline]
    fn node(&self, part: PartId) -> Option<&Node> {
        self.remap.get(&part).map(|&index| &self.nodes[index])
    }

    #[inline]
    fn node_mut(&mut self, part: PartId) -> Option<&mut Node> {
        match self.remap.get(&part) {
            Some(&index) => Some(&mut self.nodes[index]),
            None => None,
        }
    }

    pub(crate) fn set_live(&mut self, part: PartId, live: StrutAttributes) -> Result<()> {
        let index = self.index(part)?;
        self.parts[index].live = live;
        Ok(())
    }

    pub(crate) fn live_mut(&mut self, part: PartId) -> Result<&mut StrutAttributes> {
        let index = self.index(part)?;
        Ok(&mut self.parts[index].live)
    }
}

impl Assembly {
    /// Gets the parent part.
    #[inline]
    pub fn parent(&self, part: PartId) -> Option<PartId> {
        self.node(part).and_then(|v| v.parent)
    }

    /// Returns true if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, part: PartId) -> bool {
        self.node(part)
            .map(|v| v.first_child.is_none())
            .unwrap_or(false)
    }

    /// Returns true if this is the root of a hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self, part: PartId) -> bool {
        self.node(part).map(|v| v.parent.is_none()).unwrap_or(false)
    }

    /// Attaches `child` to `parent` as its last child, or detaches it if `parent`
    /// is `None`. The subtree below `child` moves along with it.
    pub fn set_parent<T>(&mut self, child: PartId, parent: T) -> Result<()>
    where
        T: Into<Option<PartId>>,
    {
        let child_index = self.index(child)?;
        let parent = parent.into();

        if let Some(parent) = parent {
            if parent == child {
                return Err(Error::CanNotAttachSelfAsParent);
            }

            self.index(parent)?;
            if self.is_ancestor(parent, child) {
                return Err(Error::CanNotAttachToDescendant(parent));
            }
        }

        self.remove_from_parent(child)?;

        if let Some(parent) = parent {
            match self.children(parent).last() {
                Some(last) => {
                    let last_index = self.index(last)?;
                    self.nodes[last_index].next_sib = Some(child);
                    self.nodes[child_index].prev_sib = Some(last);
                }
                None => {
                    let parent_index = self.index(parent)?;
                    self.nodes[parent_index].first_child = Some(child);
                }
            }

            self.nodes[child_index].parent = Some(parent);
            self.roots.remove(&child);
        }

        Ok(())
    }

    /// Detaches a part from its parent and siblings. Children are not affected.
    pub fn remove_from_parent(&mut self, child: PartId) -> Result<()> {
        let child_index = self.index(child)?;

        let (parent, next_sib, prev_sib) = {
            let node = &mut self.nodes[child_index];
            (
                node.parent.take(),
                node.next_sib.take(),
                node.prev_sib.take(),
            )
        };

        if let Some(next_sib) = next_sib {
            if let Some(node) = self.node_mut(next_sib) {
                node.prev_sib = prev_sib;
            }
        }

        if let Some(prev_sib) = prev_sib {
            if let Some(node) = self.node_mut(prev_sib) {
                node.next_sib = next_sib;
            }
        } else if let Some(parent) = parent {
            // The first child moves out, so its next sibling takes its place.
            if let Some(node) = self.node_mut(parent) {
                node.first_child = next_sib;
            }
        }

        self.roots.insert(child);
        Ok(())
    }

    /// Returns an iterator of its ancestors, nearest first.
    #[inline]
    pub fn ancestors(&self, part: PartId) -> Ancestors {
        Ancestors {
            cursor: self.parent(part),
            assembly: self,
        }
    }

    /// Returns true if `rhs` is one of the ancestors of `lhs`.
    #[inline]
    pub fn is_ancestor(&self, lhs: PartId, rhs: PartId) -> bool {
        self.ancestors(lhs).any(|v| v == rhs)
    }

    /// Returns an iterator of its children, in placement order.
    #[inline]
    pub fn children(&self, part: PartId) -> Children {
        Children {
            cursor: self.node(part).and_then(|v| v.first_child),
            assembly: self,
        }
    }

    /// Returns an iterator of its descendants, depth first and pre-order.
    #[inline]
    pub fn descendants(&self, part: PartId) -> Descendants {
        Descendants {
            root: part,
            cursor: self.node(part).and_then(|v| v.first_child),
            assembly: self,
        }
    }
}

impl Assembly {
    /// Makes `parts` one symmetry group. Every member sees all the others as
    /// counterparts; any group a member belonged to before is left first.
    pub fn link_symmetry(&mut self, parts: &[PartId]) -> Result<()> {
        for (i, &v) in parts.iter().enumerate() {
            self.index(v)?;
            if parts[..i].contains(&v) {
                return Err(Error::SymmetryWithSelf(v));
            }
        }

        for &v in parts {
            self.unlink_symmetry(v);
        }

        for &v in parts {
            let index = self.index(v)?;
            self.parts[index].symmetry = parts.iter().cloned().filter(|&w| w != v).collect();
        }

        Ok(())
    }

    /// Removes `part` from its symmetry group. The remaining counterparts stay
    /// grouped with each other.
    pub fn unlink_symmetry(&mut self, part: PartId) {
        let group = match self.remap.get(&part) {
            Some(&index) => ::std::mem::replace(&mut self.parts[index].symmetry, Default::default()),
            None => return,
        };

        for v in group {
            if let Some(&index) = self.remap.get(&v) {
                self.parts[index].symmetry.retain(|w| *w != part);
            }
        }
    }

    /// Returns the symmetry counterparts of `part`.
    #[inline]
    pub fn symmetry(&self, part: PartId) -> &[PartId] {
        self.part(part).map(|v| v.symmetry()).unwrap_or(&[])
    }
}

impl Assembly {
    /// Finds a part by name.
    ///
    /// If `path` contains '/' characters, it traverses the hierarchy like a path
    /// name, starting from one of the roots.
    pub fn find<N: AsRef<str>>(&self, path: N) -> Option<PartId> {
        let mut components = path
            .as_ref()
            .trim_start_matches('/')
            .split('/')
            .filter(|v| !v.is_empty());

        let first = components.next()?;
        let rest: Vec<_> = components.collect();

        self.roots
            .iter()
            .filter(|&&v| self.name(v) == Some(first))
            .filter_map(|&v| self.walk(v, &rest))
            .next()
    }

    /// Finds a part below `root` by a slash separated path of names.
    pub fn find_from<N: AsRef<str>>(&self, root: PartId, path: N) -> Option<PartId> {
        let components: Vec<_> = path.as_ref().split('/').filter(|v| !v.is_empty()).collect();
        self.walk(root, &components)
    }

    fn walk(&self, root: PartId, components: &[&str]) -> Option<PartId> {
        let mut iter = root;
        for &component in components {
            iter = self
                .children(iter)
                .find(|&child| self.name(child) == Some(component))?;
        }

        Some(iter)
    }
}

/// An iterator of its ancestors.
pub struct Ancestors<'a> {
    assembly: &'a Assembly,
    cursor: Option<PartId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = PartId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = self.assembly.parent(current);
        Some(current)
    }
}

/// An iterator of its children.
pub struct Children<'a> {
    assembly: &'a Assembly,
    cursor: Option<PartId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = PartId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = self.assembly.node(current).and_then(|v| v.next_sib);
        Some(current)
    }
}

/// An iterator of its descendants, in tree order.
pub struct Descendants<'a> {
    assembly: &'a Assembly,
    root: PartId,
    cursor: Option<PartId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = PartId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        let mut v = match self.assembly.node(current) {
            Some(node) => *node,
            None => {
                self.cursor = None;
                return Some(current);
            }
        };

        // Deep first.
        if v.first_child.is_some() {
            self.cursor = v.first_child;
            return Some(current);
        }

        if v.next_sib.is_some() {
            self.cursor = v.next_sib;
            return Some(current);
        }

        // Travel back when we reach a leaf.
        self.cursor = None;
        while let Some(parent) = v.parent {
            if parent == self.root {
                break;
            }

            v = match self.assembly.node(parent) {
                Some(node) => *node,
                None => break,
            };

            if v.next_sib.is_some() {
                self.cursor = v.next_sib;
                break;
            }
        }

        Some(current)
    }
}
