//! Propagates auto-strut attributes through the part hierarchy whenever a part
//! is attached or detached.
//!
//! A pass is a pure function of the current tree and the settings handed in,
//! so running it again, or from a nested notification fired while another pass
//! is in flight, converges on the same attributes.

use crate::assembly::prelude::{Applier, PartId, PartTree};
use crate::errors::Result;
use crate::inspector::{self, Inspector};
use crate::mode::{AutoStrutMode, StrutAttributes};
use crate::resolver::resolve_default;
use crate::settings::Settings;
use crate::utils::prelude::FastHashSet;

/// Runs attach and detach passes with a borrowed configuration.
pub struct Propagator<'a> {
    settings: &'a Settings,
    inspector: &'a Inspector,
}

impl<'a> Propagator<'a> {
    pub fn new(settings: &'a Settings, inspector: &'a Inspector) -> Self {
        Propagator {
            settings,
            inspector,
        }
    }

    /// Assigns auto-struts to a freshly attached part, its symmetry counterparts
    /// and, if `apply_children` is set, everything below it.
    ///
    /// Parts which already carry a mode other than `Off` are left untouched,
    /// unless they sit on a robotic joint: those are always forced to `Off`.
    pub fn attach<T>(&self, tree: &mut T, part: PartId) -> Result<()>
    where
        T: PartTree + Applier + ?Sized,
    {
        let settings = self.settings;
        if !settings.enabled {
            return Ok(());
        }

        if !tree.contains(part) {
            debug!("[Propagation] {} is gone, ignoring attach.", part);
            return Ok(());
        }

        if !inspector::allows_assignment(&*tree, part) {
            debug!("[Propagation] {} does not allow auto-struts.", part);
            return Ok(());
        }

        let robotic = self.inspector.is_robotic_hierarchy(&*tree, part);
        if !robotic {
            if let Some(live) = tree.live(part) {
                if live.mode != AutoStrutMode::Off {
                    debug!("[Propagation] {} already struts to {}.", part, live.mode);
                    return Ok(());
                }
            }
        }

        let same_vessel_collision = settings.same_vessel_interaction
            || (robotic && settings.automatic_same_vessel_interaction);

        trace!("[Propagation] attaches {} (robotic: {}).", part, robotic);
        self.walk(tree, part, |tree, v| {
            let mode = if robotic {
                AutoStrutMode::Off
            } else if settings.auto_select {
                resolve_default(tree, v)
            } else {
                settings.mode
            };

            Some(StrutAttributes::new(
                mode,
                settings.rigid_attachment,
                same_vessel_collision,
            ))
        })
    }

    /// Reverts a detached part to its prefab attributes. Counterparts receive
    /// the same attributes, descendants revert to their own prefabs.
    pub fn detach<T>(&self, tree: &mut T, part: PartId) -> Result<()>
    where
        T: PartTree + Applier + ?Sized,
    {
        if !tree.contains(part) {
            debug!("[Propagation] {} is gone, ignoring detach.", part);
            return Ok(());
        }

        trace!("[Propagation] detaches {}.", part);
        self.walk(tree, part, |tree, v| tree.prefab(v))
    }

    /// Walks from `part` with an explicit stack, depth first and pre-order.
    ///
    /// Each part is written at most once, either as a visited part or as the
    /// counterpart of one, and expanded at most once. A failing write ends the
    /// walk below that part only; the first failure is reported after the
    /// stack drains.
    fn walk<T, F>(&self, tree: &mut T, part: PartId, resolve: F) -> Result<()>
    where
        T: PartTree + Applier + ?Sized,
        F: Fn(&T, PartId) -> Option<StrutAttributes>,
    {
        let mut written = FastHashSet::default();
        let mut expanded = FastHashSet::default();
        let mut stack = vec![part];
        let mut failure = None;

        while let Some(v) = stack.pop() {
            if !tree.contains(v) || !expanded.insert(v) {
                continue;
            }

            let counterparts = tree.counterparts(v);
            if written.insert(v) {
                let attributes = match resolve(&*tree, v) {
                    Some(attributes) => attributes,
                    None => continue,
                };

                if let Err(err) = tree.apply(v, attributes) {
                    debug!("[Propagation] stops below {}: {}", v, err);
                    failure.get_or_insert(err);
                    continue;
                }

                for &c in &counterparts {
                    if !tree.contains(c) || !written.insert(c) {
                        continue;
                    }

                    if let Err(err) = tree.apply(c, attributes) {
                        debug!("[Propagation] stops below {}: {}", c, err);
                        expanded.insert(c);
                        failure.get_or_insert(err);
                    }
                }
            }

            if !self.settings.apply_children {
                continue;
            }

            // Counterparts sit below our own children on the stack, so they
            // expand after this subtree is done.
            if self.settings.propagate_symmetry_descendants {
                stack.extend(counterparts.iter().rev().cloned());
            }

            stack.extend(tree.children_of(v).into_iter().rev());
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
