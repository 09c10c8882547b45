use std::path::Path;

use autostrut::prelude::*;

use crate::event::PartEvent;
use crate::store::SettingsStore;

/// An editing session: the vessel under construction together with the
/// settings that steer auto-strut propagation.
///
/// `on_part_event` is the boundary towards the host. It never fails; whatever
/// goes wrong while propagating gets logged and swallowed there, so a broken
/// part can never take the host's event dispatch down with it.
pub struct Editor<T: PartTree + Applier = Assembly> {
    tree: T,
    store: SettingsStore,
    inspector: Inspector,
}

impl<T: PartTree + Applier> Editor<T> {
    pub fn new(tree: T, store: SettingsStore) -> Self {
        Editor {
            tree,
            store,
            inspector: Inspector::default(),
        }
    }

    /// Replaces the inspector, e.g. to recognize additional robotic modules.
    pub fn with_inspector(mut self, inspector: Inspector) -> Self {
        self.inspector = inspector;
        self
    }

    #[inline]
    pub fn tree(&self) -> &T {
        &self.tree
    }

    #[inline]
    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut Settings {
        self.store.settings_mut()
    }

    #[inline]
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut SettingsStore {
        &mut self.store
    }

    /// Handles a construction event and reports failures to the caller.
    pub fn try_on_part_event<E>(&mut self, event: E, part: PartId) -> Result<()>
    where
        E: Into<PartEvent>,
    {
        let propagator = Propagator::new(self.store.settings(), &self.inspector);

        match event.into() {
            PartEvent::Attached => propagator.attach(&mut self.tree, part),
            PartEvent::Detached => propagator.detach(&mut self.tree, part),
            PartEvent::Other => Ok(()),
        }
    }

    /// Handles a construction event. Failures are logged and suppressed.
    pub fn on_part_event<E>(&mut self, event: E, part: PartId)
    where
        E: Into<PartEvent>,
    {
        if let Err(err) = self.try_on_part_event(event, part) {
            warn!("[Editor] {}", err);
        }
    }

    /// Ends the session, writing the settings back to their file.
    pub fn shutdown(self) -> Result<()> {
        self.store.save()
    }
}

impl Editor<Assembly> {
    /// Opens a session on an empty assembly, loading settings from `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Editor::new(Assembly::new(), SettingsStore::load(path))
    }

    /// Places a new part, attaching it to `parent` if there is one.
    pub fn place<P>(&mut self, template: PartTemplate, parent: P) -> Result<PartId>
    where
        P: Into<Option<PartId>>,
    {
        let part = self.tree.create(template);
        if let Some(parent) = parent.into() {
            self.attach(part, parent)?;
        }

        Ok(part)
    }

    /// Places one copy of `template` below each of `parents`, all copies forming
    /// a single symmetry group.
    pub fn place_symmetric(&mut self, template: PartTemplate, parents: &[PartId]) -> Result<Vec<PartId>> {
        let mut parts = Vec::with_capacity(parents.len());
        for &parent in parents {
            let part = self.tree.create(template.clone());
            self.tree.set_parent(part, parent)?;
            parts.push(part);
        }

        self.tree.link_symmetry(&parts)?;
        for &part in &parts {
            self.on_part_event(PartEvent::Attached, part);
        }

        Ok(parts)
    }

    /// Attaches `part` below `parent` and lets the engine assign its struts.
    pub fn attach(&mut self, part: PartId, parent: PartId) -> Result<()> {
        self.tree.set_parent(part, parent)?;
        self.on_part_event(PartEvent::Attached, part);
        Ok(())
    }

    /// Detaches `part` from its parent and reverts it to its prefab attributes.
    pub fn detach(&mut self, part: PartId) -> Result<()> {
        self.tree.remove_from_parent(part)?;
        self.on_part_event(PartEvent::Detached, part);
        Ok(())
    }

    /// Removes `part` and everything below it from the vessel.
    pub fn delete(&mut self, part: PartId) -> Option<Vec<PartId>> {
        self.tree.delete(part)
    }
}
