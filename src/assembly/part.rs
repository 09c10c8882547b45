use inlinable_string::InlinableString;
use smallvec::SmallVec;

use crate::mode::StrutAttributes;

use super::PartId;

/// Describes a part about to be placed. The `prefab` attributes are captured
/// once when the part is created and never change afterwards.
#[derive(Debug, Clone)]
pub struct PartTemplate {
    pub name: InlinableString,
    /// Names of the modules this part carries, e.g. `ModuleRoboticServoHinge`.
    pub modules: Vec<InlinableString>,
    /// False for parts which are exempt from auto-struts, like fixed structural elements.
    pub allows_auto_strut: bool,
    pub prefab: StrutAttributes,
}

impl PartTemplate {
    pub fn new<T: AsRef<str>>(name: T) -> Self {
        PartTemplate {
            name: name.as_ref().into(),
            modules: Vec::new(),
            allows_auto_strut: true,
            prefab: StrutAttributes::default(),
        }
    }

    /// Adds a module to this template.
    pub fn with_module<T: AsRef<str>>(mut self, module: T) -> Self {
        self.modules.push(module.as_ref().into());
        self
    }

    pub fn with_prefab(mut self, prefab: StrutAttributes) -> Self {
        self.prefab = prefab;
        self
    }

    pub fn exempt(mut self) -> Self {
        self.allows_auto_strut = false;
        self
    }
}

/// The per-part record kept by `Assembly`.
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) name: InlinableString,
    pub(crate) modules: Vec<InlinableString>,
    pub(crate) allows_auto_strut: bool,
    pub(crate) prefab: StrutAttributes,
    pub(crate) live: StrutAttributes,
    pub(crate) symmetry: SmallVec<[PartId; 4]>,
}

impl Part {
    pub(crate) fn new(template: PartTemplate) -> Self {
        Part {
            name: template.name,
            modules: template.modules,
            allows_auto_strut: template.allows_auto_strut,
            prefab: template.prefab,
            live: template.prefab,
            symmetry: SmallVec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    #[inline]
    pub fn modules(&self) -> &[InlinableString] {
        &self.modules
    }

    #[inline]
    pub fn allows_auto_strut(&self) -> bool {
        self.allows_auto_strut
    }

    /// The attributes captured when this part was placed.
    #[inline]
    pub fn prefab(&self) -> StrutAttributes {
        self.prefab
    }

    #[inline]
    pub fn live(&self) -> StrutAttributes {
        self.live
    }

    /// The counterparts placed together with this part by a symmetry action.
    #[inline]
    pub fn symmetry(&self) -> &[PartId] {
        &self.symmetry
    }
}
