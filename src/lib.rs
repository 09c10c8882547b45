//! Keeps auto-strut assignments consistent while a vessel is assembled in an
//! editor.
//!
//! Whenever a part is attached, the propagation engine decides which part it
//! should rigidly strut to, writes that decision to the part, to its symmetry
//! counterparts and optionally to everything below it. Detaching a part rolls
//! those writes back to the attributes captured when the part was placed.
//!
//! ```
//! use autostrut::prelude::*;
//!
//! let mut assembly = Assembly::new();
//! let root = assembly.create(PartTemplate::new("pod"));
//! let tank = assembly.create(PartTemplate::new("tank"));
//! assembly.set_parent(tank, root).unwrap();
//!
//! let settings = Settings::default();
//! let inspector = Inspector::default();
//! Propagator::new(&settings, &inspector)
//!     .attach(&mut assembly, tank)
//!     .unwrap();
//!
//! assert_eq!(assembly.live(tank).unwrap().mode, AutoStrutMode::Root);
//! ```

#[macro_use]
extern crate log;

#[macro_use]
pub mod utils;

pub mod assembly;
pub mod errors;
pub mod inspector;
pub mod mode;
pub mod propagation;
pub mod resolver;
pub mod settings;

pub mod prelude {
    pub use super::assembly::prelude::*;
    pub use super::errors::{Error, Result};
    pub use super::inspector::{allows_assignment, Inspector, RoboticSignature};
    pub use super::mode::{AutoStrutMode, StrutAttributes};
    pub use super::propagation::Propagator;
    pub use super::resolver::resolve_default;
    pub use super::settings::Settings;
    pub use inlinable_string::InlinableString;
}
