//! Hash containers keyed by small, already well-distributed integers.

pub use rustc_hash::{FxHashMap as FastHashMap, FxHashSet as FastHashSet};
