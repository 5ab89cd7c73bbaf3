#![forbid(unsafe_code)]
//! warslot: special-unit slot checks for army lists.
//!
//! Facade over the workspace crates; see `warslot-core` for the allocator and
//! `warslot-army` for army-list documents.

pub use warslot_army as army;
pub use warslot_core::prelude;
pub use warslot_core::{allocate, check_legal, simulate, CanAdd, SlotInput, UnitKind};
