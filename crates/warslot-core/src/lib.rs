#![forbid(unsafe_code)]
//! warslot-core: slot pools, special-unit kinds, and the allocator that decides
//! whether one more hero, war engine, or monster can still be attached.
//!
//! Design:
//! - `types` holds the six-count input and the three-flag answer.
//! - `allocate` runs the greedy horde → large infantry → regiment simulation.
//! - `legality` is an opt-in exact check of the "already placed" invariant.
//!
//! NOTE: No IO or parsing lives here. Army-list documents are `warslot-army`.

pub mod allocate;
pub mod config;
pub mod error;
pub mod kind;
pub mod legality;
pub mod prelude;
pub mod types;

pub use allocate::{allocate, simulate, Allocation, KindUsage};
pub use config::{CheckConfig, OutputFormat};
pub use error::{Error, Result};
pub use kind::UnitKind;
pub use legality::check_legal;
pub use types::{CanAdd, SlotInput};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
