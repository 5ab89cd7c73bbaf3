//! Convenient re-exports for downstream crates.

pub use crate::allocate::{allocate, simulate, Allocation, KindUsage};
pub use crate::config::{CheckConfig, OutputFormat};
pub use crate::error::{Error, Result};
pub use crate::kind::UnitKind;
pub use crate::legality::check_legal;
pub use crate::types::{CanAdd, SlotInput};
