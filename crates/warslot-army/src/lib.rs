#![forbid(unsafe_code)]
//! warslot-army: army-list documents → slot counts → "can add" answers.
//!
//! Design:
//! - `dsl` parses YAML or JSON documents into an [`ArmyList`].
//! - `list` tallies unit entries into a `warslot_core::SlotInput` using the
//!   unlock rules (which unit types and sizes open which pool).
//! - The optional `config:` block of a document layers over the env config.

pub mod dsl;
pub mod error;
pub mod list;

pub use dsl::{load_army, parse_json_army, parse_yaml_army};
pub use error::{Error, Result};
pub use list::{ArmyConfig, ArmyList, Contribution, UnitEntry, UnitSize, UnitType};
