//! Special-unit kinds that compete for unlock slots.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Hero,
    WarEngine,
    /// Monsters and titans share one count.
    Monster,
}

impl UnitKind {
    /// All kinds, in the order they claim the shared regiment pool.
    pub const ALL: [UnitKind; 3] = [UnitKind::Hero, UnitKind::WarEngine, UnitKind::Monster];

    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Hero => "hero",
            UnitKind::WarEngine => "war engine",
            UnitKind::Monster => "monster",
        }
    }

    /// Field name of the matching flag in [`crate::CanAdd`] once serialized.
    pub const fn output_label(self) -> &'static str {
        match self {
            UnitKind::Hero => "canAddHero",
            UnitKind::WarEngine => "canAddWarEngine",
            UnitKind::Monster => "canAddMonster",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
