//! Allocator input (slot pools + placed special units) and output (three flags).
//!
//! Field names serialize in camelCase (`hordeCount`, `canAddHero`, ...) so the
//! JSON shape matches what army-builder front ends already exchange.

use serde::{Deserialize, Serialize};

use crate::kind::UnitKind;

/// Slot pools available in an army and the special units already placed in them.
///
/// Counts are unsigned, so "negative" input cannot be expressed. Consistency
/// between the placed counts and the pools is *not* enforced here; see
/// [`crate::check_legal`] for the opt-in check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotInput {
    /// Infantry and heavy infantry hordes. Each unlocks one unit of every kind.
    pub horde_count: u32,
    /// Large infantry, monstrous infantry, and large cavalry hordes.
    /// Each seats two special units, no more than one per kind.
    pub large_inf_count: u32,
    /// Infantry and heavy infantry regiments. Each seats one special unit of any kind.
    pub regiment_count: u32,
    pub hero_count: u32,
    pub war_engine_count: u32,
    /// Monsters and titans.
    pub monster_count: u32,
}

impl SlotInput {
    pub const fn new(horde_count: u32, large_inf_count: u32, regiment_count: u32) -> Self {
        Self {
            horde_count,
            large_inf_count,
            regiment_count,
            hero_count: 0,
            war_engine_count: 0,
            monster_count: 0,
        }
    }

    /// Builder-style setter for the placed count of `kind`.
    pub fn with_placed(mut self, kind: UnitKind, count: u32) -> Self {
        match kind {
            UnitKind::Hero => self.hero_count = count,
            UnitKind::WarEngine => self.war_engine_count = count,
            UnitKind::Monster => self.monster_count = count,
        }
        self
    }

    pub const fn placed(&self, kind: UnitKind) -> u32 {
        match kind {
            UnitKind::Hero => self.hero_count,
            UnitKind::WarEngine => self.war_engine_count,
            UnitKind::Monster => self.monster_count,
        }
    }

    /// Total special units placed, widened so it cannot overflow.
    pub fn total_placed(&self) -> u64 {
        UnitKind::ALL
            .iter()
            .map(|&k| u64::from(self.placed(k)))
            .sum()
    }

    /// Same pools, one more unit of `kind`.
    pub fn plus_one(&self, kind: UnitKind) -> Self {
        self.with_placed(kind, self.placed(kind).saturating_add(1))
    }

    /// True when at least one pool has a slot, regardless of occupancy.
    pub fn has_any_slots(&self) -> bool {
        self.horde_count > 0 || self.large_inf_count > 0 || self.regiment_count > 0
    }
}

/// Whether one more unit of each kind can be attached, holding the others fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanAdd {
    pub can_add_hero: bool,
    pub can_add_war_engine: bool,
    pub can_add_monster: bool,
}

impl CanAdd {
    pub const NONE: CanAdd = CanAdd {
        can_add_hero: false,
        can_add_war_engine: false,
        can_add_monster: false,
    };

    pub const ALL: CanAdd = CanAdd {
        can_add_hero: true,
        can_add_war_engine: true,
        can_add_monster: true,
    };

    pub const fn get(&self, kind: UnitKind) -> bool {
        match kind {
            UnitKind::Hero => self.can_add_hero,
            UnitKind::WarEngine => self.can_add_war_engine,
            UnitKind::Monster => self.can_add_monster,
        }
    }

    pub fn set(&mut self, kind: UnitKind, value: bool) {
        match kind {
            UnitKind::Hero => self.can_add_hero = value,
            UnitKind::WarEngine => self.can_add_war_engine = value,
            UnitKind::Monster => self.can_add_monster = value,
        }
    }

    /// `(kind, flag)` pairs in [`UnitKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitKind, bool)> + '_ {
        UnitKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}
