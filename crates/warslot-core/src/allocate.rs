//! Greedy slot allocator.
//!
//! Placed special units are replayed into the pools in a fixed priority order,
//! most restrictive first:
//!
//! 1. hordes (every kind may take up to `horde_count` of them),
//! 2. large infantry (every kind may take up to `large_inf_count`),
//! 3. regiments, one shared pool claimed hero → war engine → monster.
//!
//! From what is left over, each kind's "one more?" answer is read off. The
//! answer is an approximation bound to this exact replay order, not a general
//! bin-packing oracle: in particular stage 2 caps each kind at the slot count
//! while the headroom test compares against twice the slot count. That
//! asymmetry and the regiment claim order both show up in answers.

use serde::{Deserialize, Serialize};

use crate::kind::UnitKind;
use crate::types::{CanAdd, SlotInput};

/// Slots one kind consumed during the replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindUsage {
    pub horde: u32,
    pub large_inf: u32,
    pub regiment: u32,
    /// Units that found no slot. Non-zero only for inconsistent input.
    pub unseated: u32,
}

/// Full result of the replay: per-kind consumption plus the two headroom flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub input: SlotInput,
    pub hero: KindUsage,
    pub war_engine: KindUsage,
    pub monster: KindUsage,
    /// Large-infantry consumption is below the doubled capacity.
    pub has_unused_large_inf_slots: bool,
    /// At least one regiment is still empty.
    pub has_unused_regiment_slots: bool,
}

impl Allocation {
    pub fn usage(&self, kind: UnitKind) -> &KindUsage {
        match kind {
            UnitKind::Hero => &self.hero,
            UnitKind::WarEngine => &self.war_engine,
            UnitKind::Monster => &self.monster,
        }
    }

    /// Can one more unit of `kind` be attached?
    pub fn can_add_kind(&self, kind: UnitKind) -> bool {
        let used = self.usage(kind);
        used.horde < self.input.horde_count
            || (used.large_inf < self.input.large_inf_count && self.has_unused_large_inf_slots)
            || self.has_unused_regiment_slots
    }

    pub fn can_add(&self) -> CanAdd {
        let mut out = CanAdd::NONE;
        for kind in UnitKind::ALL {
            out.set(kind, self.can_add_kind(kind));
        }
        out
    }

    pub fn large_inf_used(&self) -> u64 {
        UnitKind::ALL
            .iter()
            .map(|&k| u64::from(self.usage(k).large_inf))
            .sum()
    }

    pub fn regiment_used(&self) -> u64 {
        UnitKind::ALL
            .iter()
            .map(|&k| u64::from(self.usage(k).regiment))
            .sum()
    }

    /// Units the replay could not seat. Zero for consistent input.
    pub fn unseated(&self) -> u64 {
        UnitKind::ALL
            .iter()
            .map(|&k| u64::from(self.usage(k).unseated))
            .sum()
    }
}

/// Replay the placed units into the pools and record what each kind consumed.
pub fn simulate(input: &SlotInput) -> Allocation {
    let mut regiments_left = input.regiment_count;
    let mut usage = [KindUsage::default(); 3];

    for (slot, kind) in usage.iter_mut().zip(UnitKind::ALL) {
        let placed = input.placed(kind);

        let horde = placed.min(input.horde_count);
        let mut remaining = placed - horde;

        // Capped by slot count, not twice the slot count.
        let large_inf = remaining.min(input.large_inf_count);
        remaining -= large_inf;

        let regiment = remaining.min(regiments_left);
        regiments_left -= regiment;

        *slot = KindUsage {
            horde,
            large_inf,
            regiment,
            unseated: remaining - regiment,
        };
    }

    let [hero, war_engine, monster] = usage;
    let mut alloc = Allocation {
        input: *input,
        hero,
        war_engine,
        monster,
        has_unused_large_inf_slots: false,
        has_unused_regiment_slots: false,
    };
    alloc.has_unused_large_inf_slots =
        alloc.large_inf_used() < u64::from(input.large_inf_count) * 2;
    alloc.has_unused_regiment_slots = alloc.regiment_used() < u64::from(input.regiment_count);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        ?input,
        large_inf_used = alloc.large_inf_used(),
        regiment_used = alloc.regiment_used(),
        unseated = alloc.unseated(),
        "simulated slot allocation"
    );

    alloc
}

/// Decide, per kind, whether one more special unit can be attached.
///
/// Pure and total: any input yields an answer without panicking. When the
/// placed counts could not have been seated in the first place the answer is
/// unspecified; run [`crate::check_legal`] first if that matters.
pub fn allocate(input: &SlotInput) -> CanAdd {
    simulate(input).can_add()
}
