//! Exact check that the placed special units fit the pools at all.
//!
//! The allocator assumes this and never verifies it. Callers that take counts
//! from users (the CLI, army-list files) can run it first when strict.
//!
//! Hordes are per kind, so each kind takes `min(placed, hordes)` of them. Of the
//! rest, large infantry seats at most `large_inf` per kind and `2 * large_inf`
//! overall; any split within those bounds can be paired into slots. Whatever
//! remains must fit in the regiments.

use crate::error::{Error, Result};
use crate::kind::UnitKind;
use crate::types::SlotInput;

/// Largest number of the placed special units any assignment can seat.
pub fn max_seated(input: &SlotInput) -> u64 {
    let hordes = u64::from(input.horde_count);
    let large_inf = u64::from(input.large_inf_count);

    let mut in_hordes = 0u64;
    let mut rest = 0u64;
    let mut large_inf_wanted = 0u64;
    for kind in UnitKind::ALL {
        let placed = u64::from(input.placed(kind));
        let horde = placed.min(hordes);
        in_hordes += horde;
        rest += placed - horde;
        large_inf_wanted += (placed - horde).min(large_inf);
    }

    let in_large_inf = large_inf_wanted.min(large_inf * 2);
    let in_regiments = (rest - in_large_inf).min(u64::from(input.regiment_count));
    in_hordes + in_large_inf + in_regiments
}

/// Verify the placed counts could have come from a legal army.
pub fn check_legal(input: &SlotInput) -> Result<()> {
    let placed = input.total_placed();
    let fits = max_seated(input);
    if fits < placed {
        #[cfg(feature = "tracing")]
        tracing::debug!(?input, placed, fits, "placed special units exceed slots");
        return Err(Error::IllegalArmy { placed, fits });
    }
    Ok(())
}

impl SlotInput {
    pub fn is_legal(&self) -> bool {
        check_legal(self).is_ok()
    }
}
