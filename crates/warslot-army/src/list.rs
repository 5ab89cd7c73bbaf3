//! Army-list model and the tally into slot counts.
//!
//! Unlock rules:
//! - infantry / heavy infantry hordes → horde pool
//! - large infantry / monstrous infantry / large cavalry hordes → large-infantry pool
//! - infantry / heavy infantry regiments → regiment pool
//! - heroes, war engines, monsters and titans → the placed counts
//!
//! Everything else (troops, legions, cavalry, swarms, chariots, ...) unlocks nothing.

use serde::{Deserialize, Serialize};

use warslot_core::{CanAdd, CheckConfig, OutputFormat, SlotInput, UnitKind};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Infantry,
    HeavyInfantry,
    LargeInfantry,
    MonstrousInfantry,
    LargeCavalry,
    Cavalry,
    Swarm,
    Chariot,
    WarEngine,
    Hero,
    Monster,
    Titan,
}

impl UnitType {
    /// Types whose contribution depends on the unit size.
    pub fn needs_size(self) -> bool {
        matches!(
            self,
            UnitType::Infantry
                | UnitType::HeavyInfantry
                | UnitType::LargeInfantry
                | UnitType::MonstrousInfantry
                | UnitType::LargeCavalry
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSize {
    Troop,
    Regiment,
    Horde,
    Legion,
}

/// What one unit entry adds to a [`SlotInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    Horde,
    LargeInf,
    Regiment,
    Special(UnitKind),
    Nothing,
}

impl Contribution {
    pub fn of(unit_type: UnitType, size: Option<UnitSize>) -> Self {
        use UnitType as T;
        match (unit_type, size) {
            (T::Infantry | T::HeavyInfantry, Some(UnitSize::Horde)) => Contribution::Horde,
            (T::Infantry | T::HeavyInfantry, Some(UnitSize::Regiment)) => Contribution::Regiment,
            (
                T::LargeInfantry | T::MonstrousInfantry | T::LargeCavalry,
                Some(UnitSize::Horde),
            ) => Contribution::LargeInf,
            (T::Hero, _) => Contribution::Special(UnitKind::Hero),
            (T::WarEngine, _) => Contribution::Special(UnitKind::WarEngine),
            (T::Monster | T::Titan, _) => Contribution::Special(UnitKind::Monster),
            _ => Contribution::Nothing,
        }
    }
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    #[serde(default)]
    pub size: Option<UnitSize>,
    #[serde(default = "one")]
    pub count: u32,
}

impl UnitEntry {
    pub fn new(unit_type: UnitType, size: Option<UnitSize>) -> Self {
        Self {
            name: None,
            unit_type,
            size,
            count: 1,
        }
    }

    pub fn contribution(&self) -> Contribution {
        Contribution::of(self.unit_type, self.size)
    }

    fn label(&self) -> String {
        match &self.name {
            Some(n) => format!("'{n}'"),
            None => format!("{:?}", self.unit_type),
        }
    }
}

/// Per-document overrides layered over [`CheckConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmyConfig {
    pub strict: Option<bool>,
    pub output: Option<OutputFormat>,
}

impl ArmyConfig {
    pub fn apply(&self, cfg: &mut CheckConfig) {
        if let Some(strict) = self.strict {
            cfg.strict = strict;
        }
        if let Some(output) = self.output {
            cfg.output = output;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmyList {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub config: Option<ArmyConfig>,
    #[serde(default)]
    pub units: Vec<UnitEntry>,
}

impl ArmyList {
    /// Reject entries whose contribution cannot be decided.
    pub fn validate(&self) -> Result<()> {
        for unit in &self.units {
            if unit.unit_type.needs_size() && unit.size.is_none() {
                return Err(Error::Invalid(format!(
                    "unit {} needs a size (troop, regiment, horde or legion)",
                    unit.label()
                )));
            }
        }
        Ok(())
    }

    /// Count slot pools and placed special units.
    pub fn tally(&self) -> SlotInput {
        let mut input = SlotInput::default();
        for unit in &self.units {
            let n = unit.count;
            match unit.contribution() {
                Contribution::Horde => input.horde_count = input.horde_count.saturating_add(n),
                Contribution::LargeInf => {
                    input.large_inf_count = input.large_inf_count.saturating_add(n)
                }
                Contribution::Regiment => {
                    input.regiment_count = input.regiment_count.saturating_add(n)
                }
                Contribution::Special(kind) => {
                    input = input.with_placed(kind, input.placed(kind).saturating_add(n));
                }
                Contribution::Nothing => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(unit = %unit.label(), "unit unlocks no special slots");
                }
            }
        }
        input
    }

    /// `base` with this document's `config:` block applied.
    pub fn effective_config(&self, base: &CheckConfig) -> CheckConfig {
        let mut cfg = base.clone();
        if let Some(doc) = &self.config {
            doc.apply(&mut cfg);
        }
        cfg
    }

    /// Validate, tally, and answer under `cfg` (already layered by the caller).
    pub fn check(&self, cfg: &CheckConfig) -> Result<CanAdd> {
        self.validate()?;
        Ok(cfg.evaluate(&self.tally())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(t: UnitType, size: Option<UnitSize>, count: u32) -> UnitEntry {
        UnitEntry {
            count,
            ..UnitEntry::new(t, size)
        }
    }

    #[test]
    fn contributions_follow_unlock_rules() {
        use UnitSize::*;
        use UnitType::*;
        assert_eq!(Contribution::of(Infantry, Some(Horde)), Contribution::Horde);
        assert_eq!(
            Contribution::of(HeavyInfantry, Some(Regiment)),
            Contribution::Regiment
        );
        assert_eq!(
            Contribution::of(LargeCavalry, Some(Horde)),
            Contribution::LargeInf
        );
        assert_eq!(
            Contribution::of(MonstrousInfantry, Some(Regiment)),
            Contribution::Nothing
        );
        assert_eq!(Contribution::of(Infantry, Some(Troop)), Contribution::Nothing);
        assert_eq!(Contribution::of(Cavalry, Some(Horde)), Contribution::Nothing);
        assert_eq!(
            Contribution::of(Titan, None),
            Contribution::Special(UnitKind::Monster)
        );
        assert_eq!(
            Contribution::of(WarEngine, None),
            Contribution::Special(UnitKind::WarEngine)
        );
    }

    #[test]
    fn tally_sums_counts_per_pool() {
        let army = ArmyList {
            units: vec![
                unit(UnitType::Infantry, Some(UnitSize::Horde), 2),
                unit(UnitType::LargeInfantry, Some(UnitSize::Horde), 1),
                unit(UnitType::HeavyInfantry, Some(UnitSize::Regiment), 3),
                unit(UnitType::Hero, None, 2),
                unit(UnitType::Monster, None, 1),
                unit(UnitType::Titan, None, 1),
                unit(UnitType::Cavalry, Some(UnitSize::Regiment), 4),
            ],
            ..Default::default()
        };
        assert_eq!(
            army.tally(),
            SlotInput {
                horde_count: 2,
                large_inf_count: 1,
                regiment_count: 3,
                hero_count: 2,
                war_engine_count: 0,
                monster_count: 2,
            }
        );
    }

    #[test]
    fn sized_types_require_a_size() {
        let army = ArmyList {
            units: vec![UnitEntry {
                name: Some("Spearmen".into()),
                ..UnitEntry::new(UnitType::Infantry, None)
            }],
            ..Default::default()
        };
        let err = army.validate().unwrap_err();
        assert!(err.to_string().contains("'Spearmen'"), "{err}");
    }

    #[test]
    fn document_config_overrides_base() {
        let army = ArmyList {
            config: Some(ArmyConfig {
                strict: Some(true),
                output: None,
            }),
            ..Default::default()
        };
        let base = CheckConfig {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let cfg = army.effective_config(&base);
        assert!(cfg.strict);
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn strict_check_rejects_unseatable_heroes() {
        let army = ArmyList {
            config: Some(ArmyConfig {
                strict: Some(true),
                output: None,
            }),
            units: vec![
                unit(UnitType::Infantry, Some(UnitSize::Regiment), 1),
                unit(UnitType::Hero, None, 2),
            ],
            ..Default::default()
        };
        let cfg = army.effective_config(&CheckConfig::default());
        assert!(matches!(
            army.check(&cfg),
            Err(Error::Core(warslot_core::Error::IllegalArmy { placed: 2, fits: 1 }))
        ));
        assert_eq!(army.check(&CheckConfig::default()).unwrap(), CanAdd::NONE);
    }
}
