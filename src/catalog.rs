//! Unit catalog: static recruitment data for the six troop types.
//! Costs, combat scores, and build times mirror the in-game values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The three stockpile resources a village produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Wood,
    Clay,
    Iron,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Wood, Resource::Clay, Resource::Iron];

    /// In-game (Portuguese) resource name, used by the shell's output lines.
    pub fn label(self) -> &'static str {
        match self {
            Resource::Wood => "Madeira",
            Resource::Clay => "Argila",
            Resource::Iron => "Ferro",
        }
    }
}

/// Per-unit recruitment cost. Every unit costs a positive amount of each resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub wood: u32,
    pub clay: u32,
    pub iron: u32,
}

impl ResourceCost {
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Wood => self.wood,
            Resource::Clay => self.clay,
            Resource::Iron => self.iron,
        }
    }
}

/// Defense sub-scores against the three attack classes. The defense objective
/// weighs their sum by the unit's recruited count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseScores {
    pub general: f64,
    pub archery: f64,
    pub cavalry: f64,
}

impl DefenseScores {
    pub fn total(&self) -> f64 {
        self.general + self.archery + self.cavalry
    }
}

/// How the unit fights. Not part of the optimization model; carried along
/// with the catalog record for consumers that render unit details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    Melee,
    Ranged,
    Cavalry,
}

/// One recruitable troop type. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub cost: ResourceCost,
    pub attack: f64,
    pub defense: DefenseScores,
    /// Seconds one production queue needs to train a single unit. Strictly
    /// positive; used as a divisor for the per-unit queue cap.
    pub build_time_secs: u32,
    pub attack_kind: AttackKind,
}

/// Catalog keyed by unit name. A BTreeMap keeps iteration (and therefore
/// solver variable order) deterministic across runs.
pub type UnitCatalog = BTreeMap<String, UnitDefinition>;

/// The standard six-unit roster with the in-game constants.
pub fn standard_catalog() -> UnitCatalog {
    let units = [
        (
            "Lanceiro",
            UnitDefinition {
                cost: ResourceCost { wood: 48, clay: 29, iron: 10 },
                attack: 10.0,
                defense: DefenseScores { general: 15.0, archery: 20.0, cavalry: 45.0 },
                build_time_secs: 850,
                attack_kind: AttackKind::Melee,
            },
        ),
        (
            "Espadachim",
            UnitDefinition {
                cost: ResourceCost { wood: 29, clay: 29, iron: 67 },
                attack: 25.0,
                defense: DefenseScores { general: 50.0, archery: 40.0, cavalry: 15.0 },
                build_time_secs: 1250,
                attack_kind: AttackKind::Melee,
            },
        ),
        (
            "Bárbaro",
            UnitDefinition {
                cost: ResourceCost { wood: 57, clay: 29, iron: 38 },
                attack: 40.0,
                defense: DefenseScores { general: 10.0, archery: 10.0, cavalry: 5.0 },
                build_time_secs: 1100,
                attack_kind: AttackKind::Melee,
            },
        ),
        (
            "Arqueiro",
            UnitDefinition {
                cost: ResourceCost { wood: 95, clay: 29, iron: 57 },
                attack: 15.0,
                defense: DefenseScores { general: 50.0, archery: 5.0, cavalry: 40.0 },
                build_time_secs: 1500,
                attack_kind: AttackKind::Ranged,
            },
        ),
        (
            "Cavalaria Leve",
            UnitDefinition {
                cost: ResourceCost { wood: 119, clay: 95, iron: 238 },
                attack: 130.0,
                defense: DefenseScores { general: 30.0, archery: 30.0, cavalry: 40.0 },
                build_time_secs: 1500,
                attack_kind: AttackKind::Cavalry,
            },
        ),
        (
            "Arqueiro a Cavalo",
            UnitDefinition {
                cost: ResourceCost { wood: 238, clay: 95, iron: 143 },
                attack: 120.0,
                defense: DefenseScores { general: 40.0, archery: 50.0, cavalry: 30.0 },
                build_time_secs: 2250,
                attack_kind: AttackKind::Ranged,
            },
        ),
    ];

    units
        .into_iter()
        .map(|(name, unit)| (name.to_string(), unit))
        .collect()
}
