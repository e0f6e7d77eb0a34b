//! Optimization request: what to maximize and how much production to spend.

use serde::{Deserialize, Serialize};

use crate::catalog::Resource;

/// Which combat score the solver maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Attack,
    Defense,
}

impl Objective {
    /// Parse the shell's mode token ("ataque" or "defesa").
    pub fn parse_token(token: &str) -> Option<Objective> {
        match token {
            "ataque" => Some(Objective::Attack),
            "defesa" => Some(Objective::Defense),
            _ => None,
        }
    }
}

/// Per-hour production for each resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionRates {
    pub wood: f64,
    pub clay: f64,
    pub iron: f64,
}

impl ProductionRates {
    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Wood => self.wood,
            Resource::Clay => self.clay,
            Resource::Iron => self.iron,
        }
    }
}

/// One optimization request. Immutable once constructed; a fresh scenario is
/// built for every solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub objective: Objective,
    /// Hours of production to spend on recruitment. Must be > 0.
    pub hours: f64,
    pub production: ProductionRates,
}
