//! The recruitment optimizer: builds a mixed-integer program over per-unit
//! recruitment counts and solves it with SCIP (branch-and-bound over the
//! integer variables, simplex for the relaxations).

use std::collections::BTreeMap;

use russcip::{Model, ObjSense, ProblemOrSolving, Status, VarType, WithSolutions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Resource, UnitCatalog};
use crate::error::OptimizeError;
use crate::scenario::{Objective, Scenario};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hard ceiling on per-hour production. Resource spend is capped by
/// `hours * MAX_PRODUCTION_RATE` in addition to the rate-based caps, so a
/// wildly overstated production rate cannot inflate the plan.
pub const MAX_PRODUCTION_RATE: f64 = 6420.0;

/// Outcome reported by the solver. Infeasible and unbounded models are valid
/// outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    NotSolved,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::NotSolved => "Not Solved",
        };
        f.write_str(text)
    }
}

/// Total resources consumed by a plan, recomputed from the integer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpend {
    pub wood: u64,
    pub clay: u64,
    pub iron: u64,
}

impl ResourceSpend {
    pub fn get(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Wood => self.wood,
            Resource::Clay => self.clay,
            Resource::Iron => self.iron,
        }
    }
}

/// Solved allocation. Owned by the caller; only units with a positive count
/// appear in `counts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruitmentPlan {
    pub status: SolveStatus,
    pub counts: BTreeMap<String, u64>,
    pub spend: ResourceSpend,
    /// Optimal objective value (attack or summed-defense score). Zero unless
    /// the status is Optimal.
    pub objective_value: f64,
    /// Queue-seconds needed to train the whole plan, one queue per unit type.
    pub total_build_time_secs: u64,
}

/// Solve one recruitment scenario against the given catalog.
///
/// Builds a fresh model per call: one non-negative integer count variable per
/// unit, the aggregate build-time variable, and the full constraint set
/// (rate caps, fixed ceilings, per-unit queue caps, build-time identity).
/// A single synchronous SCIP solve; no retries.
pub fn solve(catalog: &UnitCatalog, scenario: &Scenario) -> Result<RecruitmentPlan, OptimizeError> {
    validate(catalog, scenario)?;

    let mut model = Model::new()
        .hide_output()
        .include_default_plugins()
        .create_prob("otimizacao_de_recursos")
        .set_obj_sense(ObjSense::Maximize);

    // One integer count variable per unit, objective weight attached here.
    let mut unit_vars = Vec::with_capacity(catalog.len());
    for (name, unit) in catalog {
        let weight = match scenario.objective {
            Objective::Attack => unit.attack,
            Objective::Defense => unit.defense.total(),
        };
        let var = model.add_var(0.0, f64::INFINITY, weight, name, VarType::Integer);
        unit_vars.push((name.as_str(), unit, var));
    }

    // Aggregate build time. Tied to the counts by the tempo_total identity
    // below, carries no objective weight; reported, never optimized over.
    let total_time = model.add_var(
        0.0,
        f64::INFINITY,
        0.0,
        "recrutamento_total",
        VarType::Integer,
    );

    // Spend per resource is capped twice: by what the village produces in the
    // window, and by the fixed ceiling. Both caps are genuine constraints.
    for resource in Resource::ALL {
        let costs: Vec<f64> = unit_vars
            .iter()
            .map(|(_, unit, _)| f64::from(unit.cost.get(resource)))
            .collect();
        let name = resource.label().to_lowercase();

        let vars: Vec<_> = unit_vars.iter().map(|(_, _, var)| var).collect();
        let produced = scenario.hours * scenario.production.get(resource);
        model.add_cons(
            vars,
            &costs,
            -f64::INFINITY,
            produced,
            &format!("producao_{name}"),
        );

        let vars: Vec<_> = unit_vars.iter().map(|(_, _, var)| var).collect();
        let ceiling = scenario.hours * MAX_PRODUCTION_RATE;
        model.add_cons(vars, &costs, -f64::INFINITY, ceiling, &format!("teto_{name}"));
    }

    // recrutamento_total == sum(build_time * count)
    let mut vars: Vec<_> = unit_vars.iter().map(|(_, _, var)| var).collect();
    let mut coefs: Vec<f64> = unit_vars
        .iter()
        .map(|(_, unit, _)| -f64::from(unit.build_time_secs))
        .collect();
    vars.push(&total_time);
    coefs.push(1.0);
    model.add_cons(vars, &coefs, 0.0, 0.0, "tempo_total");

    // Each unit type gets its own queue: no more of it than one queue could
    // train in the whole window. Integrality of the count does the flooring.
    for (name, unit, var) in &unit_vars {
        let cap = scenario.hours * SECONDS_PER_HOUR / f64::from(unit.build_time_secs);
        model.add_cons(vec![var], &[1.0], -f64::INFINITY, cap, &format!("fila_{name}"));
    }

    debug!(
        units = catalog.len(),
        objective = ?scenario.objective,
        hours = scenario.hours,
        "solving recruitment model"
    );
    let solved = model.solve();

    let status = match solved.status() {
        Status::Optimal => SolveStatus::Optimal,
        Status::Infeasible => SolveStatus::Infeasible,
        Status::Unbounded => SolveStatus::Unbounded,
        _ => SolveStatus::NotSolved,
    };

    let mut counts = BTreeMap::new();
    let mut objective_value = 0.0;
    if status == SolveStatus::Optimal {
        let sol = solved.best_sol().ok_or_else(|| {
            OptimizeError::SolverUnavailable(
                "solver reported an optimal model but returned no solution".to_string(),
            )
        })?;
        for (name, _, var) in &unit_vars {
            let count = sol.val(var).round() as u64;
            if count > 0 {
                counts.insert((*name).to_string(), count);
            }
        }
        objective_value = solved.obj_val();
    }

    let plan = RecruitmentPlan {
        status,
        spend: spend_of(catalog, &counts),
        total_build_time_secs: build_time_of(catalog, &counts),
        objective_value,
        counts,
    };
    info!(
        status = %plan.status,
        objective_value = plan.objective_value,
        recruited_types = plan.counts.len(),
        "recruitment solve finished"
    );
    Ok(plan)
}

fn validate(catalog: &UnitCatalog, scenario: &Scenario) -> Result<(), OptimizeError> {
    if catalog.is_empty() {
        return Err(OptimizeError::InvalidInput("catalog has no units".to_string()));
    }
    for (name, unit) in catalog {
        if name.is_empty() {
            return Err(OptimizeError::InvalidInput("unit with an empty name".to_string()));
        }
        for resource in Resource::ALL {
            if unit.cost.get(resource) == 0 {
                return Err(OptimizeError::InvalidInput(format!(
                    "{name}: {} cost must be positive",
                    resource.label()
                )));
            }
        }
        if unit.build_time_secs == 0 {
            return Err(OptimizeError::InvalidInput(format!(
                "{name}: build time must be positive"
            )));
        }
        let scores = [
            unit.attack,
            unit.defense.general,
            unit.defense.archery,
            unit.defense.cavalry,
        ];
        if scores.iter().any(|score| !score.is_finite() || *score < 0.0) {
            return Err(OptimizeError::InvalidInput(format!(
                "{name}: combat scores must be finite and non-negative"
            )));
        }
    }
    if !scenario.hours.is_finite() || scenario.hours <= 0.0 {
        return Err(OptimizeError::InvalidInput("hours must be positive".to_string()));
    }
    for resource in Resource::ALL {
        let rate = scenario.production.get(resource);
        if !rate.is_finite() || rate <= 0.0 {
            return Err(OptimizeError::InvalidInput(format!(
                "{} production must be positive",
                resource.label()
            )));
        }
    }
    Ok(())
}

fn spend_of(catalog: &UnitCatalog, counts: &BTreeMap<String, u64>) -> ResourceSpend {
    let mut spend = ResourceSpend::default();
    for (name, count) in counts {
        if let Some(unit) = catalog.get(name) {
            spend.wood += u64::from(unit.cost.wood) * count;
            spend.clay += u64::from(unit.cost.clay) * count;
            spend.iron += u64::from(unit.cost.iron) * count;
        }
    }
    spend
}

fn build_time_of(catalog: &UnitCatalog, counts: &BTreeMap<String, u64>) -> u64 {
    counts
        .iter()
        .filter_map(|(name, count)| {
            catalog
                .get(name)
                .map(|unit| u64::from(unit.build_time_secs) * count)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        standard_catalog, AttackKind, DefenseScores, ResourceCost, UnitDefinition,
    };
    use crate::scenario::ProductionRates;

    fn scenario(hours: f64, rate: f64) -> Scenario {
        Scenario {
            objective: Objective::Attack,
            hours,
            production: ProductionRates { wood: rate, clay: rate, iron: rate },
        }
    }

    #[test]
    fn rejects_zero_hours_before_solving() {
        let err = solve(&standard_catalog(), &scenario(0.0, 1000.0)).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_positive_production() {
        for bad in [0.0, -5.0, f64::NAN] {
            let mut request = scenario(1.0, 1000.0);
            request.production.clay = bad;
            let err = solve(&standard_catalog(), &request).unwrap_err();
            assert!(matches!(err, OptimizeError::InvalidInput(_)));
        }
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = solve(&UnitCatalog::new(), &scenario(1.0, 1000.0)).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[test]
    fn rejects_zero_cost_and_zero_build_time() {
        let unit = UnitDefinition {
            cost: ResourceCost { wood: 0, clay: 1, iron: 1 },
            attack: 1.0,
            defense: DefenseScores { general: 1.0, archery: 1.0, cavalry: 1.0 },
            build_time_secs: 100,
            attack_kind: AttackKind::Melee,
        };
        let mut catalog = UnitCatalog::new();
        catalog.insert("Fantasma".to_string(), unit.clone());
        let err = solve(&catalog, &scenario(1.0, 1000.0)).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));

        let mut catalog = UnitCatalog::new();
        catalog.insert(
            "Fantasma".to_string(),
            UnitDefinition {
                cost: ResourceCost { wood: 1, clay: 1, iron: 1 },
                build_time_secs: 0,
                ..unit
            },
        );
        let err = solve(&catalog, &scenario(1.0, 1000.0)).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[test]
    fn spend_is_recomputed_from_counts() {
        let catalog = standard_catalog();
        let mut counts = BTreeMap::new();
        counts.insert("Lanceiro".to_string(), 2u64);
        counts.insert("Bárbaro".to_string(), 1u64);
        let spend = spend_of(&catalog, &counts);
        assert_eq!(spend.wood, 2 * 48 + 57);
        assert_eq!(spend.clay, 2 * 29 + 29);
        assert_eq!(spend.iron, 2 * 10 + 38);
        assert_eq!(build_time_of(&catalog, &counts), 2 * 850 + 1100);
    }
}
