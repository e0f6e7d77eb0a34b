//! Shell boundary: argv in, rendered plan out. All optimization lives in
//! [`crate::optimizer`]; this module only parses and formats.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::catalog::standard_catalog;
use crate::optimizer::{self, RecruitmentPlan};
use crate::scenario::{Objective, ProductionRates, Scenario};

const USAGE: &str = "usage: recruta <ataque|defesa> <horas> <madeira> <argila> <ferro> [--json]";

/// Run the CLI against raw argv (including the program name). Returns the
/// process exit code: 0 on success, 1 on optimizer failure, 2 on usage error.
pub fn run_with_args(args: &[String]) -> i32 {
    let as_json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&str> = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|arg| *arg != "--json")
        .collect();

    let scenario = match parse_scenario(&positional) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("{err:#}");
            eprintln!("{USAGE}");
            return 2;
        }
    };

    let catalog = standard_catalog();
    match optimizer::solve(&catalog, &scenario) {
        Ok(plan) if as_json => match serde_json::to_string_pretty(&plan) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize plan: {err}");
                1
            }
        },
        Ok(plan) => {
            print!("{}", render_plan(&plan));
            0
        }
        Err(err) => {
            eprintln!("optimization failed: {err}");
            1
        }
    }
}

/// Build a scenario from the five positional arguments. The numeric inputs
/// are integers, like the form fields they replace.
fn parse_scenario(args: &[&str]) -> Result<Scenario> {
    let [mode, hours, wood, clay, iron] = args else {
        anyhow::bail!("expected 5 arguments, got {}", args.len());
    };

    let objective = Objective::parse_token(mode)
        .with_context(|| format!("unknown mode '{mode}', expected 'ataque' or 'defesa'"))?;
    let hours: u32 = hours.parse().with_context(|| format!("invalid horas '{hours}'"))?;
    let wood: u32 = wood.parse().with_context(|| format!("invalid madeira '{wood}'"))?;
    let clay: u32 = clay.parse().with_context(|| format!("invalid argila '{clay}'"))?;
    let iron: u32 = iron.parse().with_context(|| format!("invalid ferro '{iron}'"))?;

    Ok(Scenario {
        objective,
        hours: f64::from(hours),
        production: ProductionRates {
            wood: f64::from(wood),
            clay: f64::from(clay),
            iron: f64::from(iron),
        },
    })
}

/// Render the plan in the report format: status line, one line per recruited
/// unit, then the spend per resource.
pub fn render_plan(plan: &RecruitmentPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status: {}", plan.status);
    for (name, count) in &plan.counts {
        let _ = writeln!(out, "{name}: {count}");
    }
    let _ = writeln!(out, "Madeira gasta: {}", plan.spend.wood);
    let _ = writeln!(out, "Argila gasta: {}", plan.spend.clay);
    let _ = writeln!(out, "Ferro gasto: {}", plan.spend.iron);
    out
}
