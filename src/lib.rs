//! Troop recruitment optimizer for resource-management games.
//!
//! Given a unit catalog and a scenario (objective mode, hours of production
//! to spend, per-hour resource rates), [`optimizer::solve`] builds a
//! mixed-integer linear program over per-unit recruitment counts and returns
//! the optimal allocation as a [`optimizer::RecruitmentPlan`].

pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod optimizer;
pub mod scenario;

pub use catalog::{standard_catalog, UnitCatalog, UnitDefinition};
pub use error::OptimizeError;
pub use optimizer::{solve, RecruitmentPlan, SolveStatus};
pub use scenario::{Objective, Scenario};
