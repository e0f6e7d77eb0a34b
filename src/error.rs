use thiserror::Error;

/// Fatal optimizer errors. Infeasible or unbounded models are not errors:
/// the solver reports them through [`crate::optimizer::SolveStatus`].
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Malformed catalog or scenario data, detected before the solver runs.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The MILP backend misbehaved (e.g. an optimal status with no solution).
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),
}
