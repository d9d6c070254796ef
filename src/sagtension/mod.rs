pub mod component_elongation;
pub mod elongation_model;
pub mod line_loader;
pub mod reloader;
pub mod state;
pub mod strainer;
pub mod unloader;

use crate::sagtension::component_elongation::ElongationError;
use crate::transmissionline::catenary::CatenaryError;
use crate::transmissionline::catenary_solver::SolverError;

/// Sample count used when converting a catenary tension profile into the
/// constant effective tension the elongation models work with.
pub const TENSION_AVERAGE_POINTS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum SagTensionError {
    #[error(transparent)]
    Elongation(#[from] ElongationError),
    #[error(transparent)]
    Catenary(#[from] CatenaryError),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("reloaded horizontal tension iteration did not converge")]
    ReloadNotConverged,
    #[error("stretch load iteration did not converge")]
    StretchNotConverged,
}
