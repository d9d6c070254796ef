/// Iteration cap shared by every numerical solver in the crate.
pub const ITERATIONS_MAX: usize = 100;

/// A point on a residual curve: the trial x value and its residual y value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketPoint {
    pub x: f64,
    pub y: f64,
}

impl BracketPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// When the iteration is considered converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopCriterion {
    /// The bracket endpoints have collapsed to within the tolerance.
    BracketWidth(f64),
    /// The candidate residual matches the target to within the tolerance.
    ResidualMatch(f64),
}

/// Whether the residual grows or shrinks as x increases. Controls which
/// bracket endpoint a candidate inside the window replaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResidualDirection {
    Increasing,
    Decreasing,
}

#[derive(Debug, thiserror::Error)]
pub enum SolveError<E> {
    #[error("iteration limit reached without converging")]
    IterationLimit,
    #[error("residual evaluation failed")]
    Residual(E),
}

/// Solves residual(x) = target with a secant iteration over a three-point
/// bracket window.
///
/// The window starts at the given endpoints and follows the candidate when it
/// lands outside, so the target does not need to be bracketed initially. When
/// `is_bisected_when_bracketed` is set and the target sits between the
/// endpoint residuals, a midpoint step replaces the secant step.
pub fn solve_bracketed<E>(
    mut residual: impl FnMut(f64) -> Result<f64, E>,
    target: f64,
    mut left: BracketPoint,
    mut right: BracketPoint,
    direction: ResidualDirection,
    criterion: StopCriterion,
    is_bisected_when_bracketed: bool,
) -> Result<f64, SolveError<E>> {
    let mut current = BracketPoint::new(left.x, f64::INFINITY);

    for _ in 0..ITERATIONS_MAX {
        let is_converged = match criterion {
            StopCriterion::BracketWidth(tolerance) => (left.x - right.x).abs() < tolerance,
            StopCriterion::ResidualMatch(tolerance) => (current.y - target).abs() < tolerance,
        };
        if is_converged {
            return Ok(current.x);
        }

        // selects the next trial x value
        current.x = if is_bisected_when_bracketed && left.y > target && target > right.y {
            (left.x + right.x) / 2.0
        } else {
            let slope = (right.y - left.y) / (right.x - left.x);
            left.x + (target - left.y) / slope
        };
        current.y = residual(current.x).map_err(SolveError::Residual)?;

        // shifts or narrows the bracket window
        if current.x < left.x {
            right = left;
            left = current;
        } else if current.x <= right.x {
            let is_left_of_target = match direction {
                ResidualDirection::Increasing => current.y < target,
                ResidualDirection::Decreasing => target < current.y,
            };
            if is_left_of_target {
                left = current;
            } else {
                right = current;
            }
        } else {
            left = right;
            right = current;
        }
    }

    // allows a final convergence check before failing
    let is_converged = match criterion {
        StopCriterion::BracketWidth(tolerance) => (left.x - right.x).abs() < tolerance,
        StopCriterion::ResidualMatch(tolerance) => (current.y - target).abs() < tolerance,
    };
    if is_converged {
        Ok(current.x)
    } else {
        Err(SolveError::IterationLimit)
    }
}
