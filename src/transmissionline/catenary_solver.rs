use nalgebra as na;

use crate::base::iterate::{
    solve_bracketed, BracketPoint, ResidualDirection, SolveError, StopCriterion,
};
use crate::transmissionline::catenary::{Catenary2d, Catenary3d, CatenaryError};

/// The catenary quantity a [`CatenarySolver`] fits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatenaryTarget {
    /// Catenary constant (H/w); solved directly.
    Constant,
    /// Curve length.
    Length,
    /// Sag, at the target position or the sag point.
    Sag,
    /// Support tension, at the target position or the maximum.
    SupportTension,
}

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error(transparent)]
    Catenary(#[from] CatenaryError),
    #[error("target value cannot be reached for the endpoint spacing and unit weight")]
    TargetInfeasible,
    #[error("horizontal tension iteration did not converge")]
    NotConverged,
}

/// Fits a catenary to a target quantity by solving the horizontal tension.
///
/// The iterative targets share a bracket seeded at the minimum acceptable
/// catenary constant, expanded 10%, and refined with secant steps until the
/// tension bracket collapses below 0.01.
#[derive(Debug, Clone, PartialEq)]
pub struct CatenarySolver {
    pub spacing_endpoints: na::Vector3<f64>,
    pub weight_unit: na::Vector3<f64>,
    pub type_target: CatenaryTarget,
    pub value_target: f64,
    /// Curve position fraction the target applies to. `None` selects the sag
    /// point for sag targets and the maximum for tension targets.
    pub position_target: Option<f64>,
}

impl CatenarySolver {
    /// Solves the catenary that produces the target value.
    pub fn catenary(&self) -> Result<Catenary3d, SolverError> {
        let weight_magnitude = self.weight_unit.magnitude();

        let tension_horizontal = match self.type_target {
            CatenaryTarget::Constant => self.value_target * weight_magnitude,
            CatenaryTarget::Length => self.solve_tension_from_length()?,
            CatenaryTarget::Sag => self.solve_tension_from_sag()?,
            CatenaryTarget::SupportTension => self.solve_tension_from_support_tension()?,
        };

        let catenary = self.catenary_at(tension_horizontal)?;
        if catenary.constant()
            < Catenary2d::constant_minimum(self.spacing_endpoints.magnitude())
        {
            return Err(SolverError::TargetInfeasible);
        }

        Ok(catenary)
    }

    /// The solved horizontal tension.
    pub fn tension_horizontal(&self) -> Result<f64, SolverError> {
        Ok(self.catenary()?.tension_horizontal())
    }

    pub fn validate(&self, _is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if let Some(position) = self.position_target {
            if !(0.0..=1.0).contains(&position) {
                is_valid = false;
                messages.push("CATENARY SOLVER - Invalid target position".to_string());
            }
        }

        if self.spacing_endpoints.x <= 0.0 {
            is_valid = false;
            messages.push("CATENARY SOLVER - Invalid horizontal endpoint spacing".to_string());
        }

        if self.spacing_endpoints.y != 0.0 {
            is_valid = false;
            messages.push("CATENARY SOLVER - Invalid transverse endpoint spacing".to_string());
        }

        if 2000.0 < self.spacing_endpoints.z.abs() {
            is_valid = false;
            messages.push("CATENARY SOLVER - Invalid vertical endpoint spacing".to_string());
        }

        if self.value_target <= 0.0 {
            is_valid = false;
            messages.push("CATENARY SOLVER - Invalid target value".to_string());
        }

        if self.weight_unit.x != 0.0 {
            is_valid = false;
            messages.push(
                "CATENARY SOLVER - Unit weight along the span axis must equal zero".to_string(),
            );
        }

        if self.weight_unit.y < 0.0 {
            is_valid = false;
            messages.push("CATENARY SOLVER - Invalid transverse unit weight".to_string());
        }

        if self.weight_unit.z <= 0.0 {
            is_valid = false;
            messages.push("CATENARY SOLVER - Invalid vertical unit weight".to_string());
        }

        if is_valid && self.catenary().is_err() {
            is_valid = false;
            messages.push("CATENARY SOLVER - Could not solve for catenary".to_string());
        }

        is_valid
    }

    fn catenary_at(&self, tension_horizontal: f64) -> Result<Catenary3d, CatenaryError> {
        Catenary3d::new(tension_horizontal, self.weight_unit, self.spacing_endpoints)
    }

    /// The lowest acceptable horizontal tension, used to seed brackets.
    fn tension_horizontal_minimum(&self) -> f64 {
        Catenary2d::constant_minimum(self.spacing_endpoints.magnitude())
            * self.weight_unit.magnitude()
    }

    fn solve_tension_from_length(&self) -> Result<f64, SolverError> {
        // a curve can never be shorter than the chord
        if self.value_target <= self.spacing_endpoints.magnitude() {
            return Err(SolverError::TargetInfeasible);
        }

        let tension_left = self.tension_horizontal_minimum();
        let length_left = self.catenary_at(tension_left)?.length();

        // the slackest acceptable catenary bounds the reachable lengths
        if length_left < self.value_target {
            return Err(SolverError::TargetInfeasible);
        }

        self.solve_tension(tension_left, length_left, tension_left * 1.10, |catenary| {
            Ok(catenary.length())
        })
    }

    fn solve_tension_from_sag(&self) -> Result<f64, SolverError> {
        let tension_left = self.tension_horizontal_minimum();
        let sag_left = self.sag_at_tension(tension_left)?;

        if sag_left < self.value_target {
            return Err(SolverError::TargetInfeasible);
        }

        let position = self.position_target;
        self.solve_tension(tension_left, sag_left, tension_left * 1.10, |catenary| {
            match position {
                None => catenary.sag(),
                Some(fraction) => Ok(catenary.sag_at(fraction)),
            }
        })
    }

    fn solve_tension_from_support_tension(&self) -> Result<f64, SolverError> {
        let tension_left = self.tension_horizontal_minimum();
        let tension_support_left = self.support_tension_at_tension(tension_left)?;

        if self.value_target < tension_support_left {
            return Err(SolverError::TargetInfeasible);
        }

        // the horizontal tension can never exceed the support tension
        let position = self.position_target;
        self.solve_tension(
            tension_left,
            tension_support_left,
            self.value_target,
            |catenary| match position {
                None => Ok(catenary.tension_max()),
                Some(fraction) => Ok(catenary.tension(fraction)),
            },
        )
    }

    fn sag_at_tension(&self, tension_horizontal: f64) -> Result<f64, SolverError> {
        let catenary = self.catenary_at(tension_horizontal)?;
        match self.position_target {
            None => Ok(catenary.sag()?),
            Some(fraction) => Ok(catenary.sag_at(fraction)),
        }
    }

    fn support_tension_at_tension(&self, tension_horizontal: f64) -> Result<f64, SolverError> {
        let catenary = self.catenary_at(tension_horizontal)?;
        match self.position_target {
            None => Ok(catenary.tension_max()),
            Some(fraction) => Ok(catenary.tension(fraction)),
        }
    }

    fn solve_tension(
        &self,
        tension_left: f64,
        value_left: f64,
        tension_right: f64,
        query: impl Fn(&Catenary3d) -> Result<f64, CatenaryError>,
    ) -> Result<f64, SolverError> {
        let residual = |tension_horizontal: f64| -> Result<f64, CatenaryError> {
            query(&self.catenary_at(tension_horizontal)?)
        };

        let value_right = residual(tension_right)?;

        solve_bracketed(
            residual,
            self.value_target,
            BracketPoint::new(tension_left, value_left),
            BracketPoint::new(tension_right, value_right),
            ResidualDirection::Decreasing,
            StopCriterion::BracketWidth(0.01),
            false,
        )
        .map_err(|error| match error {
            SolveError::IterationLimit => SolverError::NotConverged,
            SolveError::Residual(error) => SolverError::Catenary(error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solver(type_target: CatenaryTarget, value_target: f64) -> CatenarySolver {
        CatenarySolver {
            spacing_endpoints: na::Vector3::new(1200.0, 0.0, 0.0),
            weight_unit: na::Vector3::new(0.0, 0.0, 1.0),
            type_target,
            value_target,
            position_target: None,
        }
    }

    #[test]
    fn test_target_constant() {
        let catenary = solver(CatenaryTarget::Constant, 4000.0).catenary().unwrap();
        assert_relative_eq!(catenary.tension_horizontal(), 4000.0);
    }

    #[test]
    fn test_target_length() {
        let solver = solver(CatenaryTarget::Length, 1204.505065);
        let catenary = solver.catenary().unwrap();

        assert_relative_eq!(catenary.tension_horizontal(), 4000.0, epsilon = 0.5);
        assert_relative_eq!(catenary.length(), 1204.505065, epsilon = 0.01);
    }

    #[test]
    fn test_target_sag() {
        let solver = solver(CatenaryTarget::Sag, 45.08438);
        let catenary = solver.catenary().unwrap();

        assert_relative_eq!(catenary.tension_horizontal(), 4000.0, epsilon = 0.5);
        assert_relative_eq!(catenary.sag().unwrap(), 45.08438, epsilon = 0.01);
    }

    #[test]
    fn test_target_support_tension() {
        let mut solver = solver(CatenaryTarget::SupportTension, 4045.084438);
        solver.position_target = Some(0.0);
        let catenary = solver.catenary().unwrap();

        assert_relative_eq!(catenary.tension_horizontal(), 4000.0, epsilon = 0.5);
        assert_relative_eq!(catenary.tension(0.0), 4045.084438, epsilon = 0.01);
    }

    #[test]
    fn test_target_support_tension_max() {
        let solver = solver(CatenaryTarget::SupportTension, 4045.084438);
        let catenary = solver.catenary().unwrap();

        assert_relative_eq!(catenary.tension_max(), 4045.084438, epsilon = 0.01);
    }

    #[test]
    fn test_length_shorter_than_chord_is_infeasible() {
        let solver = solver(CatenaryTarget::Length, 1100.0);
        assert!(matches!(
            solver.catenary(),
            Err(SolverError::TargetInfeasible)
        ));
    }

    #[test]
    fn test_validate() {
        let good = solver(CatenaryTarget::Constant, 4000.0);
        let mut messages = Vec::new();
        assert!(good.validate(true, &mut messages));
        assert!(messages.is_empty());

        let mut bad = solver(CatenaryTarget::Constant, -1.0);
        bad.weight_unit = na::Vector3::new(0.0, 0.0, 0.0);
        assert!(!bad.validate(true, &mut messages));
        assert!(!messages.is_empty());
    }
}
