use nalgebra as na;

use crate::base::iterate::{
    solve_bracketed, BracketPoint, ResidualDirection, SolveError, StopCriterion,
};
use crate::sagtension::elongation_model::CableElongationModel;
use crate::sagtension::state::{CableState, CableStretchState};
use crate::sagtension::strainer::CableStrainer;
use crate::sagtension::unloader::CatenaryCableUnloader;
use crate::sagtension::{SagTensionError, TENSION_AVERAGE_POINTS};
use crate::transmissionline::cable::PolynomialType;
use crate::transmissionline::catenary::{Catenary2d, Catenary3d};

/// Temperature of the intermediate unloaded state the cable passes through
/// between the reference and reloaded loadings.
const TEMPERATURE_UNLOADED: f64 = 32.0;

/// Reloads a catenary-shaped cable to a different state and unit weight.
///
/// The reference catenary is first unloaded to a fixed unstretched state,
/// caching the unloaded length. The reloaded horizontal tension is then
/// solved so that the catenary curve length matches the cable length
/// predicted by straining from the unloaded state up to the reloaded average
/// tension.
#[derive(Debug, Clone, Copy)]
pub struct CatenaryCableReloader<'a> {
    /// The reference cable geometry.
    pub catenary: &'a Catenary3d,
    /// The elongation model the reference catenary is loaded at.
    pub model_reference: &'a CableElongationModel,
    /// The elongation model to reload into.
    pub model_reloaded: &'a CableElongationModel,
    /// The unit weight of the reloaded catenary.
    pub weight_unit_reloaded: na::Vector3<f64>,
}

impl CatenaryCableReloader<'_> {
    /// The cable length in the intermediate unloaded, unstretched state.
    pub fn length_unloaded_unstretched(&self) -> Result<f64, SagTensionError> {
        let model_unloaded = self.model_unloaded()?;
        let unloader = CatenaryCableUnloader {
            catenary: self.catenary,
            model_reference: self.model_reference,
            model_unloaded: &model_unloaded,
        };

        Ok(unloader.length_unloaded()?)
    }

    /// The reloaded catenary, with its horizontal tension solved so curve
    /// and cable lengths match.
    pub fn catenary_reloaded(&self) -> Result<Catenary3d, SagTensionError> {
        let model_unloaded = self.model_unloaded()?;
        let unloader = CatenaryCableUnloader {
            catenary: self.catenary,
            model_reference: self.model_reference,
            model_unloaded: &model_unloaded,
        };
        let length_unloaded = unloader.length_unloaded()?;

        let spacing_endpoints = self.catenary.spacing_endpoints();
        let weight_magnitude = self.weight_unit_reloaded.magnitude();

        // residual: catenary curve length minus strained cable length
        let residual = |tension_horizontal: f64| -> Result<f64, SagTensionError> {
            let catenary = Catenary3d::new(
                tension_horizontal,
                self.weight_unit_reloaded,
                spacing_endpoints,
            )?;

            let strainer = CableStrainer {
                length_start: length_unloaded,
                load_start: 0.0,
                load_finish: catenary.tension_average(TENSION_AVERAGE_POINTS),
                model_start: &model_unloaded,
                model_finish: self.model_reloaded,
            };

            Ok(catenary.length() - strainer.length_finish()?)
        };

        // brackets from the slackest acceptable catenary
        let tension_left =
            Catenary2d::constant_minimum(spacing_endpoints.magnitude()) * weight_magnitude;
        let tension_right = 2.0 * tension_left;

        let left = BracketPoint::new(tension_left, residual(tension_left)?);
        let right = BracketPoint::new(tension_right, residual(tension_right)?);

        let tension_horizontal = solve_bracketed(
            residual,
            0.0,
            left,
            right,
            ResidualDirection::Decreasing,
            StopCriterion::BracketWidth(0.01),
            true,
        )
        .map_err(|error| match error {
            SolveError::IterationLimit => SagTensionError::ReloadNotConverged,
            SolveError::Residual(error) => error,
        })?;

        Ok(Catenary3d::new(
            tension_horizontal,
            self.weight_unit_reloaded,
            spacing_endpoints,
        )?)
    }

    /// The solved horizontal tension of the reloaded catenary.
    pub fn tension_horizontal(&self) -> Result<f64, SagTensionError> {
        Ok(self.catenary_reloaded()?.tension_horizontal())
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if !self.catenary.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if self.weight_unit_reloaded.magnitude() < self.model_reloaded.cable().weight_unit {
            is_valid = false;
            messages.push(
                "CATENARY CABLE RELOADER - Reloaded unit weight is less than the cable unit \
                 weight"
                    .to_string(),
            );
        }

        if !self.model_reference.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if !self.model_reloaded.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        is_valid
    }

    /// The elongation model of the intermediate unloaded state.
    fn model_unloaded(&self) -> Result<CableElongationModel, SagTensionError> {
        Ok(CableElongationModel::new(
            self.model_reference.cable().clone(),
            CableState {
                temperature: TEMPERATURE_UNLOADED,
                type_polynomial: PolynomialType::LoadStrain,
            },
            CableStretchState::unstretched(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use approx::assert_relative_eq;

    fn catenary_reference() -> Catenary3d {
        Catenary3d::new(
            6000.0,
            na::Vector3::new(0.0, 0.0, 1.094),
            na::Vector3::new(1200.0, 0.0, 0.0),
        )
        .unwrap()
    }

    fn model(temperature: f64, load_stretch: f64) -> CableElongationModel {
        CableElongationModel::new(
            fixtures::cable_drake(),
            CableState {
                temperature,
                type_polynomial: PolynomialType::LoadStrain,
            },
            CableStretchState {
                temperature: 0.0,
                type_polynomial: PolynomialType::LoadStrain,
                load: load_stretch,
            },
        )
        .unwrap()
    }

    fn reloaded_tension(
        temperature: f64,
        load_stretch: f64,
        weight_unit: na::Vector3<f64>,
    ) -> f64 {
        let catenary = catenary_reference();
        let model_reference = model(60.0, 0.0);
        let model_reloaded = model(temperature, load_stretch);

        let reloader = CatenaryCableReloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_reloaded: &model_reloaded,
            weight_unit_reloaded: weight_unit,
        };

        reloader.tension_horizontal().unwrap()
    }

    #[test]
    fn test_length_unloaded_unstretched() {
        let catenary = catenary_reference();
        let model_reference = model(60.0, 0.0);
        let model_reloaded = model(60.0, 0.0);

        let reloader = CatenaryCableReloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_reloaded: &model_reloaded,
            weight_unit_reloaded: na::Vector3::new(0.0, 0.0, 1.094),
        };

        assert_relative_eq!(
            reloader.length_unloaded_unstretched().unwrap(),
            1200.8179,
            epsilon = 0.005
        );
    }

    #[test]
    fn test_reload_to_same_state_keeps_tension() {
        let tension = reloaded_tension(60.0, 0.0, na::Vector3::new(0.0, 0.0, 1.094));
        assert_relative_eq!(tension, 6000.0, epsilon = 0.05);
    }

    #[test]
    fn test_reload_to_cold_temperature() {
        let tension = reloaded_tension(0.0, 0.0, na::Vector3::new(0.0, 0.0, 1.094));
        assert_relative_eq!(tension, 6787.6, epsilon = 0.5);
    }

    #[test]
    fn test_reload_to_hot_temperature() {
        let tension = reloaded_tension(212.0, 0.0, na::Vector3::new(0.0, 0.0, 1.094));
        assert_relative_eq!(tension, 4702.2, epsilon = 0.5);
    }

    #[test]
    fn test_reload_to_heavy_load() {
        let tension = reloaded_tension(0.0, 0.0, na::Vector3::new(0.0, 2.072, 3.729));
        assert_relative_eq!(tension, 17125.9, epsilon = 0.5);
    }

    #[test]
    fn test_reload_to_iced_wind_load() {
        let tension = reloaded_tension(0.0, 0.0, na::Vector3::new(0.0, 1.405, 2.099));
        assert_relative_eq!(tension, 12146.8, epsilon = 0.5);
    }

    #[test]
    fn test_reloaded_average_tension() {
        let catenary = catenary_reference();
        let model_reference = model(60.0, 0.0);
        let model_reloaded = model(0.0, 0.0);

        let reloader = CatenaryCableReloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_reloaded: &model_reloaded,
            weight_unit_reloaded: na::Vector3::new(0.0, 1.405, 2.099),
        };

        let reloaded = reloader.catenary_reloaded().unwrap();
        assert_relative_eq!(
            reloaded.tension_average(TENSION_AVERAGE_POINTS),
            12179.0,
            epsilon = 1.0
        );
    }

    #[test]
    fn test_reload_with_stretch() {
        let stretch = 12179.0;

        let tension = reloaded_tension(60.0, stretch, na::Vector3::new(0.0, 0.0, 1.094));
        assert_relative_eq!(tension, 5561.5, epsilon = 0.5);

        let tension = reloaded_tension(0.0, stretch, na::Vector3::new(0.0, 0.0, 1.094));
        assert_relative_eq!(tension, 6320.1, epsilon = 0.5);

        let tension = reloaded_tension(212.0, stretch, na::Vector3::new(0.0, 0.0, 1.094));
        assert_relative_eq!(tension, 4537.2, epsilon = 0.5);

        // heavy loads exceed the stretch load, so the reload is unaffected
        let tension = reloaded_tension(0.0, stretch, na::Vector3::new(0.0, 2.072, 3.729));
        assert_relative_eq!(tension, 17126.0, epsilon = 0.5);

        let tension = reloaded_tension(0.0, stretch, na::Vector3::new(0.0, 1.405, 2.099));
        assert_relative_eq!(tension, 12147.0, epsilon = 0.5);
    }

    #[test]
    fn test_reloaded_lengths_match() {
        let catenary = catenary_reference();
        let model_reference = model(60.0, 0.0);
        let model_reloaded = model(0.0, 0.0);

        let reloader = CatenaryCableReloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_reloaded: &model_reloaded,
            weight_unit_reloaded: na::Vector3::new(0.0, 1.405, 2.099),
        };

        let reloaded = reloader.catenary_reloaded().unwrap();

        // the strained cable length and the curve length agree at the solution
        let model_unloaded = model(32.0, 0.0);
        let strainer = CableStrainer {
            length_start: reloader.length_unloaded_unstretched().unwrap(),
            load_start: 0.0,
            load_finish: reloaded.tension_average(TENSION_AVERAGE_POINTS),
            model_start: &model_unloaded,
            model_finish: &model_reloaded,
        };

        assert_relative_eq!(
            reloaded.length(),
            strainer.length_finish().unwrap(),
            epsilon = 0.01
        );
    }
}
