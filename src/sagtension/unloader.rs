use crate::sagtension::component_elongation::ElongationError;
use crate::sagtension::elongation_model::CableElongationModel;
use crate::sagtension::strainer::CableStrainer;
use crate::sagtension::TENSION_AVERAGE_POINTS;
use crate::transmissionline::catenary::Catenary3d;

/// Unloads a catenary-shaped cable to a zero-load state.
///
/// The loaded cable is the catenary curve; its varying tension is converted
/// to the constant effective tension before straining. The unloaded cable is
/// a straight segment, no longer modeled as a catenary.
#[derive(Debug, Clone, Copy)]
pub struct CatenaryCableUnloader<'a> {
    /// The loaded cable geometry.
    pub catenary: &'a Catenary3d,
    /// The elongation model in the loaded state.
    pub model_reference: &'a CableElongationModel,
    /// The elongation model in the unloaded state.
    pub model_unloaded: &'a CableElongationModel,
}

impl CatenaryCableUnloader<'_> {
    /// The cable length in the unloaded state.
    pub fn length_unloaded(&self) -> Result<f64, ElongationError> {
        let strainer = CableStrainer {
            length_start: self.catenary.length(),
            load_start: self.catenary.tension_average(TENSION_AVERAGE_POINTS),
            load_finish: 0.0,
            model_start: self.model_reference,
            model_finish: self.model_unloaded,
        };

        strainer.length_finish()
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if !self.catenary.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        // catenary loading can never be lighter than the bare cable
        if self.catenary.weight_unit().magnitude() < self.model_reference.cable().weight_unit {
            is_valid = false;
            messages.push(
                "CATENARY CABLE UNLOADER - Catenary unit weight is less than the cable unit \
                 weight"
                    .to_string(),
            );
        }

        if !self.model_reference.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if !self.model_unloaded.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::sagtension::state::{CableState, CableStretchState};
    use crate::transmissionline::cable::PolynomialType;
    use approx::assert_relative_eq;
    use nalgebra as na;

    fn model(temperature: f64) -> CableElongationModel {
        CableElongationModel::new(
            fixtures::cable_drake(),
            CableState {
                temperature,
                type_polynomial: PolynomialType::LoadStrain,
            },
            CableStretchState::unstretched(),
        )
        .unwrap()
    }

    fn catenary() -> Catenary3d {
        Catenary3d::new(
            6000.0,
            na::Vector3::new(0.0, 0.0, 1.094),
            na::Vector3::new(1200.0, 0.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_length_unloaded() {
        let catenary = catenary();
        let model_reference = model(60.0);
        let model_unloaded = model(32.0);

        let unloader = CatenaryCableUnloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_unloaded: &model_unloaded,
        };

        assert_relative_eq!(unloader.length_unloaded().unwrap(), 1200.8179, epsilon = 0.005);
    }

    #[test]
    fn test_unloaded_shorter_than_curve() {
        let catenary = catenary();
        let model_reference = model(60.0);
        let model_unloaded = model(60.0);

        let unloader = CatenaryCableUnloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_unloaded: &model_unloaded,
        };

        let length = unloader.length_unloaded().unwrap();
        assert!(length < catenary.length());
        assert!(length > catenary.spacing_endpoints().magnitude() - 1.0);
    }

    #[test]
    fn test_validate_rejects_light_catenary_weight() {
        let catenary = Catenary3d::new(
            6000.0,
            na::Vector3::new(0.0, 0.0, 0.5),
            na::Vector3::new(1200.0, 0.0, 0.0),
        )
        .unwrap();
        let model_reference = model(60.0);
        let model_unloaded = model(32.0);

        let unloader = CatenaryCableUnloader {
            catenary: &catenary,
            model_reference: &model_reference,
            model_unloaded: &model_unloaded,
        };

        let mut messages = Vec::new();
        assert!(!unloader.validate(false, &mut messages));
        assert!(messages
            .iter()
            .any(|m| m.contains("less than the cable unit weight")));
    }
}
