use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::transmissionline::cable::Cable;
use crate::transmissionline::catenary::Catenary3d;
use crate::transmissionline::catenary_solver::{CatenarySolver, CatenaryTarget, SolverError};
use crate::transmissionline::unit_loads::UnitLoadCalculator;
use crate::transmissionline::weather::WeatherLoadCase;

/// The historic loading condition a cable is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CableCondition {
    /// Never stretched.
    Initial,
    /// Stretched by long-term creep.
    Creep,
    /// Stretched by a heavy weather loading.
    Load,
}

/// The quantity a cable constraint limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintLimitType {
    HorizontalTension,
    CatenaryConstant,
    SupportTension,
}

/// A design limit on cable tension at a specific weather case and condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableConstraint {
    pub case_weather: WeatherLoadCase,
    pub condition: CableCondition,
    pub limit: f64,
    pub type_limit: ConstraintLimitType,
}

impl CableConstraint {
    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if !self.case_weather.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if self.limit < 0.0 {
            is_valid = false;
            messages.push("CABLE CONSTRAINT - Invalid limit".to_string());
        }

        is_valid
    }
}

/// A cable strung at a ruling span, with the constraint that fixes its
/// tension and the weather cases that induce permanent stretch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCable {
    pub cable: Cable,
    pub constraint: CableConstraint,
    /// Ruling-span attachment spacing used to form the constraint catenary.
    pub spacing_attachments_ruling_span: na::Vector3<f64>,
    pub weathercase_stretch_creep: WeatherLoadCase,
    pub weathercase_stretch_load: WeatherLoadCase,
}

impl LineCable {
    /// The unit load on the cable for a weather case.
    pub fn unit_load(&self, weathercase: &WeatherLoadCase) -> na::Vector3<f64> {
        let calculator = UnitLoadCalculator::new(self.cable.diameter, self.cable.weight_unit);
        calculator.unit_cable_load(weathercase)
    }

    /// The catenary at the ruling span, fitted to the constraint limit under
    /// the constraint weather case.
    pub fn catenary_ruling_span(&self) -> Result<Catenary3d, SolverError> {
        let weight_unit = self.unit_load(&self.constraint.case_weather);

        match self.constraint.type_limit {
            ConstraintLimitType::HorizontalTension => Ok(Catenary3d::new(
                self.constraint.limit,
                weight_unit,
                self.spacing_attachments_ruling_span,
            )?),
            ConstraintLimitType::CatenaryConstant => {
                let solver = CatenarySolver {
                    spacing_endpoints: self.spacing_attachments_ruling_span,
                    weight_unit,
                    type_target: CatenaryTarget::Constant,
                    value_target: self.constraint.limit,
                    position_target: None,
                };
                solver.catenary()
            }
            ConstraintLimitType::SupportTension => {
                let solver = CatenarySolver {
                    spacing_endpoints: self.spacing_attachments_ruling_span,
                    weight_unit,
                    type_target: CatenaryTarget::SupportTension,
                    value_target: self.constraint.limit,
                    position_target: None,
                };
                solver.catenary()
            }
        }
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if !self.cable.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if !self.constraint.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if self.spacing_attachments_ruling_span.x <= 0.0 {
            is_valid = false;
            messages.push("LINE CABLE - Invalid horizontal ruling span spacing".to_string());
        }

        if self.spacing_attachments_ruling_span.y != 0.0 {
            is_valid = false;
            messages.push("LINE CABLE - Invalid transverse ruling span spacing".to_string());
        }

        if 2000.0 < self.spacing_attachments_ruling_span.z.abs() {
            is_valid = false;
            messages.push("LINE CABLE - Invalid vertical ruling span spacing".to_string());
        }

        if !self
            .weathercase_stretch_creep
            .validate(is_included_warnings, messages)
        {
            is_valid = false;
        }

        if !self
            .weathercase_stretch_load
            .validate(is_included_warnings, messages)
        {
            is_valid = false;
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use approx::assert_relative_eq;

    #[test]
    fn test_catenary_ruling_span_horizontal_tension() {
        let line_cable = fixtures::line_cable_drake();
        let catenary = line_cable.catenary_ruling_span().unwrap();

        assert_relative_eq!(catenary.tension_horizontal(), 6000.0);
        assert_relative_eq!(catenary.weight_unit().z, 1.094);
        assert_relative_eq!(catenary.spacing_endpoints().x, 1200.0);
    }

    #[test]
    fn test_catenary_ruling_span_constant() {
        let mut line_cable = fixtures::line_cable_drake();
        line_cable.constraint.type_limit = ConstraintLimitType::CatenaryConstant;
        line_cable.constraint.limit = 5000.0;

        let catenary = line_cable.catenary_ruling_span().unwrap();
        assert_relative_eq!(catenary.constant(), 5000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_catenary_ruling_span_support_tension() {
        let mut line_cable = fixtures::line_cable_drake();
        line_cable.constraint.type_limit = ConstraintLimitType::SupportTension;
        line_cable.constraint.limit = 6000.0;

        let catenary = line_cable.catenary_ruling_span().unwrap();
        assert_relative_eq!(catenary.tension_max(), 6000.0, epsilon = 0.01);
        assert!(catenary.tension_horizontal() < 6000.0);
    }

    #[test]
    fn test_unit_load_uses_constraint_weathercase() {
        let line_cable = fixtures::line_cable_drake();
        let load = line_cable.unit_load(&line_cable.weathercase_stretch_load);

        assert_relative_eq!(load.y, 1.405, epsilon = 0.001);
        assert_relative_eq!(load.z, 2.099, epsilon = 0.001);
    }

    #[test]
    fn test_validate() {
        let line_cable = fixtures::line_cable_drake();
        let mut messages = Vec::new();
        assert!(line_cable.validate(true, &mut messages));
        assert!(messages.is_empty());

        let mut bad = fixtures::line_cable_drake();
        bad.spacing_attachments_ruling_span = na::Vector3::new(0.0, 1.0, 0.0);
        assert!(!bad.validate(true, &mut messages));
        assert_eq!(messages.len(), 2);
    }
}
