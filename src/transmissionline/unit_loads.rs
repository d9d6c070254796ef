use nalgebra as na;

use crate::base::shapes::Cylinder;
use crate::transmissionline::weather::WeatherLoadCase;

/// Converts a weather case into a unit-length load vector on a cable.
///
/// The components of the result are (0, transverse wind load, vertical
/// gravity load). Diameter and ice thickness must share the same linear
/// unit, and that unit must be consistent with the wind pressure and ice
/// density so the products are loads per unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitLoadCalculator {
    pub diameter_cable: f64,
    pub weight_unit_cable: f64,
}

impl UnitLoadCalculator {
    pub fn new(diameter_cable: f64, weight_unit_cable: f64) -> Self {
        Self {
            diameter_cable,
            weight_unit_cable,
        }
    }

    /// The unit load on the cable for a weather case.
    pub fn unit_cable_load(&self, weathercase: &WeatherLoadCase) -> na::Vector3<f64> {
        let cylinder_bare = Cylinder::new(self.diameter_cable, 1.0);
        let cylinder_iced = Cylinder::new(
            self.diameter_cable + 2.0 * weathercase.thickness_ice,
            1.0,
        );

        let volume_ice = cylinder_iced.volume() - cylinder_bare.volume();
        let weight_ice = volume_ice * weathercase.density_ice;

        na::Vector3::new(
            0.0,
            cylinder_iced.diameter * cylinder_iced.length * weathercase.pressure_wind,
            self.weight_unit_cable + weight_ice,
        )
    }

    pub fn validate(&self, _is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.diameter_cable <= 0.0 {
            is_valid = false;
            messages.push("UNIT LOAD CALCULATOR - Invalid cable diameter".to_string());
        }

        if self.weight_unit_cable <= 0.0 {
            is_valid = false;
            messages.push("UNIT LOAD CALCULATOR - Invalid cable unit weight".to_string());
        }

        is_valid
    }
}
