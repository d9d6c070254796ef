use serde::{Deserialize, Serialize};

/// A cylinder, used for modeling bare and iced cable cross sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub diameter: f64,
    pub length: f64,
}

impl Cylinder {
    pub fn new(diameter: f64, length: f64) -> Self {
        Self { diameter, length }
    }

    pub fn area_cross_section(&self) -> f64 {
        (std::f64::consts::PI / 4.0) * self.diameter.powi(2)
    }

    pub fn volume(&self) -> f64 {
        self.area_cross_section() * self.length
    }

    pub fn validate(&self, _is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.diameter <= 0.0 {
            is_valid = false;
            messages.push("CYLINDER - Invalid diameter".to_string());
        }

        if self.length <= 0.0 {
            is_valid = false;
            messages.push("CYLINDER - Invalid length".to_string());
        }

        is_valid
    }
}
