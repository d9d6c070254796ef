use serde::{Deserialize, Serialize};

/// A weather loading condition applied to a cable. Inputs only; never
/// mutated by the solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLoadCase {
    /// Description, typically formatted as ice-wind-temperature
    /// (e.g. "0.5-8-0").
    pub description: String,
    /// Density of accumulated ice, weight per unit volume.
    pub density_ice: f64,
    /// Wind pressure on the projected cable area.
    pub pressure_wind: f64,
    /// Cable temperature.
    pub temperature_cable: f64,
    /// Radial ice thickness.
    pub thickness_ice: f64,
}

impl WeatherLoadCase {
    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.density_ice < 0.0 || (100.0 < self.density_ice && is_included_warnings) {
            is_valid = false;
            messages.push("WEATHER LOAD CASE - Invalid ice density".to_string());
        }

        if self.pressure_wind < 0.0 || (25.0 < self.pressure_wind && is_included_warnings) {
            is_valid = false;
            messages.push("WEATHER LOAD CASE - Invalid wind pressure".to_string());
        }

        if self.temperature_cable < -100.0 {
            is_valid = false;
            messages.push("WEATHER LOAD CASE - Invalid cable temperature".to_string());
        }

        if self.thickness_ice < 0.0 || (0.5 < self.thickness_ice && is_included_warnings) {
            is_valid = false;
            messages.push("WEATHER LOAD CASE - Invalid ice thickness".to_string());
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weathercase() -> WeatherLoadCase {
        WeatherLoadCase {
            description: "0.5-8-0".to_string(),
            density_ice: 57.3,
            pressure_wind: 8.0,
            temperature_cable: 0.0,
            thickness_ice: 0.5 / 12.0,
        }
    }

    #[test]
    fn test_validate() {
        let mut messages = Vec::new();
        assert!(weathercase().validate(true, &mut messages));

        let mut case = weathercase();
        case.density_ice = -1.0;
        case.pressure_wind = -8.0;
        assert!(!case.validate(false, &mut messages));
        assert_eq!(messages.len(), 2);
    }
}
