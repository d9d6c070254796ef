use serde::{Deserialize, Serialize};

/// Selects which empirical polynomial of a cable component is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolynomialType {
    /// Long-term creep elongation.
    Creep,
    /// Short-term load elongation.
    LoadStrain,
}

/// One component (core or shell) of a bimetallic cable.
///
/// The polynomial coefficients relate percent strain (at the cable reference
/// temperature) to load, and are ordered from the constant term upward. The
/// elastic area moduli are the product of the component elastic modulus and
/// the component area, so multiplying by strain yields a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableComponent {
    /// Linear thermal expansion coefficient, strain per degree.
    pub coefficient_expansion_linear_thermal: f64,
    pub coefficients_polynomial_creep: Vec<f64>,
    pub coefficients_polynomial_loadstrain: Vec<f64>,
    /// Maximum load the creep polynomial is valid for.
    pub load_limit_polynomial_creep: f64,
    /// Maximum load the load-strain polynomial is valid for.
    pub load_limit_polynomial_loadstrain: f64,
    pub modulus_compression_elastic_area: f64,
    pub modulus_tension_elastic_area: f64,
}

impl CableComponent {
    pub fn coefficients(&self, type_polynomial: PolynomialType) -> &[f64] {
        match type_polynomial {
            PolynomialType::Creep => &self.coefficients_polynomial_creep,
            PolynomialType::LoadStrain => &self.coefficients_polynomial_loadstrain,
        }
    }

    pub fn load_limit(&self, type_polynomial: PolynomialType) -> f64 {
        match type_polynomial {
            PolynomialType::Creep => self.load_limit_polynomial_creep,
            PolynomialType::LoadStrain => self.load_limit_polynomial_loadstrain,
        }
    }

    /// A component participates in the cable model only if the selected
    /// polynomial has at least one non-zero coefficient.
    pub fn is_enabled(&self, type_polynomial: PolynomialType) -> bool {
        self.coefficients(type_polynomial).iter().any(|&c| c != 0.0)
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.coefficient_expansion_linear_thermal < -0.005
            || 0.005 < self.coefficient_expansion_linear_thermal
        {
            is_valid = false;
            messages.push("CABLE COMPONENT - Invalid coefficient of thermal expansion".to_string());
        }

        if self.load_limit_polynomial_creep < 0.0 {
            is_valid = false;
            messages.push("CABLE COMPONENT - Invalid creep polynomial limit".to_string());
        }

        if self.load_limit_polynomial_loadstrain < 0.0 {
            is_valid = false;
            messages.push("CABLE COMPONENT - Invalid load-strain polynomial limit".to_string());
        }

        if self.modulus_compression_elastic_area < 0.0 {
            is_valid = false;
            messages.push("CABLE COMPONENT - Invalid compression elastic area modulus".to_string());
        }

        if self.modulus_tension_elastic_area <= 0.0
            || (100_000_000.0 < self.modulus_tension_elastic_area && is_included_warnings)
        {
            is_valid = false;
            messages.push("CABLE COMPONENT - Invalid tension elastic area modulus".to_string());
        }

        is_valid
    }
}

/// A bimetallic cable: physical properties plus the core and shell component
/// elongation definitions. Either component may be disabled by zeroing its
/// polynomial coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cable {
    pub name: String,
    pub area_electrical: f64,
    pub area_physical: f64,
    pub component_core: CableComponent,
    pub component_shell: CableComponent,
    pub diameter: f64,
    pub strength_rated: f64,
    /// Temperature the component polynomials and moduli are defined at.
    pub temperature_properties_components: f64,
    pub type_polynomial_active: PolynomialType,
    /// Bare cable weight per unit length.
    pub weight_unit: f64,
}

impl Cable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.area_electrical < 0.0 {
            is_valid = false;
            messages.push("CABLE - Invalid electrical area".to_string());
        }

        if self.area_physical <= 0.0 {
            is_valid = false;
            messages.push("CABLE - Invalid physical area".to_string());
        }

        if self.diameter <= 0.0 {
            is_valid = false;
            messages.push("CABLE - Invalid diameter".to_string());
        }

        if self.strength_rated <= 0.0 {
            is_valid = false;
            messages.push("CABLE - Invalid rated strength".to_string());
        }

        if self.temperature_properties_components < -50.0 {
            is_valid = false;
            messages.push("CABLE - Invalid component properties temperature".to_string());
        }

        if self.weight_unit <= 0.0 || (10.0 < self.weight_unit && is_included_warnings) {
            is_valid = false;
            messages.push("CABLE - Invalid unit weight".to_string());
        }

        if !self.component_core.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if !self.component_shell.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    #[test]
    fn test_validate() {
        let cable = fixtures::cable_drake();
        let mut messages = Vec::new();
        assert!(cable.validate(true, &mut messages));
        assert!(messages.is_empty());

        let mut cable = fixtures::cable_drake();
        cable.diameter = 0.0;
        cable.weight_unit = -1.0;
        assert!(!cable.validate(true, &mut messages));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_component_enabled() {
        use super::PolynomialType;

        let cable = fixtures::cable_drake();
        assert!(cable.component_core.is_enabled(PolynomialType::LoadStrain));
        assert!(cable.component_shell.is_enabled(PolynomialType::Creep));

        let mut cable = fixtures::cable_drake();
        cable.component_core.coefficients_polynomial_loadstrain = vec![0.0; 5];
        assert!(!cable.component_core.is_enabled(PolynomialType::LoadStrain));
    }

    #[test]
    fn test_json_roundtrip() {
        let cable = fixtures::cable_drake();
        let json = cable.to_json().unwrap();
        let parsed = super::Cable::from_json(&json).unwrap();
        assert_eq!(cable, parsed);
    }
}
