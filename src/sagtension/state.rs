use serde::{Deserialize, Serialize};

use crate::transmissionline::cable::PolynomialType;

/// The thermal and material regime a cable is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableState {
    pub temperature: f64,
    pub type_polynomial: PolynomialType,
}

impl CableState {
    pub fn validate(&self, _is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.temperature < -100.0 {
            is_valid = false;
            messages.push("CABLE STATE - Invalid temperature".to_string());
        }

        is_valid
    }
}

/// The permanent stretch historically induced into a cable: the load it was
/// stretched to, at which temperature, and under which polynomial regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableStretchState {
    pub temperature: f64,
    pub type_polynomial: PolynomialType,
    pub load: f64,
}

impl CableStretchState {
    /// A state describing a cable that was never stretched.
    pub fn unstretched() -> Self {
        Self {
            temperature: 0.0,
            type_polynomial: PolynomialType::LoadStrain,
            load: 0.0,
        }
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = CableState {
            temperature: self.temperature,
            type_polynomial: self.type_polynomial,
        }
        .validate(is_included_warnings, messages);

        if self.load < 0.0 {
            is_valid = false;
            messages.push("CABLE STRETCH STATE - Invalid stretch load".to_string());
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let state = CableState {
            temperature: 60.0,
            type_polynomial: PolynomialType::LoadStrain,
        };

        let mut messages = Vec::new();
        assert!(state.validate(true, &mut messages));

        let state = CableState {
            temperature: -300.0,
            type_polynomial: PolynomialType::Creep,
        };
        assert!(!state.validate(true, &mut messages));
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_stretch_state_validate() {
        let mut messages = Vec::new();
        assert!(CableStretchState::unstretched().validate(true, &mut messages));

        let state = CableStretchState {
            load: -1.0,
            ..CableStretchState::unstretched()
        };
        assert!(!state.validate(true, &mut messages));
        assert_eq!(messages.len(), 1);
    }
}
