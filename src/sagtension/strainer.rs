use crate::sagtension::component_elongation::ElongationError;
use crate::sagtension::elongation_model::{CableElongationModel, ComponentSelector};

/// Transitions a cable length between two states.
///
/// The start and finish are each described by an elongation model and the
/// load carried there. The length change is applied in two steps, a
/// load-based strain transition and a thermal strain transition, both using
/// the generic strain equation. Positive transitions multiply and negative
/// transitions divide, so straining by ε and then by −ε restores the
/// starting length exactly.
#[derive(Debug, Clone, Copy)]
pub struct CableStrainer<'a> {
    pub length_start: f64,
    pub load_start: f64,
    pub load_finish: f64,
    pub model_start: &'a CableElongationModel,
    pub model_finish: &'a CableElongationModel,
}

impl CableStrainer<'_> {
    /// The cable length in the finish state.
    pub fn length_finish(&self) -> Result<f64, ElongationError> {
        let strain_transition_load = self.strain_transition_load()?;
        let length = Self::length_after_strain(self.length_start, strain_transition_load);

        let strain_transition_thermal = self.strain_transition_thermal()?;
        Ok(Self::length_after_strain(length, strain_transition_thermal))
    }

    /// The load carried by the core component in the finish state.
    pub fn load_finish_core(&self) -> Result<f64, ElongationError> {
        let strain =
            self.model_finish
                .strain(ComponentSelector::Combined, self.load_finish, true)?;
        Ok(self.model_finish.load(ComponentSelector::Core, strain, true))
    }

    /// The load carried by the shell component in the finish state.
    pub fn load_finish_shell(&self) -> Result<f64, ElongationError> {
        let strain =
            self.model_finish
                .strain(ComponentSelector::Combined, self.load_finish, true)?;
        Ok(self.model_finish.load(ComponentSelector::Shell, strain, true))
    }

    /// The elastic strain difference between the loaded finish and loaded
    /// start states, each measured from its unstretched zero-load strain.
    fn strain_transition_load(&self) -> Result<f64, ElongationError> {
        let strain_start_unloaded = self
            .model_start
            .strain(ComponentSelector::Combined, 0.0, false)?;
        let strain_start_loaded =
            self.model_start
                .strain(ComponentSelector::Combined, self.load_start, true)?;

        let strain_finish_unloaded = self
            .model_finish
            .strain(ComponentSelector::Combined, 0.0, false)?;
        let strain_finish_loaded =
            self.model_finish
                .strain(ComponentSelector::Combined, self.load_finish, true)?;

        Ok((strain_finish_loaded - strain_finish_unloaded)
            - (strain_start_loaded - strain_start_unloaded))
    }

    /// The thermal strain difference between the finish and start states,
    /// from their unstretched zero-load strains.
    fn strain_transition_thermal(&self) -> Result<f64, ElongationError> {
        let strain_start = self
            .model_start
            .strain(ComponentSelector::Combined, 0.0, false)?;
        let strain_finish = self
            .model_finish
            .strain(ComponentSelector::Combined, 0.0, false)?;

        Ok(strain_finish - strain_start)
    }

    /// Applies a strain transition to a length. Negative transitions solve
    /// the generic strain equation for the initial length instead, so equal
    /// and opposite transitions cancel exactly.
    fn length_after_strain(length: f64, strain_transition: f64) -> f64 {
        if strain_transition < 0.0 {
            length / (1.0 + strain_transition.abs())
        } else {
            length * (1.0 + strain_transition)
        }
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.length_start <= 0.0 {
            is_valid = false;
            messages.push("CABLE STRAINER - Invalid start length".to_string());
        }

        if self.load_start < 0.0 {
            is_valid = false;
            messages.push("CABLE STRAINER - Invalid start load".to_string());
        }

        if self.load_finish < 0.0 {
            is_valid = false;
            messages.push("CABLE STRAINER - Invalid finish load".to_string());
        }

        if is_valid {
            if !self.model_start.validate(is_included_warnings, messages) {
                is_valid = false;
            }
            if !self.model_finish.validate(is_included_warnings, messages) {
                is_valid = false;
            }
        }

        is_valid
    }
}
