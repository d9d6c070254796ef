use nalgebra as na;

use crate::base::iterate::{
    solve_bracketed, BracketPoint, ResidualDirection, SolveError, StopCriterion,
};
use crate::sagtension::elongation_model::CableElongationModel;
use crate::sagtension::reloader::CatenaryCableReloader;
use crate::sagtension::state::{CableState, CableStretchState};
use crate::sagtension::unloader::CatenaryCableUnloader;
use crate::sagtension::{SagTensionError, TENSION_AVERAGE_POINTS};
use crate::transmissionline::cable::PolynomialType;
use crate::transmissionline::catenary::Catenary3d;
use crate::transmissionline::line_cable::{CableCondition, LineCable};

/// Solves the loading state of a line cable.
///
/// One solve runs the whole cycle: the constraint catenary is fitted at the
/// ruling span, the three cable models (constraint, creep stretch, load
/// stretch) are initialized, the constraint model stretch is resolved
/// (iteratively when the constraint condition is itself a stretched one), and
/// the creep and load stretch states are found by reloading the constraint
/// catenary into their weather cases.
#[derive(Debug, Clone)]
pub struct LineCableLoaderBase {
    line_cable: LineCable,
    catenary_constraint: Catenary3d,
    model_constraint: CableElongationModel,
    model_creep: CableElongationModel,
    model_load: CableElongationModel,
    state_stretch_creep: CableStretchState,
    state_stretch_load: CableStretchState,
}

impl LineCableLoaderBase {
    pub fn new(line_cable: LineCable) -> Result<Self, SagTensionError> {
        let catenary_constraint = line_cable.catenary_ruling_span()?;

        // the stretch models evaluate at their own weather case temperature
        // and are never themselves stretched
        let temperature_creep = line_cable.weathercase_stretch_creep.temperature_cable;
        let model_creep = CableElongationModel::new(
            line_cable.cable.clone(),
            CableState {
                temperature: temperature_creep,
                type_polynomial: PolynomialType::Creep,
            },
            CableStretchState {
                temperature: temperature_creep,
                type_polynomial: PolynomialType::Creep,
                load: 0.0,
            },
        )?;

        let temperature_load = line_cable.weathercase_stretch_load.temperature_cable;
        let model_load = CableElongationModel::new(
            line_cable.cable.clone(),
            CableState {
                temperature: temperature_load,
                type_polynomial: PolynomialType::LoadStrain,
            },
            CableStretchState {
                temperature: temperature_load,
                type_polynomial: PolynomialType::LoadStrain,
                load: 0.0,
            },
        )?;

        // the constraint model starts unstretched; a creep or load condition
        // requires solving the stretch load it was strung with
        let state_constraint = CableState {
            temperature: line_cable.constraint.case_weather.temperature_cable,
            type_polynomial: PolynomialType::LoadStrain,
        };
        let state_stretch_constraint = match line_cable.constraint.condition {
            CableCondition::Initial => CableStretchState::unstretched(),
            CableCondition::Creep => CableStretchState {
                temperature: temperature_creep,
                type_polynomial: PolynomialType::Creep,
                load: 0.0,
            },
            CableCondition::Load => CableStretchState {
                temperature: temperature_load,
                type_polynomial: PolynomialType::LoadStrain,
                load: 0.0,
            },
        };

        let model_constraint = match line_cable.constraint.condition {
            CableCondition::Initial => CableElongationModel::new(
                line_cable.cable.clone(),
                state_constraint,
                state_stretch_constraint,
            )?,
            CableCondition::Creep => Self::solve_constraint_stretch(
                &line_cable,
                &catenary_constraint,
                state_constraint,
                state_stretch_constraint,
                &model_creep,
                line_cable.unit_load(&line_cable.weathercase_stretch_creep),
            )?,
            CableCondition::Load => Self::solve_constraint_stretch(
                &line_cable,
                &catenary_constraint,
                state_constraint,
                state_stretch_constraint,
                &model_load,
                line_cable.unit_load(&line_cable.weathercase_stretch_load),
            )?,
        };

        // with the constraint resolved, each remaining stretch state follows
        // from a single reload into its weather case
        let state_stretch_creep = if line_cable.constraint.condition == CableCondition::Creep {
            *model_constraint.state_stretch()
        } else {
            let reloader = CatenaryCableReloader {
                catenary: &catenary_constraint,
                model_reference: &model_constraint,
                model_reloaded: &model_creep,
                weight_unit_reloaded: line_cable.unit_load(&line_cable.weathercase_stretch_creep),
            };
            CableStretchState {
                temperature: model_creep.state().temperature,
                type_polynomial: model_creep.state().type_polynomial,
                load: reloader
                    .catenary_reloaded()?
                    .tension_average(TENSION_AVERAGE_POINTS),
            }
        };

        let state_stretch_load = if line_cable.constraint.condition == CableCondition::Load {
            *model_constraint.state_stretch()
        } else {
            let reloader = CatenaryCableReloader {
                catenary: &catenary_constraint,
                model_reference: &model_constraint,
                model_reloaded: &model_load,
                weight_unit_reloaded: line_cable.unit_load(&line_cable.weathercase_stretch_load),
            };
            CableStretchState {
                temperature: model_load.state().temperature,
                type_polynomial: model_load.state().type_polynomial,
                load: reloader
                    .catenary_reloaded()?
                    .tension_average(TENSION_AVERAGE_POINTS),
            }
        };

        Ok(Self {
            line_cable,
            catenary_constraint,
            model_constraint,
            model_creep,
            model_load,
            state_stretch_creep,
            state_stretch_load,
        })
    }

    pub fn line_cable(&self) -> &LineCable {
        &self.line_cable
    }

    pub fn catenary_constraint(&self) -> &Catenary3d {
        &self.catenary_constraint
    }

    pub fn model_constraint(&self) -> &CableElongationModel {
        &self.model_constraint
    }

    pub fn model_creep(&self) -> &CableElongationModel {
        &self.model_creep
    }

    pub fn model_load(&self) -> &CableElongationModel {
        &self.model_load
    }

    pub fn stretch_state_creep(&self) -> &CableStretchState {
        &self.state_stretch_creep
    }

    pub fn stretch_state_load(&self) -> &CableStretchState {
        &self.state_stretch_load
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if !self.line_cable.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if !self
            .catenary_constraint
            .validate(is_included_warnings, messages)
        {
            is_valid = false;
        }

        is_valid
    }

    /// Solves the stretch load of a constraint strung at a creep or load
    /// condition: the load where reloading the constraint catenary into the
    /// stretch weather case reproduces that same load as average tension.
    fn solve_constraint_stretch(
        line_cable: &LineCable,
        catenary_constraint: &Catenary3d,
        state_constraint: CableState,
        state_stretch: CableStretchState,
        model_reloaded: &CableElongationModel,
        weight_unit_reloaded: na::Vector3<f64>,
    ) -> Result<CableElongationModel, SagTensionError> {
        let residual = |load: f64| -> Result<f64, SagTensionError> {
            let model_constraint = CableElongationModel::new(
                line_cable.cable.clone(),
                state_constraint,
                CableStretchState {
                    load,
                    ..state_stretch
                },
            )?;

            let reloader = CatenaryCableReloader {
                catenary: catenary_constraint,
                model_reference: &model_constraint,
                model_reloaded,
                weight_unit_reloaded,
            };

            let tension_average = reloader
                .catenary_reloaded()?
                .tension_average(TENSION_AVERAGE_POINTS);
            Ok(tension_average - load)
        };

        // the stretch load cannot exceed the rated strength
        let left = BracketPoint::new(0.0, residual(0.0)?);
        let right_x = line_cable.cable.strength_rated;
        let right = BracketPoint::new(right_x, residual(right_x)?);

        let load_stretch = solve_bracketed(
            residual,
            0.0,
            left,
            right,
            ResidualDirection::Decreasing,
            StopCriterion::ResidualMatch(0.01),
            false,
        )
        .map_err(|error| match error {
            SolveError::IterationLimit => SagTensionError::StretchNotConverged,
            SolveError::Residual(error) => error,
        })?;

        Ok(CableElongationModel::new(
            line_cable.cable.clone(),
            state_constraint,
            CableStretchState {
                load: load_stretch,
                ..state_stretch
            },
        )?)
    }
}

/// Solves the unloaded length of a line cable at a condition and temperature.
///
/// The constraint catenary parameters are applied at the caller's attachment
/// spacing (which need not match the ruling span) and the cable is unloaded
/// with a model carrying the stretch of the requested condition.
#[derive(Debug, Clone)]
pub struct LineCableUnloader {
    base: LineCableLoaderBase,
    condition_unloaded: CableCondition,
    spacing_attachments: na::Vector3<f64>,
    temperature_unloaded: f64,
    length_unloaded: f64,
}

impl LineCableUnloader {
    pub fn new(
        line_cable: LineCable,
        condition_unloaded: CableCondition,
        spacing_attachments: na::Vector3<f64>,
        temperature_unloaded: f64,
    ) -> Result<Self, SagTensionError> {
        let base = LineCableLoaderBase::new(line_cable)?;

        let state_stretch = match condition_unloaded {
            CableCondition::Initial => CableStretchState::unstretched(),
            CableCondition::Creep => *base.stretch_state_creep(),
            CableCondition::Load => *base.stretch_state_load(),
        };

        let model_unloaded = CableElongationModel::new(
            base.line_cable().cable.clone(),
            CableState {
                temperature: temperature_unloaded,
                type_polynomial: PolynomialType::LoadStrain,
            },
            state_stretch,
        )?;

        // the constraint catenary, restrung at the attachment spacing
        let catenary = base
            .catenary_constraint()
            .with_spacing_endpoints(spacing_attachments)?;

        let unloader = CatenaryCableUnloader {
            catenary: &catenary,
            model_reference: base.model_constraint(),
            model_unloaded: &model_unloaded,
        };
        let length_unloaded = unloader.length_unloaded()?;

        Ok(Self {
            base,
            condition_unloaded,
            spacing_attachments,
            temperature_unloaded,
            length_unloaded,
        })
    }

    /// The unloaded cable length.
    pub fn length_unloaded(&self) -> f64 {
        self.length_unloaded
    }

    pub fn base(&self) -> &LineCableLoaderBase {
        &self.base
    }

    pub fn condition_unloaded(&self) -> CableCondition {
        self.condition_unloaded
    }

    pub fn spacing_attachments(&self) -> na::Vector3<f64> {
        self.spacing_attachments
    }

    pub fn temperature_unloaded(&self) -> f64 {
        self.temperature_unloaded
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = self.base.validate(is_included_warnings, messages);

        if self.spacing_attachments.x <= 0.0 {
            is_valid = false;
            messages.push("LINE CABLE UNLOADER - Invalid horizontal attachment spacing".to_string());
        }

        if self.spacing_attachments.y != 0.0 {
            is_valid = false;
            messages.push("LINE CABLE UNLOADER - Invalid transverse attachment spacing".to_string());
        }

        if 2000.0 < self.spacing_attachments.z.abs() {
            is_valid = false;
            messages.push("LINE CABLE UNLOADER - Invalid vertical attachment spacing".to_string());
        }

        if self.temperature_unloaded < -50.0 {
            is_valid = false;
            messages.push("LINE CABLE UNLOADER - Invalid unloaded temperature".to_string());
        }

        is_valid
    }
}
