use nalgebra as na;

use crate::base::iterate::{
    solve_bracketed, BracketPoint, ResidualDirection, SolveError, StopCriterion,
};
use crate::sagtension::component_elongation::{CableComponentElongationModel, ElongationError};
use crate::sagtension::state::{CableState, CableStretchState};
use crate::transmissionline::cable::{Cable, PolynomialType};

/// Which part of the cable a query addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentSelector {
    Core,
    Shell,
    Combined,
}

/// The strain ↔ load behavior of a whole cable: the sum of its component
/// models, evaluated at a common strain.
///
/// The whole-cable strain for a target load has no closed form. It is solved
/// by a secant iteration bracketed between the region boundary points of the
/// components, which is where the summed curve can change behavior abruptly.
///
/// Stretch is defined for the whole cable and resolved into per-component
/// stretch loads: the components are placed at the stretch temperature and
/// polynomial, the whole-cable strain at the stretch load is solved, and each
/// component keeps the load it carried at that strain.
#[derive(Debug, Clone)]
pub struct CableElongationModel {
    cable: Cable,
    state: CableState,
    state_stretch: CableStretchState,
    model_core: Option<CableComponentElongationModel>,
    model_shell: Option<CableComponentElongationModel>,
    points_regions_unstretched: Vec<na::Point2<f64>>,
    points_regions_stretched: Vec<na::Point2<f64>>,
}

impl CableElongationModel {
    pub fn new(
        cable: Cable,
        state: CableState,
        state_stretch: CableStretchState,
    ) -> Result<Self, ElongationError> {
        let is_enabled_core = cable.component_core.is_enabled(state.type_polynomial);
        let is_enabled_shell = cable.component_shell.is_enabled(state.type_polynomial);
        if !is_enabled_core && !is_enabled_shell {
            return Err(ElongationError::NoEnabledComponents);
        }

        let (load_stretch_core, load_stretch_shell) =
            Self::resolve_component_stretch(&cable, &state, &state_stretch)?;

        let model_core = if is_enabled_core {
            Some(CableComponentElongationModel::new(
                &cable.component_core,
                state.type_polynomial,
                state.temperature,
                cable.temperature_properties_components,
                load_stretch_core,
            )?)
        } else {
            None
        };

        let model_shell = if is_enabled_shell {
            Some(CableComponentElongationModel::new(
                &cable.component_shell,
                state.type_polynomial,
                state.temperature,
                cable.temperature_properties_components,
                load_stretch_shell,
            )?)
        } else {
            None
        };

        let points_regions_unstretched =
            points_discrete_regions(model_core.as_ref(), model_shell.as_ref(), false);
        let points_regions_stretched =
            points_discrete_regions(model_core.as_ref(), model_shell.as_ref(), true);

        Ok(Self {
            cable,
            state,
            state_stretch,
            model_core,
            model_shell,
            points_regions_unstretched,
            points_regions_stretched,
        })
    }

    /// The load at a strain.
    pub fn load(&self, selector: ComponentSelector, strain: f64, is_stretched: bool) -> f64 {
        match selector {
            ComponentSelector::Core => load_component(self.model_core.as_ref(), strain, is_stretched),
            ComponentSelector::Shell => {
                load_component(self.model_shell.as_ref(), strain, is_stretched)
            }
            ComponentSelector::Combined => load_combined(
                self.model_core.as_ref(),
                self.model_shell.as_ref(),
                strain,
                is_stretched,
            ),
        }
    }

    /// The load-strain slope at a strain.
    pub fn slope(&self, selector: ComponentSelector, strain: f64, is_stretched: bool) -> f64 {
        let slope_core = self
            .model_core
            .as_ref()
            .map_or(0.0, |m| m.slope(strain, is_stretched));
        let slope_shell = self
            .model_shell
            .as_ref()
            .map_or(0.0, |m| m.slope(strain, is_stretched));

        match selector {
            ComponentSelector::Core => slope_core,
            ComponentSelector::Shell => slope_shell,
            ComponentSelector::Combined => slope_core + slope_shell,
        }
    }

    /// The strain at a load.
    pub fn strain(
        &self,
        selector: ComponentSelector,
        load: f64,
        is_stretched: bool,
    ) -> Result<f64, ElongationError> {
        match selector {
            ComponentSelector::Core => {
                strain_component(self.model_core.as_ref(), load, is_stretched)
            }
            ComponentSelector::Shell => {
                strain_component(self.model_shell.as_ref(), load, is_stretched)
            }
            ComponentSelector::Combined => strain_combined(
                self.model_core.as_ref(),
                self.model_shell.as_ref(),
                self.points_discrete_regions(is_stretched),
                load,
                is_stretched,
            ),
        }
    }

    /// The region boundary points of the summed curve, sorted by strain.
    pub fn points_discrete_regions(&self, is_stretched: bool) -> &[na::Point2<f64>] {
        if is_stretched {
            &self.points_regions_stretched
        } else {
            &self.points_regions_unstretched
        }
    }

    pub fn cable(&self) -> &Cable {
        &self.cable
    }

    pub fn state(&self) -> &CableState {
        &self.state
    }

    pub fn state_stretch(&self) -> &CableStretchState {
        &self.state_stretch
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if !self.cable.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        if self.state_stretch.load < 0.0 {
            is_valid = false;
            messages.push("CABLE ELONGATION MODEL - Invalid stretch load".to_string());
        }

        if self.state.temperature < -50.0 {
            is_valid = false;
            messages.push("CABLE ELONGATION MODEL - Invalid temperature".to_string());
        }

        if self.state_stretch.temperature < -50.0 {
            is_valid = false;
            messages.push("CABLE ELONGATION MODEL - Invalid stretch temperature".to_string());
        }

        if is_valid && is_included_warnings && !self.validate_components_strain(messages) {
            is_valid = false;
        }

        is_valid
    }

    /// Compares component behavior at the reference temperature: polynomial
    /// limits must exceed the strain at rated strength, and the unloaded
    /// strains of core and shell must roughly agree.
    fn validate_components_strain(&self, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        let state_reference = CableState {
            temperature: self.cable.temperature_properties_components,
            type_polynomial: self.state.type_polynomial,
        };
        let Ok(model) = Self::new(self.cable.clone(), state_reference, self.state_stretch) else {
            messages
                .push("CABLE ELONGATION MODEL - Could not verify component strains".to_string());
            return false;
        };

        let Ok(strain_max) = model.strain(ComponentSelector::Combined, self.cable.strength_rated, false)
        else {
            messages
                .push("CABLE ELONGATION MODEL - Could not verify component strains".to_string());
            return false;
        };

        if let Some(core) = model.model_core.as_ref() {
            if core.point_limit_polynomial().x < strain_max {
                is_valid = false;
                messages.push(
                    "CABLE ELONGATION MODEL - Core polynomial limit is less than the rated \
                     strength of the cable"
                        .to_string(),
                );
            }
        }

        if let Some(shell) = model.model_shell.as_ref() {
            if shell.point_limit_polynomial().x < strain_max {
                is_valid = false;
                messages.push(
                    "CABLE ELONGATION MODEL - Shell polynomial limit is less than the rated \
                     strength of the cable"
                        .to_string(),
                );
            }
        }

        if let (Some(core), Some(shell)) = (model.model_core.as_ref(), model.model_shell.as_ref())
        {
            let difference = core.point_unloaded(false).x - shell.point_unloaded(false).x;
            if 0.0005 < difference.abs() {
                is_valid = false;
                messages.push(
                    "CABLE ELONGATION MODEL - Unloaded strain difference between core and shell \
                     components is excessive"
                        .to_string(),
                );
            }
        }

        is_valid
    }

    /// Splits the whole-cable stretch load into per-component stretch loads.
    fn resolve_component_stretch(
        cable: &Cable,
        state: &CableState,
        state_stretch: &CableStretchState,
    ) -> Result<(f64, f64), ElongationError> {
        // a creep model needs no stretch shift; the creep polynomial already
        // embeds the permanent elongation
        if state_stretch.load == 0.0 || state.type_polynomial == PolynomialType::Creep {
            return Ok((0.0, 0.0));
        }

        // unstretched component models at the stretch temperature/polynomial
        let model_core = if cable.component_core.is_enabled(state_stretch.type_polynomial) {
            Some(CableComponentElongationModel::new(
                &cable.component_core,
                state_stretch.type_polynomial,
                state_stretch.temperature,
                cable.temperature_properties_components,
                0.0,
            )?)
        } else {
            None
        };

        let model_shell = if cable.component_shell.is_enabled(state_stretch.type_polynomial) {
            Some(CableComponentElongationModel::new(
                &cable.component_shell,
                state_stretch.type_polynomial,
                state_stretch.temperature,
                cable.temperature_properties_components,
                0.0,
            )?)
        } else {
            None
        };

        if model_core.is_none() && model_shell.is_none() {
            return Err(ElongationError::NoEnabledComponents);
        }

        let points = points_discrete_regions(model_core.as_ref(), model_shell.as_ref(), false);
        let strain_stretch = strain_combined(
            model_core.as_ref(),
            model_shell.as_ref(),
            &points,
            state_stretch.load,
            false,
        )?;

        Ok((
            load_component(model_core.as_ref(), strain_stretch, false),
            load_component(model_shell.as_ref(), strain_stretch, false),
        ))
    }
}

fn load_component(
    model: Option<&CableComponentElongationModel>,
    strain: f64,
    is_stretched: bool,
) -> f64 {
    model.map_or(0.0, |m| m.load(strain, is_stretched))
}

fn load_combined(
    model_core: Option<&CableComponentElongationModel>,
    model_shell: Option<&CableComponentElongationModel>,
    strain: f64,
    is_stretched: bool,
) -> f64 {
    load_component(model_core, strain, is_stretched)
        + load_component(model_shell, strain, is_stretched)
}

fn strain_component(
    model: Option<&CableComponentElongationModel>,
    load: f64,
    is_stretched: bool,
) -> Result<f64, ElongationError> {
    model.map_or(Ok(0.0), |m| m.strain(load, is_stretched))
}

/// Region boundary points of both components, sorted by strain, with loads
/// recomputed against the summed curve. Up to six points per stretch axis.
fn points_discrete_regions(
    model_core: Option<&CableComponentElongationModel>,
    model_shell: Option<&CableComponentElongationModel>,
    is_stretched: bool,
) -> Vec<na::Point2<f64>> {
    let mut points = Vec::with_capacity(6);
    if let Some(model) = model_core {
        points.extend(model.points_discrete_regions(is_stretched));
    }
    if let Some(model) = model_shell {
        points.extend(model.points_discrete_regions(is_stretched));
    }

    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    // the component points no longer sit on the curve once summed
    for point in &mut points {
        point.y = load_combined(model_core, model_shell, point.x, is_stretched);
    }

    points
}

/// Solves the strain of the summed curve at a target load.
fn strain_combined(
    model_core: Option<&CableComponentElongationModel>,
    model_shell: Option<&CableComponentElongationModel>,
    points: &[na::Point2<f64>],
    load: f64,
    is_stretched: bool,
) -> Result<f64, ElongationError> {
    const STRAIN_EXTENSION: f64 = 0.0005;

    let evaluate = |strain: f64| load_combined(model_core, model_shell, strain, is_stretched);

    // brackets the target load between region points, extending past the
    // extremes when it falls outside every region
    let (left, right) = if load < points[0].y {
        let x = points[0].x - STRAIN_EXTENSION;
        (
            BracketPoint::new(x, evaluate(x)),
            BracketPoint::new(points[0].x, points[0].y),
        )
    } else if let Some(index) = points.iter().position(|p| load < p.y) {
        (
            BracketPoint::new(points[index - 1].x, points[index - 1].y),
            BracketPoint::new(points[index].x, points[index].y),
        )
    } else {
        let last = points[points.len() - 1];
        let x = last.x + STRAIN_EXTENSION;
        (
            BracketPoint::new(last.x, last.y),
            BracketPoint::new(x, evaluate(x)),
        )
    };

    solve_bracketed(
        |strain| Ok::<f64, ElongationError>(evaluate(strain)),
        load,
        left,
        right,
        ResidualDirection::Increasing,
        StopCriterion::ResidualMatch(0.01),
        false,
    )
    .map_err(|error| match error {
        SolveError::IterationLimit => ElongationError::StrainNotConverged,
        SolveError::Residual(error) => error,
    })
}
