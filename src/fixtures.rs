//! Shared test fixtures: a Drake ACSR conductor and the line cable built
//! around it.

use nalgebra as na;

use crate::transmissionline::cable::{Cable, CableComponent, PolynomialType};
use crate::transmissionline::line_cable::{
    CableCondition, CableConstraint, ConstraintLimitType, LineCable,
};
use crate::transmissionline::weather::WeatherLoadCase;

const AREA_PHYSICAL: f64 = 0.7264;

fn scaled(values: [f64; 5]) -> Vec<f64> {
    values.iter().map(|v| v * AREA_PHYSICAL).collect()
}

/// A Drake ACSR conductor with no compression stiffness.
pub(crate) fn cable_drake() -> Cable {
    let component_core = CableComponent {
        coefficient_expansion_linear_thermal: 0.000_006_4,
        coefficients_polynomial_creep: scaled([47.1, 36211.3, 12201.4, -72392.0, 46338.0]),
        coefficients_polynomial_loadstrain: scaled([-69.3, 38629.0, 3998.1, -45713.0, 27892.0]),
        load_limit_polynomial_creep: 22406.0 * AREA_PHYSICAL,
        load_limit_polynomial_loadstrain: 19154.0 * AREA_PHYSICAL,
        modulus_compression_elastic_area: 0.0,
        modulus_tension_elastic_area: 37000.0 * AREA_PHYSICAL * 100.0,
    };

    let component_shell = CableComponent {
        coefficient_expansion_linear_thermal: 0.000_012_8,
        coefficients_polynomial_creep: scaled([-544.8, 21426.8, -18842.2, 5495.0, 0.0]),
        coefficients_polynomial_loadstrain: scaled([-1213.0, 44308.1, -14004.4, -37618.0, 30676.0]),
        load_limit_polynomial_creep: 7535.0 * AREA_PHYSICAL,
        load_limit_polynomial_loadstrain: 20252.0 * AREA_PHYSICAL,
        modulus_compression_elastic_area: 0.0,
        modulus_tension_elastic_area: 64000.0 * AREA_PHYSICAL * 100.0,
    };

    Cable {
        name: "ACSR Drake".to_string(),
        area_electrical: 795_000.0,
        area_physical: AREA_PHYSICAL,
        component_core,
        component_shell,
        diameter: 1.108 / 12.0,
        strength_rated: 31_500.0,
        temperature_properties_components: 70.0,
        type_polynomial_active: PolynomialType::LoadStrain,
        weight_unit: 1.094,
    }
}

/// The Drake conductor with the shell carrying compression stiffness.
pub(crate) fn cable_drake_with_compression() -> Cable {
    let mut cable = cable_drake();
    cable.component_shell.modulus_compression_elastic_area = 1500.0 * AREA_PHYSICAL * 100.0;
    cable
}

/// Bare cable at 60°F, no ice or wind.
pub(crate) fn weathercase_bare_60() -> WeatherLoadCase {
    WeatherLoadCase {
        description: "0-0-60".to_string(),
        density_ice: 0.0,
        pressure_wind: 0.0,
        temperature_cable: 60.0,
        thickness_ice: 0.0,
    }
}

/// Half an inch of ice and 8 psf of wind at 0°F.
pub(crate) fn weathercase_iced_0() -> WeatherLoadCase {
    WeatherLoadCase {
        description: "0.5-8-0".to_string(),
        density_ice: 57.3,
        pressure_wind: 8.0,
        temperature_cable: 0.0,
        thickness_ice: 0.5 / 12.0,
    }
}

/// The Drake conductor strung at a 1200 ft ruling span, constrained to 6000
/// lb horizontal tension at the bare 60°F case.
pub(crate) fn line_cable_drake() -> LineCable {
    LineCable {
        cable: cable_drake(),
        constraint: CableConstraint {
            case_weather: weathercase_bare_60(),
            condition: CableCondition::Initial,
            limit: 6000.0,
            type_limit: ConstraintLimitType::HorizontalTension,
        },
        spacing_attachments_ruling_span: na::Vector3::new(1200.0, 0.0, 0.0),
        weathercase_stretch_creep: weathercase_bare_60(),
        weathercase_stretch_load: weathercase_iced_0(),
    }
}
