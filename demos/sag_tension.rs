use conductor_core::na;
use conductor_core::{
    Cable, CableComponent, CableCondition, CableConstraint, CableState, CableStretchState,
    CatenaryCableReloader, CableElongationModel, ConstraintLimitType, LineCable,
    LineCableLoaderBase, PolynomialType, WeatherLoadCase,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Drake ACSR conductor (imperial units: lb, ft, °F, psf)
    let area = 0.7264;
    let scale = |values: [f64; 5]| values.iter().map(|v| v * area).collect::<Vec<_>>();

    let core = CableComponent {
        coefficient_expansion_linear_thermal: 0.0000064,
        coefficients_polynomial_creep: scale([47.1, 36211.3, 12201.4, -72392.0, 46338.0]),
        coefficients_polynomial_loadstrain: scale([-69.3, 38629.0, 3998.1, -45713.0, 27892.0]),
        load_limit_polynomial_creep: 22406.0 * area,
        load_limit_polynomial_loadstrain: 19154.0 * area,
        modulus_compression_elastic_area: 0.0,
        modulus_tension_elastic_area: 37000.0 * area * 100.0,
    };

    let shell = CableComponent {
        coefficient_expansion_linear_thermal: 0.0000128,
        coefficients_polynomial_creep: scale([-544.8, 21426.8, -18842.2, 5495.0, 0.0]),
        coefficients_polynomial_loadstrain: scale([-1213.0, 44308.1, -14004.4, -37618.0, 30676.0]),
        load_limit_polynomial_creep: 7535.0 * area,
        load_limit_polynomial_loadstrain: 20252.0 * area,
        modulus_compression_elastic_area: 0.0,
        modulus_tension_elastic_area: 64000.0 * area * 100.0,
    };

    let cable = Cable {
        name: "ACSR Drake".to_string(),
        area_electrical: 795_000.0,
        area_physical: area,
        component_core: core,
        component_shell: shell,
        diameter: 1.108 / 12.0,
        strength_rated: 31_500.0,
        temperature_properties_components: 70.0,
        type_polynomial_active: PolynomialType::LoadStrain,
        weight_unit: 1.094,
    };

    let everyday = WeatherLoadCase {
        description: "0-0-60".to_string(),
        density_ice: 0.0,
        pressure_wind: 0.0,
        temperature_cable: 60.0,
        thickness_ice: 0.0,
    };

    let heavy = WeatherLoadCase {
        description: "0.5-8-0".to_string(),
        density_ice: 57.3,
        pressure_wind: 8.0,
        temperature_cable: 0.0,
        thickness_ice: 0.5 / 12.0,
    };

    // Strung at 6000 lb horizontal tension on a 1200 ft ruling span
    let line_cable = LineCable {
        cable: cable.clone(),
        constraint: CableConstraint {
            case_weather: everyday.clone(),
            condition: CableCondition::Initial,
            limit: 6000.0,
            type_limit: ConstraintLimitType::HorizontalTension,
        },
        spacing_attachments_ruling_span: na::Vector3::new(1200.0, 0.0, 0.0),
        weathercase_stretch_creep: everyday,
        weathercase_stretch_load: heavy.clone(),
    };

    let mut messages = Vec::new();
    if !line_cable.validate(true, &mut messages) {
        for message in &messages {
            eprintln!("{message}");
        }
        return Err("line cable failed validation".into());
    }

    let catenary = line_cable.catenary_ruling_span()?;
    println!("Everyday case: {}", line_cable.constraint.case_weather.description);
    println!("  horizontal tension: {:.1} lb", catenary.tension_horizontal());
    println!("  sag:                {:.2} ft", catenary.sag()?);
    println!("  curve length:       {:.2} ft", catenary.length());

    // Reload to the heavy case and report the tension rise
    let model_everyday = CableElongationModel::new(
        cable.clone(),
        CableState {
            temperature: 60.0,
            type_polynomial: PolynomialType::LoadStrain,
        },
        CableStretchState::unstretched(),
    )?;
    let model_heavy = CableElongationModel::new(
        cable,
        CableState {
            temperature: 0.0,
            type_polynomial: PolynomialType::LoadStrain,
        },
        CableStretchState::unstretched(),
    )?;

    let reloader = CatenaryCableReloader {
        catenary: &catenary,
        model_reference: &model_everyday,
        model_reloaded: &model_heavy,
        weight_unit_reloaded: line_cable.unit_load(&heavy),
    };
    let reloaded = reloader.catenary_reloaded()?;
    println!("Heavy case: {}", heavy.description);
    println!("  horizontal tension: {:.1} lb", reloaded.tension_horizontal());
    println!("  swing angle:        {:.1}°", reloaded.swing_angle());
    println!("  sag:                {:.2} ft", reloaded.sag()?);

    // Permanent stretch the line accumulates over its life
    let loader = LineCableLoaderBase::new(line_cable)?;
    println!("Stretch states:");
    println!("  creep: {:.0} lb", loader.stretch_state_creep().load);
    println!("  load:  {:.0} lb", loader.stretch_state_load().load);

    Ok(())
}
