use nalgebra as na;

use crate::base::polynomial::{Polynomial, PolynomialError};
use crate::transmissionline::cable::{CableComponent, PolynomialType};

#[derive(Debug, thiserror::Error)]
pub enum ElongationError {
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
    #[error("no cable component has a non-zero polynomial")]
    NoEnabledComponents,
    #[error("whole-cable strain iteration did not converge")]
    StrainNotConverged,
}

/// The strain ↔ load behavior of one cable component at a temperature and
/// stretch condition.
///
/// Strains exchanged with callers are in the component's thermal frame; the
/// empirical polynomial operates on percent strain at the reference
/// temperature, so lookups shift by the thermal strain and scale by 100.
///
/// Left to right along the strain axis the curve has these regions:
/// - compression, linear at the compression modulus below the unloaded point
/// - the stretch-shifted elastic line at the tension modulus, pivoting on the
///   point the component was historically loaded to
/// - the polynomial, up to its validity limit
/// - linear extrapolation at the tension modulus beyond the limit
#[derive(Debug, Clone)]
pub struct CableComponentElongationModel {
    component: CableComponent,
    type_polynomial: PolynomialType,
    temperature: f64,
    temperature_reference: f64,
    load_stretch: f64,

    polynomial: Polynomial,
    strain_thermal: f64,
    point_unloaded_unstretched: na::Point2<f64>,
    point_limit_polynomial: na::Point2<f64>,
    point_stretch: na::Point2<f64>,
    point_unloaded_stretched: na::Point2<f64>,
}

impl CableComponentElongationModel {
    pub fn new(
        component: &CableComponent,
        type_polynomial: PolynomialType,
        temperature: f64,
        temperature_reference: f64,
        load_stretch: f64,
    ) -> Result<Self, ElongationError> {
        let polynomial = Polynomial::new(component.coefficients(type_polynomial).to_vec());
        let strain_thermal = component.coefficient_expansion_linear_thermal
            * (temperature - temperature_reference);

        let mut model = Self {
            component: component.clone(),
            type_polynomial,
            temperature,
            temperature_reference,
            load_stretch,
            polynomial,
            strain_thermal,
            point_unloaded_unstretched: na::Point2::origin(),
            point_limit_polynomial: na::Point2::origin(),
            point_stretch: na::Point2::origin(),
            point_unloaded_stretched: na::Point2::origin(),
        };

        // the region boundary points build on one another, in this order
        model.point_unloaded_unstretched = na::Point2::new(model.strain_polynomial(0.0)?, 0.0);

        let load_limit = component.load_limit(type_polynomial);
        model.point_limit_polynomial =
            na::Point2::new(model.strain_polynomial(load_limit)?, load_limit);

        model.point_stretch = na::Point2::new(model.strain_unstretched(load_stretch)?, load_stretch);

        model.point_unloaded_stretched = na::Point2::new(
            model.point_stretch.x
                - model.point_stretch.y / component.modulus_tension_elastic_area,
            0.0,
        );

        Ok(model)
    }

    /// The load at a strain.
    pub fn load(&self, strain: f64, is_stretched: bool) -> f64 {
        if is_stretched {
            self.load_stretched(strain)
        } else {
            self.load_unstretched(strain)
        }
    }

    /// The strain at a load.
    pub fn strain(&self, load: f64, is_stretched: bool) -> Result<f64, ElongationError> {
        if is_stretched {
            self.strain_stretched(load)
        } else {
            self.strain_unstretched(load)
        }
    }

    /// The load-strain slope at a strain.
    pub fn slope(&self, strain: f64, is_stretched: bool) -> f64 {
        if is_stretched {
            self.slope_stretched(strain)
        } else {
            self.slope_unstretched(strain)
        }
    }

    /// The boundary points between elongation regions: unloaded, polynomial
    /// limit, and stretch.
    pub fn points_discrete_regions(&self, is_stretched: bool) -> [na::Point2<f64>; 3] {
        [
            self.point_unloaded(is_stretched),
            self.point_limit_polynomial,
            self.point_stretch,
        ]
    }

    pub fn point_unloaded(&self, is_stretched: bool) -> na::Point2<f64> {
        if is_stretched {
            self.point_unloaded_stretched
        } else {
            self.point_unloaded_unstretched
        }
    }

    pub fn point_limit_polynomial(&self) -> na::Point2<f64> {
        self.point_limit_polynomial
    }

    pub fn point_stretch(&self) -> na::Point2<f64> {
        self.point_stretch
    }

    pub fn component(&self) -> &CableComponent {
        &self.component
    }

    pub fn load_stretch(&self) -> f64 {
        self.load_stretch
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn temperature_reference(&self) -> f64 {
        self.temperature_reference
    }

    pub fn type_polynomial(&self) -> PolynomialType {
        self.type_polynomial
    }

    fn load_unstretched(&self, strain: f64) -> f64 {
        if strain < self.point_unloaded_unstretched.x {
            self.load_compression(strain, false)
        } else if strain == self.point_unloaded_unstretched.x {
            0.0
        } else if strain <= self.point_limit_polynomial.x {
            self.load_polynomial(strain)
        } else {
            // the extrapolated line continues at the tension modulus
            self.point_limit_polynomial.y
                + (strain - self.point_limit_polynomial.x)
                    * self.component.modulus_tension_elastic_area
        }
    }

    fn load_stretched(&self, strain: f64) -> f64 {
        if strain < self.point_unloaded_stretched.x {
            self.load_compression(strain, true)
        } else if strain <= self.point_stretch.x {
            // unloads from the stretch point at the tension modulus
            self.point_stretch.y
                - (self.point_stretch.x - strain) * self.component.modulus_tension_elastic_area
        } else {
            // above the stretch point the component behaves as unstretched
            self.load_unstretched(strain)
        }
    }

    fn load_compression(&self, strain: f64, is_stretched: bool) -> f64 {
        let strain_unloaded = self.point_unloaded(is_stretched).x;

        (strain - strain_unloaded) * self.component.modulus_compression_elastic_area
    }

    fn load_polynomial(&self, strain: f64) -> f64 {
        self.polynomial.y(self.percent_strain_polynomial(strain))
    }

    fn strain_unstretched(&self, load: f64) -> Result<f64, ElongationError> {
        if load < 0.0 {
            Ok(self.strain_compression(load, false))
        } else if load == 0.0 {
            Ok(self.point_unloaded_unstretched.x)
        } else if load <= self.point_limit_polynomial.y {
            self.strain_polynomial(load)
        } else {
            Ok(self.point_limit_polynomial.x
                + (load - self.point_limit_polynomial.y)
                    / self.component.modulus_tension_elastic_area)
        }
    }

    fn strain_stretched(&self, load: f64) -> Result<f64, ElongationError> {
        if load < 0.0 {
            Ok(self.strain_compression(load, true))
        } else if load <= self.point_stretch.y {
            Ok(self.point_stretch.x
                - (self.point_stretch.y - load) / self.component.modulus_tension_elastic_area)
        } else {
            self.strain_unstretched(load)
        }
    }

    fn strain_compression(&self, load: f64, is_stretched: bool) -> f64 {
        let strain_unloaded = self.point_unloaded(is_stretched).x;
        let modulus = self.component.modulus_compression_elastic_area;

        // a component with no compression stiffness carries no negative load
        if modulus <= 0.0 {
            strain_unloaded
        } else {
            strain_unloaded - (0.0 - load) / modulus
        }
    }

    fn strain_polynomial(&self, load: f64) -> Result<f64, ElongationError> {
        let percent_strain = self.polynomial.x(load, 2, 0.1)?;
        Ok(self.strain_from_percent(percent_strain))
    }

    fn slope_unstretched(&self, strain: f64) -> f64 {
        if strain < self.point_unloaded_unstretched.x {
            self.component.modulus_compression_elastic_area
        } else if strain <= self.point_limit_polynomial.x {
            self.polynomial.slope(self.percent_strain_polynomial(strain)) * 100.0
        } else {
            self.component.modulus_tension_elastic_area
        }
    }

    fn slope_stretched(&self, strain: f64) -> f64 {
        if strain < self.point_unloaded_stretched.x {
            self.component.modulus_compression_elastic_area
        } else if strain <= self.point_stretch.x {
            self.component.modulus_tension_elastic_area
        } else {
            self.slope_unstretched(strain)
        }
    }

    /// Shifts a strain in the component thermal frame into the polynomial
    /// frame (percent strain at the reference temperature).
    fn percent_strain_polynomial(&self, strain: f64) -> f64 {
        (strain - self.strain_thermal) * 100.0
    }

    /// Shifts a polynomial percent strain back into the component frame.
    fn strain_from_percent(&self, percent_strain_polynomial: f64) -> f64 {
        (percent_strain_polynomial / 100.0) + self.strain_thermal
    }
}
