//! Sag-tension engine for overhead transmission conductors.
//!
//! Given a conductor and a set of weather cases, the library predicts the
//! shape, length, and tension of the cable strung between two attachment
//! points. Numeric semantics are unit-agnostic; keep a single consistent
//! unit system per problem (the fixtures use pounds, feet, °F, psf). All
//! exposed angles are in degrees.

pub mod base;
pub mod transmissionline;
pub mod sagtension;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export nalgebra
pub use nalgebra as na;

pub use base::geometry::{AxisDirection, Plane2d};
pub use base::polynomial::Polynomial;
pub use sagtension::elongation_model::{CableElongationModel, ComponentSelector};
pub use sagtension::line_loader::{LineCableLoaderBase, LineCableUnloader};
pub use sagtension::reloader::CatenaryCableReloader;
pub use sagtension::state::{CableState, CableStretchState};
pub use sagtension::strainer::CableStrainer;
pub use sagtension::unloader::CatenaryCableUnloader;
pub use transmissionline::cable::{Cable, CableComponent, PolynomialType};
pub use transmissionline::catenary::{Catenary2d, Catenary3d};
pub use transmissionline::catenary_solver::{CatenarySolver, CatenaryTarget};
pub use transmissionline::line_cable::{
    CableCondition, CableConstraint, ConstraintLimitType, LineCable,
};
pub use transmissionline::unit_loads::UnitLoadCalculator;
pub use transmissionline::weather::WeatherLoadCase;
