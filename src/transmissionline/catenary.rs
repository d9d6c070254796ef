use nalgebra as na;

use crate::base::geometry::{self, AxisDirection, Plane2d};
use crate::base::iterate::ITERATIONS_MAX;

#[derive(Debug, thiserror::Error)]
pub enum CatenaryError {
    #[error("horizontal tension must be greater than zero")]
    InvalidTensionHorizontal,
    #[error("unit weight must be greater than zero")]
    InvalidWeightUnit,
    #[error("horizontal endpoint spacing must be greater than zero")]
    InvalidSpacingEndpoints,
    #[error("transverse endpoint spacing must equal zero")]
    InvalidSpacingTransverse,
    #[error("unit weight must have no component along the span axis")]
    InvalidWeightDirection,
    #[error("vertical unit weight must be greater than zero")]
    InvalidWeightVertical,
    #[error("tangent angle bisection did not converge")]
    PositionNotConverged,
}

/// A catenary curve in a vertical plane.
///
/// The shape is defined by the horizontal tension and unit weight, while the
/// endpoint spacing selects the portion of the curve in use. The coordinate
/// system origin is the curve low point; x increases toward the right
/// endpoint and y is up. The horizontal tension is constant along the curve
/// and the unit weight is uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct Catenary2d {
    tension_horizontal: f64,
    weight_unit: f64,
    spacing_endpoints: na::Vector2<f64>,
    point_end_left: na::Point2<f64>,
    point_end_right: na::Point2<f64>,
}

impl Catenary2d {
    /// Builds a catenary and solves the endpoint coordinates.
    pub fn new(
        tension_horizontal: f64,
        weight_unit: f64,
        spacing_endpoints: na::Vector2<f64>,
    ) -> Result<Self, CatenaryError> {
        if !(tension_horizontal > 0.0) {
            return Err(CatenaryError::InvalidTensionHorizontal);
        }
        if !(weight_unit > 0.0) {
            return Err(CatenaryError::InvalidWeightUnit);
        }
        if !(spacing_endpoints.x > 0.0) {
            return Err(CatenaryError::InvalidSpacingEndpoints);
        }

        // endpoint x coordinates from the hyperbolic identity
        let c = tension_horizontal / weight_unit;
        let a = spacing_endpoints.x;
        let b = spacing_endpoints.y;
        let z = (a / 2.0) / c;
        let k = b / (2.0 * c * z.sinh());

        let x_left = c * (k.asinh() - z);
        let x_right = c * (k.asinh() + z);

        let mut catenary = Self {
            tension_horizontal,
            weight_unit,
            spacing_endpoints,
            point_end_left: na::Point2::origin(),
            point_end_right: na::Point2::origin(),
        };
        catenary.point_end_left = na::Point2::new(x_left, catenary.coordinate_y(x_left));
        catenary.point_end_right = na::Point2::new(x_right, catenary.coordinate_y(x_right));

        Ok(catenary)
    }

    /// The lowest catenary constant (H/w) the iterative solvers accept for an
    /// endpoint spacing. Below this the curve is too slack to solve reliably.
    pub fn constant_minimum(spacing_endpoints_magnitude: f64) -> f64 {
        spacing_endpoints_magnitude / 2.0
    }

    /// The catenary constant (H/w).
    pub fn constant(&self) -> f64 {
        self.tension_horizontal / self.weight_unit
    }

    /// A curve coordinate at a fraction of the curve length, measured from
    /// the left endpoint.
    pub fn coordinate(&self, position_fraction: f64) -> na::Point2<f64> {
        let length_left_to_position = position_fraction * self.length();
        let length_origin_to_left = self.length_from_origin(self.point_end_left.x);

        // locates the position relative to the curve low point
        let (length_origin_to_position, direction) =
            if self.point_end_left.x < 0.0 && self.point_end_right.x < 0.0 {
                // span is entirely behind the origin
                (
                    length_origin_to_left - length_left_to_position,
                    AxisDirection::Negative,
                )
            } else if self.point_end_left.x < 0.0 {
                // origin is inside the span
                if length_left_to_position < length_origin_to_left {
                    (
                        length_origin_to_left - length_left_to_position,
                        AxisDirection::Negative,
                    )
                } else {
                    (
                        length_left_to_position - length_origin_to_left,
                        AxisDirection::Positive,
                    )
                }
            } else {
                // span is entirely ahead of the origin
                (
                    length_origin_to_left + length_left_to_position,
                    AxisDirection::Positive,
                )
            };

        let x = self.coordinate_x(length_origin_to_position, direction);
        na::Point2::new(x, self.coordinate_y(x))
    }

    /// A chord coordinate directly above/below the curve coordinate at a
    /// fraction of the curve length.
    pub fn coordinate_chord(&self, position_fraction: f64) -> na::Point2<f64> {
        let coordinate = self.coordinate(position_fraction);

        na::Point2::new(
            coordinate.x,
            self.point_end_left.y
                + (coordinate.x - self.point_end_left.x)
                    * (self.spacing_endpoints.y / self.spacing_endpoints.x),
        )
    }

    /// The curve length between the endpoints.
    pub fn length(&self) -> f64 {
        // lengths from the origin are negated when the origin lies beyond the
        // endpoint, which collapses to a difference for same-side spans
        let length_origin_to_left = if self.point_end_left.x < 0.0 {
            self.length_from_origin(self.point_end_left.x)
        } else {
            -self.length_from_origin(self.point_end_left.x)
        };

        let length_origin_to_right = if self.point_end_right.x < 0.0 {
            -self.length_from_origin(self.point_end_right.x)
        } else {
            self.length_from_origin(self.point_end_right.x)
        };

        length_origin_to_left + length_origin_to_right
    }

    /// The curve length from the low point to an x coordinate.
    pub fn length_from_origin(&self, x: f64) -> f64 {
        let c = self.constant();
        (c * (x / c).sinh()).abs()
    }

    /// The slack: curve length minus the straight-line endpoint distance.
    pub fn length_slack(&self) -> f64 {
        self.length() - self.spacing_endpoints.magnitude()
    }

    /// The position fraction of the curve low point.
    pub fn position_fraction_origin(&self) -> Result<f64, CatenaryError> {
        self.position_fraction(0.0)
    }

    /// The position fraction where the curve tangent parallels the chord.
    pub fn position_fraction_sag_point(&self) -> Result<f64, CatenaryError> {
        let angle_chord = self
            .spacing_endpoints
            .y
            .atan2(self.spacing_endpoints.x)
            .to_degrees();

        self.position_fraction(angle_chord)
    }

    /// The sag at the sag point.
    pub fn sag(&self) -> Result<f64, CatenaryError> {
        let position_fraction = self.position_fraction_sag_point()?;
        Ok(self.sag_at(position_fraction))
    }

    /// The vertical distance between chord and curve at a position fraction.
    pub fn sag_at(&self, position_fraction: f64) -> f64 {
        let coordinate = self.coordinate(position_fraction);
        let coordinate_chord = self.coordinate_chord(position_fraction);

        coordinate_chord.y - coordinate.y
    }

    /// The tangent angle in degrees at a position fraction, oriented by the
    /// axis direction.
    pub fn tangent_angle(&self, position_fraction: f64, direction: AxisDirection) -> f64 {
        let coordinate = self.coordinate(position_fraction);
        let slope = (coordinate.x / self.constant()).sinh();

        let angle = slope.atan().to_degrees();
        match direction {
            AxisDirection::Negative => -angle,
            AxisDirection::Positive => angle,
        }
    }

    /// A tangent unit vector at a position fraction. A negative direction
    /// points back along the curve.
    pub fn tangent_vector(&self, position_fraction: f64, direction: AxisDirection) -> na::Vector2<f64> {
        let angle = self
            .tangent_angle(position_fraction, direction)
            .to_radians();

        match direction {
            AxisDirection::Negative => na::Vector2::new(-angle.cos(), angle.sin()),
            AxisDirection::Positive => na::Vector2::new(angle.cos(), angle.sin()),
        }
    }

    /// The tension magnitude at a position fraction.
    pub fn tension(&self, position_fraction: f64) -> f64 {
        let coordinate = self.coordinate(position_fraction);

        self.tension_horizontal * (coordinate.x / self.constant()).cosh()
    }

    /// A tension vector at a position fraction.
    pub fn tension_vector(&self, position_fraction: f64, direction: AxisDirection) -> na::Vector2<f64> {
        self.tangent_vector(position_fraction, direction) * self.tension(position_fraction)
    }

    /// The constant tension that elongates the cable the same amount as the
    /// varying catenary tension. Zero points selects the Ehrenburg closed
    /// form, otherwise the evenly spaced samples are averaged.
    pub fn tension_average(&self, num_points: usize) -> f64 {
        if num_points == 0 {
            let h = self.tension_horizontal;
            let w = self.weight_unit;
            let c = self.constant();
            let length = self.length();

            let term_1 = h.powi(2) / (2.0 * w * length);
            let term_2 =
                (self.point_end_right.x / c).sinh() * (self.point_end_right.x / c).cosh();
            let term_3 = (self.point_end_left.x / c).sinh() * (self.point_end_left.x / c).cosh();
            let term_4 = (self.point_end_right.x - self.point_end_left.x) / c;

            term_1 * (term_2 - term_3 + term_4)
        } else {
            let sum: f64 = (0..=num_points)
                .map(|i| self.tension(i as f64 / num_points as f64))
                .sum();

            sum / (num_points + 1) as f64
        }
    }

    /// The maximum tension, which occurs at the higher endpoint.
    pub fn tension_max(&self) -> f64 {
        if self.spacing_endpoints.y <= 0.0 {
            self.tension(0.0)
        } else {
            self.tension(1.0)
        }
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.tension_horizontal <= 0.0
            || (100_000.0 < self.tension_horizontal && is_included_warnings)
        {
            is_valid = false;
            messages.push("CATENARY - Invalid horizontal tension".to_string());
        }

        if self.weight_unit <= 0.0 || (15.0 < self.weight_unit && is_included_warnings) {
            is_valid = false;
            messages.push("CATENARY - Invalid unit weight".to_string());
        }

        if self.spacing_endpoints.x <= 0.0
            || (5000.0 < self.spacing_endpoints.x && is_included_warnings)
        {
            is_valid = false;
            messages.push("CATENARY - Invalid horizontal endpoint spacing".to_string());
        }

        if 2000.0 <= self.spacing_endpoints.y.abs() {
            is_valid = false;
            messages.push("CATENARY - Invalid vertical endpoint spacing".to_string());
        }

        if self.constant() < Self::constant_minimum(self.spacing_endpoints.magnitude()) {
            is_valid = false;
            messages.push("CATENARY - Catenary constant is below the minimum for the span".to_string());
        }

        is_valid
    }

    pub fn tension_horizontal(&self) -> f64 {
        self.tension_horizontal
    }

    pub fn weight_unit(&self) -> f64 {
        self.weight_unit
    }

    pub fn spacing_endpoints(&self) -> na::Vector2<f64> {
        self.spacing_endpoints
    }

    pub fn point_end_left(&self) -> na::Point2<f64> {
        self.point_end_left
    }

    pub fn point_end_right(&self) -> na::Point2<f64> {
        self.point_end_right
    }

    /// x coordinate for a curve length from the origin, signed by direction.
    fn coordinate_x(&self, length_origin_to_position: f64, direction: AxisDirection) -> f64 {
        let c = self.constant();
        let x = c * (length_origin_to_position / c).asinh();

        match direction {
            AxisDirection::Negative => -x,
            AxisDirection::Positive => x,
        }
    }

    /// y coordinate of the curve at an x coordinate.
    fn coordinate_y(&self, x: f64) -> f64 {
        let c = self.constant();
        c * ((x / c).cosh() - 1.0)
    }

    /// Bisects for the position fraction where the tangent angle matches the
    /// target angle (degrees).
    fn position_fraction(&self, angle_target: f64) -> Result<f64, CatenaryError> {
        let mut fraction_lower = 0.0_f64;
        let mut fraction_upper = 1.0_f64;
        let mut fraction = f64::NAN;
        let mut angle = f64::INFINITY;

        for _ in 0..ITERATIONS_MAX {
            if (angle - angle_target).abs() <= 0.001 && (fraction_upper - fraction_lower) <= 0.0001
            {
                return Ok(fraction);
            }

            fraction = (fraction_upper + fraction_lower) / 2.0;
            angle = self.tangent_angle(fraction, AxisDirection::Positive);

            if angle == angle_target {
                return Ok(fraction);
            } else if angle < angle_target {
                fraction_lower = fraction;
            } else {
                fraction_upper = fraction;
            }
        }

        Err(CatenaryError::PositionNotConverged)
    }
}

/// A catenary between two supports in 3D, under combined vertical and
/// transverse unit loading.
///
/// The problem is reduced to a 2D catenary in a plane tilted by the swing
/// angle: the endpoint spacing is projected onto the loading plane and the
/// unit weight magnitude becomes the 2D unit weight. Conductors are assumed
/// to hang in a single vertical plane before swing, so the transverse
/// endpoint spacing must be zero; transverse displacement is captured by the
/// swing angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Catenary3d {
    spacing_endpoints: na::Vector3<f64>,
    weight_unit: na::Vector3<f64>,
    catenary_2d: Catenary2d,
}

impl Catenary3d {
    pub fn new(
        tension_horizontal: f64,
        weight_unit: na::Vector3<f64>,
        spacing_endpoints: na::Vector3<f64>,
    ) -> Result<Self, CatenaryError> {
        if spacing_endpoints.y != 0.0 {
            return Err(CatenaryError::InvalidSpacingTransverse);
        }
        if weight_unit.x != 0.0 {
            return Err(CatenaryError::InvalidWeightDirection);
        }
        if !(weight_unit.z > 0.0) {
            return Err(CatenaryError::InvalidWeightVertical);
        }

        // projects the spacing onto the loading plane
        let b = spacing_endpoints.z;
        let c = spacing_endpoints.magnitude();
        let v = weight_unit.z.abs();
        let w = weight_unit.magnitude();

        let spacing_y = b * (v / w);
        let spacing_x = (c.powi(2) - spacing_y.powi(2)).sqrt();

        let catenary_2d = Catenary2d::new(
            tension_horizontal,
            w,
            na::Vector2::new(spacing_x, spacing_y),
        )?;

        Ok(Self {
            spacing_endpoints,
            weight_unit,
            catenary_2d,
        })
    }

    /// Rebuilds the catenary at a different horizontal tension.
    pub fn with_tension_horizontal(&self, tension_horizontal: f64) -> Result<Self, CatenaryError> {
        Self::new(tension_horizontal, self.weight_unit, self.spacing_endpoints)
    }

    /// Rebuilds the catenary at a different endpoint spacing.
    pub fn with_spacing_endpoints(
        &self,
        spacing_endpoints: na::Vector3<f64>,
    ) -> Result<Self, CatenaryError> {
        Self::new(self.tension_horizontal(), self.weight_unit, spacing_endpoints)
    }

    pub fn constant(&self) -> f64 {
        self.catenary_2d.constant()
    }

    /// A curve coordinate at a fraction of the curve length. The chord-line
    /// offset is rotated into the loading plane, so a transversely loaded
    /// cable displaces out of the vertical plane.
    pub fn coordinate(&self, position_fraction: f64) -> na::Point3<f64> {
        let coordinate_chord = self.catenary_2d.coordinate_chord(position_fraction);
        let coordinate_curve = self.catenary_2d.coordinate(position_fraction);

        let offset = na::Vector3::new(0.0, 0.0, coordinate_curve.y - coordinate_chord.y);
        let offset = geometry::rotated_in_plane(
            &offset,
            Plane2d::Zy,
            geometry::vector_angle_in_plane(&self.weight_unit, Plane2d::Zy),
        );

        na::Point3::new(
            coordinate_chord.x,
            offset.y,
            coordinate_chord.y + offset.z,
        )
    }

    /// A chord coordinate at a fraction of the curve length.
    pub fn coordinate_chord(&self, position_fraction: f64) -> na::Point3<f64> {
        let coordinate_chord = self.catenary_2d.coordinate_chord(position_fraction);

        na::Point3::new(coordinate_chord.x, 0.0, coordinate_chord.y)
    }

    pub fn length(&self) -> f64 {
        self.catenary_2d.length()
    }

    pub fn length_slack(&self) -> f64 {
        self.catenary_2d.length_slack()
    }

    pub fn position_fraction_origin(&self) -> Result<f64, CatenaryError> {
        self.catenary_2d.position_fraction_origin()
    }

    pub fn position_fraction_sag_point(&self) -> Result<f64, CatenaryError> {
        self.catenary_2d.position_fraction_sag_point()
    }

    pub fn sag(&self) -> Result<f64, CatenaryError> {
        self.catenary_2d.sag()
    }

    pub fn sag_at(&self, position_fraction: f64) -> f64 {
        self.catenary_2d.sag_at(position_fraction)
    }

    /// The transverse swing angle in degrees, from the unit load components.
    pub fn swing_angle(&self) -> f64 {
        (self.weight_unit.y / self.weight_unit.z).atan().to_degrees()
    }

    /// The tangent angle in the transverse (zy) plane, in degrees.
    pub fn tangent_angle_transverse(
        &self,
        position_fraction: f64,
        direction: AxisDirection,
    ) -> f64 {
        let tangent = self.tangent_vector(position_fraction, direction);

        geometry::vector_angle(&na::Vector2::new(tangent.z.abs(), tangent.y.abs()))
    }

    /// The tangent angle in the vertical (xz) plane, in degrees.
    pub fn tangent_angle_vertical(&self, position_fraction: f64, direction: AxisDirection) -> f64 {
        let tangent = self.tangent_vector(position_fraction, direction);

        geometry::vector_angle(&na::Vector2::new(tangent.x.abs(), tangent.z))
    }

    /// A tangent unit vector at a position fraction.
    pub fn tangent_vector(&self, position_fraction: f64, direction: AxisDirection) -> na::Vector3<f64> {
        let tangent_2d = self.catenary_2d.tangent_vector(position_fraction, direction);
        let mut tangent = na::Vector3::new(tangent_2d.x, 0.0, tangent_2d.y);

        // corrects for the projected endpoint spacing, which only differs
        // when elevation and transverse loading are both present
        if self.spacing_endpoints.z != 0.0 && self.weight_unit.y != 0.0 {
            let angle_endpoints_2d = geometry::vector_angle(&self.catenary_2d.spacing_endpoints());
            let angle_endpoints_3d =
                geometry::vector_angle_in_plane(&self.spacing_endpoints, Plane2d::Xz);

            tangent = geometry::rotated_in_plane(
                &tangent,
                Plane2d::Xz,
                angle_endpoints_3d - angle_endpoints_2d,
            );
        }

        // rotates out of the loading plane by the swing angle
        if self.weight_unit.y != 0.0 {
            tangent =
                geometry::rotated_in_plane(&tangent, Plane2d::Yz, -self.swing_angle().abs());
        }

        tangent
    }

    pub fn tension(&self, position_fraction: f64) -> f64 {
        self.catenary_2d.tension(position_fraction)
    }

    /// A tension vector at a position fraction.
    pub fn tension_vector(&self, position_fraction: f64, direction: AxisDirection) -> na::Vector3<f64> {
        self.tangent_vector(position_fraction, direction) * self.tension(position_fraction)
    }

    pub fn tension_average(&self, num_points: usize) -> f64 {
        self.catenary_2d.tension_average(num_points)
    }

    pub fn tension_max(&self) -> f64 {
        self.catenary_2d.tension_max()
    }

    pub fn validate(&self, is_included_warnings: bool, messages: &mut Vec<String>) -> bool {
        let mut is_valid = true;

        if self.spacing_endpoints.y != 0.0 {
            is_valid = false;
            messages.push("CATENARY - Transverse endpoint spacing must equal zero".to_string());
        }

        if 2000.0 <= self.spacing_endpoints.z.abs() {
            is_valid = false;
            messages.push("CATENARY - Invalid vertical endpoint spacing".to_string());
        }

        if self.weight_unit.x != 0.0 {
            is_valid = false;
            messages.push("CATENARY - Unit weight along the span axis must equal zero".to_string());
        }

        if self.weight_unit.y < 0.0 || (15.0 < self.weight_unit.y && is_included_warnings) {
            is_valid = false;
            messages.push("CATENARY - Invalid transverse unit weight".to_string());
        }

        if self.weight_unit.z <= 0.0 || (25.0 < self.weight_unit.z && is_included_warnings) {
            is_valid = false;
            messages.push("CATENARY - Invalid vertical unit weight".to_string());
        }

        if !self.catenary_2d.validate(is_included_warnings, messages) {
            is_valid = false;
        }

        is_valid
    }

    pub fn tension_horizontal(&self) -> f64 {
        self.catenary_2d.tension_horizontal()
    }

    pub fn weight_unit(&self) -> na::Vector3<f64> {
        self.weight_unit
    }

    pub fn spacing_endpoints(&self) -> na::Vector3<f64> {
        self.spacing_endpoints
    }

    pub fn catenary_2d(&self) -> &Catenary2d {
        &self.catenary_2d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn catenary_flat() -> Catenary2d {
        Catenary2d::new(1000.0, 0.5, na::Vector2::new(1000.0, 0.0)).unwrap()
    }

    fn catenary_inclined() -> Catenary2d {
        Catenary2d::new(1000.0, 0.5, na::Vector2::new(1000.0, 500.0)).unwrap()
    }

    #[test]
    fn test_constant() {
        assert_relative_eq!(catenary_flat().constant(), 2000.0);
    }

    #[test]
    fn test_length_flat() {
        let catenary = catenary_flat();
        assert_relative_eq!(catenary.length(), 1010.45, epsilon = 0.01);
        assert_relative_eq!(catenary.length_slack(), 10.45, epsilon = 0.01);
    }

    #[test]
    fn test_length_inclined() {
        let catenary = catenary_inclined();
        assert_relative_eq!(catenary.length(), 1127.39, epsilon = 0.01);
        assert_relative_eq!(catenary.length_slack(), 9.36, epsilon = 0.01);
    }

    #[test]
    fn test_tension_flat() {
        let catenary = catenary_flat();
        assert_relative_eq!(catenary.tension(0.0), 1031.41, epsilon = 0.01);
        assert_relative_eq!(catenary.tension(0.5), 1000.00, epsilon = 0.01);
        assert_relative_eq!(catenary.tension(1.0), 1031.41, epsilon = 0.01);
        assert_relative_eq!(catenary.tension_max(), 1031.41, epsilon = 0.01);
    }

    #[test]
    fn test_tension_average() {
        let catenary = catenary_flat();
        assert_relative_eq!(catenary.tension_average(0), 1010.54, epsilon = 0.01);
        assert_relative_eq!(catenary.tension_average(1000), 1010.56, epsilon = 0.01);
    }

    #[test]
    fn test_tension_max_inclined() {
        let catenary = catenary_inclined();
        assert_relative_eq!(catenary.tension_max(), 1275.78, epsilon = 0.01);
        assert_relative_eq!(catenary.tension_max(), catenary.tension(1.0));
    }

    #[test]
    fn test_tension_never_below_horizontal() {
        let catenary = catenary_inclined();
        for i in 0..=10 {
            let fraction = i as f64 / 10.0;
            assert!(catenary.tension_horizontal() <= catenary.tension(fraction) + 1e-9);
        }
    }

    #[test]
    fn test_length_exceeds_chord() {
        assert!(catenary_flat().length() >= 1000.0);
        assert!(catenary_inclined().length() >= catenary_inclined().spacing_endpoints().magnitude());
    }

    #[test]
    fn test_sag_flat() {
        let catenary = catenary_flat();

        // sag point of a level span is the midpoint
        let fraction = catenary.position_fraction_sag_point().unwrap();
        assert_relative_eq!(fraction, 0.5, epsilon = 0.001);

        // y(x_end) for a level span equals the sag
        let sag = catenary.sag().unwrap();
        assert_relative_eq!(sag, 2000.0 * ((500.0_f64 / 2000.0).cosh() - 1.0), epsilon = 0.01);
        assert!(sag >= 0.0);
    }

    #[test]
    fn test_sag_inclined_positive() {
        assert!(catenary_inclined().sag().unwrap() > 0.0);
    }

    #[test]
    fn test_tangent_angles() {
        let catenary = catenary_flat();

        // level span endpoints have mirrored tangent angles
        let angle_left = catenary.tangent_angle(0.0, AxisDirection::Positive);
        let angle_right = catenary.tangent_angle(1.0, AxisDirection::Positive);
        assert_relative_eq!(angle_left, -angle_right, epsilon = 0.001);

        // low point tangent is level
        let fraction = catenary.position_fraction_origin().unwrap();
        assert_relative_eq!(
            catenary.tangent_angle(fraction, AxisDirection::Positive),
            0.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_coordinate_endpoints() {
        let catenary = catenary_inclined();

        let left = catenary.coordinate(0.0);
        let right = catenary.coordinate(1.0);
        assert_relative_eq!(right.x - left.x, 1000.0, epsilon = 0.001);
        assert_relative_eq!(right.y - left.y, 500.0, epsilon = 0.001);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(Catenary2d::new(0.0, 0.5, na::Vector2::new(1000.0, 0.0)).is_err());
        assert!(Catenary2d::new(1000.0, -0.5, na::Vector2::new(1000.0, 0.0)).is_err());
        assert!(Catenary2d::new(1000.0, 0.5, na::Vector2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_validate_warnings() {
        let catenary = Catenary2d::new(150_000.0, 0.5, na::Vector2::new(1000.0, 0.0)).unwrap();

        let mut messages = Vec::new();
        assert!(catenary.validate(false, &mut messages));
        assert!(messages.is_empty());

        assert!(!catenary.validate(true, &mut messages));
        assert_eq!(messages.len(), 1);
    }

    fn catenary_3d_swung() -> Catenary3d {
        Catenary3d::new(
            6000.0,
            na::Vector3::new(0.0, 2.072, 3.729),
            na::Vector3::new(1200.0, 0.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_3d_matches_2d_when_unswung() {
        let catenary = Catenary3d::new(
            1000.0,
            na::Vector3::new(0.0, 0.0, 0.5),
            na::Vector3::new(1000.0, 0.0, 0.0),
        )
        .unwrap();

        assert_relative_eq!(catenary.length(), catenary_flat().length());
        assert_relative_eq!(catenary.tension_max(), catenary_flat().tension_max());
        assert_relative_eq!(catenary.swing_angle(), 0.0);
    }

    #[test]
    fn test_3d_swing_angle() {
        let catenary = catenary_3d_swung();
        assert_relative_eq!(
            catenary.swing_angle(),
            (2.072_f64 / 3.729).atan().to_degrees(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_3d_projection_uses_weight_magnitude() {
        let catenary = catenary_3d_swung();
        let w = (2.072_f64.powi(2) + 3.729_f64.powi(2)).sqrt();

        assert_relative_eq!(catenary.catenary_2d().weight_unit(), w, epsilon = 1e-9);
        assert_relative_eq!(catenary.constant(), 6000.0 / w, epsilon = 1e-9);
    }

    #[test]
    fn test_3d_coordinate_swings_transversely() {
        let catenary = catenary_3d_swung();

        // midspan point displaces out of the vertical plane and sits below
        // the endpoints
        let coordinate_end = catenary.coordinate(0.0);
        let coordinate_mid = catenary.coordinate(0.5);
        assert!(coordinate_mid.y.abs() > 0.0);
        assert!(coordinate_mid.z < coordinate_end.z);
        assert_relative_eq!(coordinate_end.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_3d_tangent_vector_is_unit_length() {
        let catenary = catenary_3d_swung();

        for i in 0..=4 {
            let fraction = i as f64 / 4.0;
            let tangent = catenary.tangent_vector(fraction, AxisDirection::Positive);
            assert_relative_eq!(tangent.magnitude(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_3d_rejects_transverse_spacing() {
        let result = Catenary3d::new(
            1000.0,
            na::Vector3::new(0.0, 0.0, 0.5),
            na::Vector3::new(1000.0, 10.0, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_3d_rejects_weight_along_span() {
        let result = Catenary3d::new(
            1000.0,
            na::Vector3::new(0.1, 0.0, 0.5),
            na::Vector3::new(1000.0, 0.0, 0.0),
        );
        assert!(result.is_err());
    }
}
