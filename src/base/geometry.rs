use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Direction along an axis, used to orient tangent vectors and curve
/// coordinates. Negative points back along the line, positive points ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDirection {
    Negative,
    Positive,
}

/// A planar slice of a 3D coordinate system.
///
/// The first axis letter is the horizontal axis of the plane, the second is
/// the vertical axis. Angles and rotations in a plane follow the usual 2D
/// convention: counter-clockwise positive, measured from the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plane2d {
    Xy,
    Xz,
    Yx,
    Yz,
    Zx,
    Zy,
}

/// Extracts the (horizontal, vertical) pair of a 3D vector for a plane.
pub fn plane_components(v: &na::Vector3<f64>, plane: Plane2d) -> na::Vector2<f64> {
    match plane {
        Plane2d::Xy => na::Vector2::new(v.x, v.y),
        Plane2d::Xz => na::Vector2::new(v.x, v.z),
        Plane2d::Yx => na::Vector2::new(v.y, v.x),
        Plane2d::Yz => na::Vector2::new(v.y, v.z),
        Plane2d::Zx => na::Vector2::new(v.z, v.x),
        Plane2d::Zy => na::Vector2::new(v.z, v.y),
    }
}

fn set_plane_components(v: &mut na::Vector3<f64>, plane: Plane2d, planar: na::Vector2<f64>) {
    match plane {
        Plane2d::Xy => {
            v.x = planar.x;
            v.y = planar.y;
        }
        Plane2d::Xz => {
            v.x = planar.x;
            v.z = planar.y;
        }
        Plane2d::Yx => {
            v.y = planar.x;
            v.x = planar.y;
        }
        Plane2d::Yz => {
            v.y = planar.x;
            v.z = planar.y;
        }
        Plane2d::Zx => {
            v.z = planar.x;
            v.x = planar.y;
        }
        Plane2d::Zy => {
            v.z = planar.x;
            v.y = planar.y;
        }
    }
}

/// Angle of a 2D vector in degrees, counter-clockwise from the positive
/// horizontal axis, normalized to [0, 360). The zero vector maps to 0.
pub fn vector_angle(v: &na::Vector2<f64>) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }

    let angle = v.y.atan2(v.x).to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Angle of a 3D vector projected onto a plane, in degrees in [0, 360).
pub fn vector_angle_in_plane(v: &na::Vector3<f64>, plane: Plane2d) -> f64 {
    vector_angle(&plane_components(v, plane))
}

/// Rotates a 2D vector counter-clockwise by an angle in degrees.
pub fn rotated(v: &na::Vector2<f64>, angle_degrees: f64) -> na::Vector2<f64> {
    if angle_degrees.abs() < 0.00005 {
        return *v;
    }

    na::Rotation2::new(angle_degrees.to_radians()) * v
}

/// Rotates the planar components of a 3D vector counter-clockwise by an angle
/// in degrees. The out-of-plane component is unchanged.
pub fn rotated_in_plane(v: &na::Vector3<f64>, plane: Plane2d, angle_degrees: f64) -> na::Vector3<f64> {
    let mut result = *v;
    let planar = rotated(&plane_components(v, plane), angle_degrees);
    set_plane_components(&mut result, plane, planar);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_angle_quadrants() {
        assert_relative_eq!(vector_angle(&na::Vector2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(vector_angle(&na::Vector2::new(1.0, 1.0)), 45.0);
        assert_relative_eq!(vector_angle(&na::Vector2::new(0.0, 1.0)), 90.0);
        assert_relative_eq!(vector_angle(&na::Vector2::new(-1.0, 0.0)), 180.0);
        assert_relative_eq!(vector_angle(&na::Vector2::new(0.0, -1.0)), 270.0);
        assert_relative_eq!(vector_angle(&na::Vector2::new(1.0, -1.0)), 315.0);
    }

    #[test]
    fn test_rotated() {
        let v = rotated(&na::Vector2::new(1.0, 0.0), 90.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);

        // clockwise rotation
        let v = rotated(&na::Vector2::new(1.0, 0.0), -45.0);
        assert_relative_eq!(v.x, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(v.y, -std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_in_plane_leaves_third_axis() {
        let v = na::Vector3::new(0.0, 0.0, -5.0);
        let r = rotated_in_plane(&v, Plane2d::Zy, 30.0);

        assert_relative_eq!(r.x, 0.0);
        assert_relative_eq!(r.z, -5.0 * 30.0_f64.to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(r.y, -5.0 * 30.0_f64.to_radians().sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_in_plane_matches_projection() {
        let v = na::Vector3::new(0.0, 2.072, 3.729);
        let angle = vector_angle_in_plane(&v, Plane2d::Zy);
        assert_relative_eq!(angle, (2.072_f64 / 3.729).atan().to_degrees(), epsilon = 1e-12);
    }
}
