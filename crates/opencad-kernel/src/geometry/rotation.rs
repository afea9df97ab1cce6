//! Euler composition and the corner/visual-center conversions.
//!
//! A box stores its minimum corner, but rotates about that corner; the
//! renderer and CSG collaborators work from the rotated centroid. All
//! conversions here share one composition order: X first, then Y, then Z
//! (`R = Rz * Ry * Rx`, which is what `nalgebra::Rotation3::from_euler_angles`
//! builds).

use nalgebra::{Rotation3 as Matrix, Vector3};
use opencad_types::{Axis, Dimensions, Point3d, Rotation3, RotationInput, Vec3};

use super::{from_vector, to_vector};

/// Rotation matrix for an Euler triple.
pub fn rotation_matrix(rotation: &Rotation3) -> Matrix<f64> {
    Matrix::from_euler_angles(rotation.x, rotation.y, rotation.z)
}

/// Rotate a vector by an Euler triple.
pub fn apply_rotation(v: &Vec3, rotation: &Rotation3) -> Vec3 {
    if rotation.is_zero() {
        return *v;
    }
    from_vector(&(rotation_matrix(rotation) * to_vector(v)))
}

/// Geometric centroid of a rotated box: `corner + R * half_extents`.
pub fn visual_center(position: &Point3d, dimensions: &Dimensions, rotation: &Rotation3) -> Point3d {
    *position + apply_rotation(&dimensions.half_extents(), rotation)
}

/// Inverse of [`visual_center`] under the same rotation.
pub fn corner_from_visual_center(
    center: &Point3d,
    dimensions: &Dimensions,
    rotation: &Rotation3,
) -> Point3d {
    *center - apply_rotation(&dimensions.half_extents(), rotation)
}

fn unit_axis(axis: Axis) -> nalgebra::Unit<Vector3<f64>> {
    match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    }
}

/// Rotate `point` about `center` around a single world axis.
///
/// Independent of any box's own rotation; used for in-place rotation edits.
pub fn rotate_around_axis(point: &Point3d, center: &Point3d, axis: Axis, angle: f64) -> Point3d {
    let r = Matrix::from_axis_angle(&unit_axis(axis), angle);
    *center + from_vector(&(r * to_vector(&(*point - *center))))
}

pub fn add_rotation_on_axis(rotation: &Rotation3, axis: Axis, delta: f64) -> Rotation3 {
    rotation.with(axis, rotation.get(axis) + delta)
}

/// Normalize stored rotation data to a full Euler triple.
pub fn normalize_rotation(input: RotationInput) -> Rotation3 {
    Rotation3::from(input)
}
