pub mod bounds;
pub mod rotation;

use nalgebra::{Point3, Vector3};
use opencad_types::{Point3d, Vec3};

pub(crate) fn to_vector(v: &Vec3) -> Vector3<f64> {
    Vector3::new(v.x, v.y, v.z)
}

pub(crate) fn from_vector(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub(crate) fn to_point(p: &Point3d) -> Point3<f64> {
    Point3::new(p.x, p.y, p.z)
}

pub(crate) fn from_point(p: &Point3<f64>) -> Point3d {
    Point3d::new(p.x, p.y, p.z)
}
