use serde::{Deserialize, Serialize};

use opencad_types::{BoxSolid, Point3d, Vec3};

use super::rotation::apply_rotation;

/// The 8 world-space corners of a box.
///
/// Local corners span `0..width`, `0..height`, `0..depth`, are rotated about
/// the stored corner, then translated by it. Order is fixed: X varies
/// fastest, then Y, then Z.
pub fn box_corners(b: &BoxSolid) -> [Point3d; 8] {
    let d = &b.dimensions;
    let local = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(d.width, 0.0, 0.0),
        Vec3::new(0.0, d.height, 0.0),
        Vec3::new(d.width, d.height, 0.0),
        Vec3::new(0.0, 0.0, d.depth),
        Vec3::new(d.width, 0.0, d.depth),
        Vec3::new(0.0, d.height, d.depth),
        Vec3::new(d.width, d.height, d.depth),
    ];
    local.map(|v| b.position + apply_rotation(&v, &b.rotation))
}

/// World axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3d,
    pub max: Point3d,
}

impl BoundingBox {
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point3d::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3d::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Point3d]) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.expand_to_include(p);
        }
        bb
    }

    /// Bounds of a box after its rotation is applied.
    pub fn of_box(b: &BoxSolid) -> Self {
        Self::from_points(&box_corners(b))
    }

    pub fn expand_to_include(&mut self, p: &Point3d) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.expand_to_include(&other.min);
        out.expand_to_include(&other.max);
        out
    }

    pub fn center(&self) -> Point3d {
        self.min.midpoint(&self.max)
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Whether the XZ footprints come closer than `margin`. Touching at
    /// exactly `margin` does not count.
    pub fn footprint_overlaps(&self, other: &Self, margin: f64) -> bool {
        self.min.x < other.max.x + margin
            && self.max.x > other.min.x - margin
            && self.min.z < other.max.z + margin
            && self.max.z > other.min.z - margin
    }
}
