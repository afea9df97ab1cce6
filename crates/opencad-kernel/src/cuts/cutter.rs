use serde::{Deserialize, Serialize};

use opencad_types::{BoxCut, Dimensions, Point3d, Rotation3, Vec3};

use super::{CutConventions, CUTTER_OVERSIZE};

/// Placement of the solid to subtract from a box, relative to the box center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutterParams {
    pub center: Point3d,
    pub rotation: Rotation3,
    /// Edge lengths of the cutter.
    pub extent: Vec3,
}

impl CutConventions {
    /// Cutter whose subtraction leaves a flat plane through `cut.face`,
    /// hinged on the face edge along the pivot axis.
    pub fn build_cutter(&self, dimensions: &Dimensions, cut: &BoxCut) -> CutterParams {
        let cfg = self.face(cut.face);
        let size = dimensions.max_extent() * CUTTER_OVERSIZE;
        let full = dimensions.along(cfg.normal_axis);

        // Inner face of the cutter sits on the box face.
        let mut along_normal = cfg.normal_dir * (full / 2.0 + size / 2.0);
        if let Some(depth) = cut.depth {
            along_normal -= cfg.normal_dir * (full - depth);
        }

        CutterParams {
            center: Point3d::ORIGIN + Vec3::ZERO.with(cfg.normal_axis, along_normal),
            rotation: cfg.tilt(cut.angle),
            extent: Vec3::new(size, size, size),
        }
    }
}

/// [`CutConventions::build_cutter`] with the standard conventions.
pub fn build_cutter(dimensions: &Dimensions, cut: &BoxCut) -> CutterParams {
    CutConventions::STANDARD.build_cutter(dimensions, cut)
}
