use serde::{Deserialize, Serialize};

use opencad_types::{BoxCut, Dimensions, Point3d, Rotation3, Vec3};

use super::CutConventions;

/// Preview plane for a cut, relative to the box center.
///
/// The renderer places a group at `hinge` rotated by `plane_rotation`, and
/// inside it a plane of `size` at `offset` oriented by `plane_orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPlaneVisualization {
    /// Midpoint of the edge the cut pivots on.
    pub hinge: Point3d,
    /// Plane center relative to the hinge, before tilting.
    pub offset: Vec3,
    /// Tilt by the cut angle; same axis and sign as the cutter.
    pub plane_rotation: Rotation3,
    pub plane_orientation: Rotation3,
    pub size: (f64, f64),
}

impl CutConventions {
    pub fn build_cut_plane_visualization(
        &self,
        dimensions: &Dimensions,
        cut: &BoxCut,
    ) -> CutPlaneVisualization {
        let layout = self.plane(cut.face);
        let half = dimensions.half_extents();
        let scale = |m: [f64; 3]| Vec3::new(m[0] * half.x, m[1] * half.y, m[2] * half.z);

        CutPlaneVisualization {
            hinge: Point3d::ORIGIN + scale(layout.hinge),
            offset: scale(layout.offset),
            plane_rotation: self.face(cut.face).tilt(cut.angle),
            plane_orientation: layout.orientation,
            size: (
                dimensions.along(layout.size_axes.0),
                dimensions.along(layout.size_axes.1),
            ),
        }
    }
}

pub fn build_cut_plane_visualization(
    dimensions: &Dimensions,
    cut: &BoxCut,
) -> CutPlaneVisualization {
    CutConventions::STANDARD.build_cut_plane_visualization(dimensions, cut)
}
