//! Wedge-cut synthesis.
//!
//! A cut is produced by subtracting an oversized, rotated cutter box from the
//! target box. Both the cutter and the cut-plane preview are computed in the
//! box's local frame, relative to its center.
//!
//! Per-face behavior lives in two tables bundled as [`CutConventions`]; the
//! algorithms only read them, so alternative conventions can be passed in.

pub mod cutter;
pub mod plane;

use std::f64::consts::FRAC_PI_2;

use opencad_types::{Axis, CutFace, Rotation3};

pub use cutter::{build_cutter, CutterParams};
pub use plane::{build_cut_plane_visualization, CutPlaneVisualization};

/// Largest cut angle in degrees before the wedge degenerates.
pub const MAX_CUT_ANGLE_DEGREES: f64 = 89.0;

/// Cutter edge length as a multiple of the box's largest dimension.
pub const CUTTER_OVERSIZE: f64 = 3.0;

/// How a face is cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    /// Local axis the face normal lies along.
    pub normal_axis: Axis,
    /// `+1.0` or `-1.0`: which end of `normal_axis` the face sits on.
    pub normal_dir: f64,
    /// Axis the wedge hinges around.
    pub pivot_axis: Axis,
    /// Sign applied to the cut angle about `pivot_axis`.
    pub rotation_sign: f64,
}

impl FaceConfig {
    const fn new(normal_axis: Axis, normal_dir: f64, pivot_axis: Axis, rotation_sign: f64) -> Self {
        Self {
            normal_axis,
            normal_dir,
            pivot_axis,
            rotation_sign,
        }
    }

    /// Signed pivot rotation for a cut angle given in degrees.
    pub fn tilt(&self, angle_degrees: f64) -> Rotation3 {
        let angle = self.rotation_sign * angle_degrees.to_radians();
        Rotation3::about(self.pivot_axis, angle)
    }
}

/// Where the cut-plane preview sits on a face.
///
/// `hinge` and `offset` are multipliers of the box half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneLayout {
    pub hinge: [f64; 3],
    pub offset: [f64; 3],
    /// Orientation that lays a default XY plane onto the face.
    pub orientation: Rotation3,
    /// Local axes supplying the plane's width and height.
    pub size_axes: (Axis, Axis),
}

impl PlaneLayout {
    const fn new(
        hinge: [f64; 3],
        offset: [f64; 3],
        orientation: Rotation3,
        size_axes: (Axis, Axis),
    ) -> Self {
        Self {
            hinge,
            offset,
            orientation,
            size_axes,
        }
    }
}

const FLAT: Rotation3 = Rotation3::ZERO;
const LAID_DOWN: Rotation3 = Rotation3::new(-FRAC_PI_2, 0.0, 0.0);
const SIDEWAYS: Rotation3 = Rotation3::new(0.0, FRAC_PI_2, 0.0);

/// Per-face tables, indexed by [`CutFace::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutConventions {
    pub faces: [FaceConfig; 6],
    pub planes: [PlaneLayout; 6],
}

impl CutConventions {
    #[rustfmt::skip]
    pub const STANDARD: CutConventions = CutConventions {
        faces: [
            FaceConfig::new(Axis::Y,  1.0, Axis::X,  1.0), // top
            FaceConfig::new(Axis::Y, -1.0, Axis::X, -1.0), // bottom
            FaceConfig::new(Axis::Z,  1.0, Axis::X, -1.0), // front
            FaceConfig::new(Axis::Z, -1.0, Axis::X,  1.0), // back
            FaceConfig::new(Axis::X, -1.0, Axis::Z,  1.0), // left
            FaceConfig::new(Axis::X,  1.0, Axis::Z, -1.0), // right
        ],
        planes: [
            PlaneLayout::new([ 0.0,  1.0, -1.0], [0.0,  0.0, 1.0], LAID_DOWN, (Axis::X, Axis::Z)),
            PlaneLayout::new([ 0.0, -1.0, -1.0], [0.0,  0.0, 1.0], LAID_DOWN, (Axis::X, Axis::Z)),
            PlaneLayout::new([ 0.0,  1.0,  1.0], [0.0, -1.0, 0.0], FLAT,      (Axis::X, Axis::Y)),
            PlaneLayout::new([ 0.0,  1.0, -1.0], [0.0, -1.0, 0.0], FLAT,      (Axis::X, Axis::Y)),
            PlaneLayout::new([-1.0,  1.0,  0.0], [0.0, -1.0, 0.0], SIDEWAYS,  (Axis::Z, Axis::Y)),
            PlaneLayout::new([ 1.0,  1.0,  0.0], [0.0, -1.0, 0.0], SIDEWAYS,  (Axis::Z, Axis::Y)),
        ],
    };

    pub fn face(&self, face: CutFace) -> &FaceConfig {
        &self.faces[face.index()]
    }

    pub fn plane(&self, face: CutFace) -> &PlaneLayout {
        &self.planes[face.index()]
    }

    /// The same conventions with `left` and `right` exchanged, for frames
    /// where the X axis is mirrored.
    pub fn mirrored(&self) -> Self {
        let mut out = *self;
        let (l, r) = (CutFace::Left.index(), CutFace::Right.index());
        out.faces.swap(l, r);
        out.planes.swap(l, r);
        out
    }
}

impl Default for CutConventions {
    fn default() -> Self {
        Self::STANDARD
    }
}
