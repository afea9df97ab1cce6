use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::point::{Point3d, Vec3};
use crate::rotation::{deserialize_rotation, Axis, Rotation3};

/// Box extents in meters along the box's local X, Y and Z axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn cube(size: f64) -> Self {
        Self::new(size, size, size)
    }

    /// Extent along a local axis: X is width, Y is height, Z is depth.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }

    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height).max(self.depth)
    }
}

/// A face of a box, named in the box's own untransformed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutFace {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl CutFace {
    pub const ALL: [CutFace; 6] = [
        CutFace::Top,
        CutFace::Bottom,
        CutFace::Front,
        CutFace::Back,
        CutFace::Left,
        CutFace::Right,
    ];

    /// Stable index into per-face tables, in `ALL` order.
    pub fn index(self) -> usize {
        match self {
            CutFace::Top => 0,
            CutFace::Bottom => 1,
            CutFace::Front => 2,
            CutFace::Back => 3,
            CutFace::Left => 4,
            CutFace::Right => 5,
        }
    }
}

/// An angled wedge removed from one face of a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxCut {
    pub id: Uuid,
    pub face: CutFace,
    /// Cut angle in degrees, `0..=89`.
    pub angle: f64,
    /// Partial cut depth in meters along the face normal. `None` cuts through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl BoxCut {
    pub fn new(face: CutFace, angle: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            face,
            angle,
            depth: None,
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// A rectangular solid in the design.
///
/// `position` is the minimum-coordinate corner before rotation, not the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSolid {
    pub id: Uuid,
    pub position: Point3d,
    pub dimensions: Dimensions,
    #[serde(default, deserialize_with = "deserialize_rotation")]
    pub rotation: Rotation3,
    pub material_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuts: Vec<BoxCut>,
}

impl BoxSolid {
    pub fn new(
        position: Point3d,
        dimensions: Dimensions,
        rotation: Rotation3,
        material_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            dimensions,
            rotation,
            material_id: material_id.into(),
            label: None,
            group_id: None,
            locked: false,
            hidden: false,
            cuts: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_cuts(mut self, cuts: Vec<BoxCut>) -> Self {
        self.cuts = cuts;
        self
    }

    /// Copy of this box with a new id for the box and each of its cuts.
    pub fn reissued(&self) -> Self {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        for cut in &mut copy.cuts {
            cut.id = Uuid::new_v4();
        }
        copy
    }
}
