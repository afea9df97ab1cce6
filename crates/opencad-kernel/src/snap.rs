//! Corner snapping and view-aware measurement.
//!
//! Snapping compares candidates in screen pixels, not world units, so the
//! same radius feels identical at every zoom level.

use std::f64::consts::PI;

use nalgebra::{Isometry3, Perspective3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use opencad_types::{Axis, BoxSolid, Point3d, Vec3};

use crate::config::SnapConfig;
use crate::geometry::bounds::box_corners;
use crate::geometry::{from_point, to_point, to_vector};

/// World to normalized device coordinates. NDC x and y span -1..1 across
/// the viewport with +y up.
pub trait Projection {
    /// `None` when the camera cannot project `world`.
    fn project_to_ndc(&self, world: &Point3d) -> Option<Point3d>;
}

/// Right-handed look-at camera with a perspective lens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    pub eye: Point3d,
    pub target: Point3d,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl PerspectiveCamera {
    pub fn new(eye: Point3d, target: Point3d, aspect: f64) -> Self {
        Self {
            eye,
            target,
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 50f64.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Whether the lens describes a usable frustum. A collapsed viewport
    /// gives an aspect of zero.
    pub fn is_valid(&self) -> bool {
        self.aspect.is_finite()
            && self.aspect.abs() > f64::EPSILON
            && self.fov_y > 0.0
            && self.fov_y < PI
            && self.near > 0.0
            && self.far.is_finite()
            && self.far - self.near > f64::EPSILON
    }
}

impl Projection for PerspectiveCamera {
    fn project_to_ndc(&self, world: &Point3d) -> Option<Point3d> {
        if !self.is_valid() {
            return None;
        }
        let eye = to_point(&self.eye);
        let target = to_point(&self.target);
        let view = Isometry3::look_at_rh(&eye, &target, &to_vector(&self.up));
        let lens = Perspective3::new(self.aspect, self.fov_y, self.near, self.far);
        let ndc = from_point(&lens.project_point(&(view * to_point(world))));
        let finite = ndc.x.is_finite() && ndc.y.is_finite() && ndc.z.is_finite();
        finite.then_some(ndc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pixel position of `world`, origin at the viewport's top-left.
pub fn project_to_screen(
    world: &Point3d,
    camera: &impl Projection,
    width: f64,
    height: f64,
) -> Option<ScreenPoint> {
    let ndc = camera.project_to_ndc(world)?;
    Some(ScreenPoint {
        x: (ndc.x + 1.0) / 2.0 * width,
        y: (1.0 - ndc.y) / 2.0 * height,
    })
}

/// World position of the visible box corner nearest to `reference` on
/// screen, if one lies strictly within `config.radius_px`.
///
/// Boxes and their corners are scanned in order; the first corner at the
/// minimum distance wins. Corners the camera cannot project are skipped.
pub fn find_nearest_snap_point(
    reference: &Point3d,
    boxes: &[BoxSolid],
    camera: &impl Projection,
    width: f64,
    height: f64,
    config: &SnapConfig,
) -> Option<Point3d> {
    let Some(target) = project_to_screen(reference, camera, width, height) else {
        debug!("reference point cannot be projected");
        return None;
    };
    let mut best: Option<(Point3d, f64)> = None;

    for b in boxes.iter().filter(|b| !b.hidden) {
        for corner in box_corners(b) {
            let Some(screen) = project_to_screen(&corner, camera, width, height) else {
                continue;
            };
            let d = screen.distance_to(&target);
            if d < config.radius_px && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((corner, d));
            }
        }
    }

    let (corner, d) = best?;
    debug!(distance_px = d, "snapped to corner");
    Some(corner)
}

/// Camera presets the viewport offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraView {
    Iso,
    Top,
    Front,
    Back,
    Left,
    Right,
    Custom,
}

impl CameraView {
    /// The axis running into the screen in an orthogonal side view.
    pub fn ignored_axis(self) -> Option<Axis> {
        match self {
            CameraView::Front | CameraView::Back => Some(Axis::Z),
            CameraView::Left | CameraView::Right => Some(Axis::X),
            CameraView::Iso | CameraView::Top | CameraView::Custom => None,
        }
    }
}

/// Euclidean distance with `ignore`'s component dropped.
pub fn measure_distance(a: &Point3d, b: &Point3d, ignore: Option<Axis>) -> f64 {
    let mut delta = *b - *a;
    if let Some(axis) = ignore {
        delta = delta.with(axis, 0.0);
    }
    delta.length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencad_types::{Dimensions, Rotation3};

    /// Orthographic stand-in: NDC is world x, y. With a 2x2 viewport one
    /// pixel equals one world unit.
    struct Flat;

    impl Projection for Flat {
        fn project_to_ndc(&self, world: &Point3d) -> Option<Point3d> {
            Some(Point3d::new(world.x, world.y, 0.0))
        }
    }

    fn unit_box() -> BoxSolid {
        let dims = Dimensions::cube(1.0);
        BoxSolid::new(Point3d::ORIGIN, dims, Rotation3::ZERO, "trim")
    }

    fn snap(reference: Point3d, boxes: &[BoxSolid]) -> Option<Point3d> {
        find_nearest_snap_point(&reference, boxes, &Flat, 2.0, 2.0, &SnapConfig::default())
    }

    fn screen(world: Point3d, camera: &impl Projection) -> ScreenPoint {
        let s = project_to_screen(&world, camera, 400.0, 400.0);
        s.expect("point is in front of the camera")
    }

    #[test]
    fn test_screen_mapping() {
        let corner = project_to_screen(&Point3d::new(1.0, 1.0, 0.0), &Flat, 800.0, 600.0);
        assert_eq!(corner.map(|s| (s.x, s.y)), Some((800.0, 0.0)));
        let center = project_to_screen(&Point3d::ORIGIN, &Flat, 800.0, 600.0);
        assert_eq!(center.map(|s| (s.x, s.y)), Some((400.0, 300.0)));
    }

    #[test]
    fn test_radius_is_exclusive() {
        assert_eq!(snap(Point3d::new(-12.0, 0.0, 0.0), &[unit_box()]), None);
    }

    #[test]
    fn test_just_inside_radius_snaps_to_first_corner() {
        // Corners (0,0,0) and (0,0,1) project to the same pixel; the first wins.
        let hit = snap(Point3d::new(-11.99, 0.0, 0.0), &[unit_box()]);
        assert_eq!(hit, Some(Point3d::ORIGIN));
    }

    #[test]
    fn test_nearest_corner_wins() {
        let hit = snap(Point3d::new(1.2, 0.9, 0.0), &[unit_box()]);
        assert_eq!(hit, Some(Point3d::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_earlier_box_wins_ties() {
        let first = unit_box();
        let second = unit_box();
        let hit = snap(Point3d::new(-0.5, 0.0, 0.0), &[first, second]);
        assert_eq!(hit, Some(Point3d::ORIGIN));
    }

    #[test]
    fn test_hidden_boxes_are_skipped() {
        let mut hidden = unit_box();
        hidden.hidden = true;
        assert_eq!(snap(Point3d::new(0.1, 0.1, 0.0), &[hidden.clone()]), None);

        let mut visible = unit_box();
        visible.position = Point3d::new(3.0, 0.0, 0.0);
        let hit = snap(Point3d::new(0.1, 0.1, 0.0), &[hidden, visible]);
        assert_eq!(hit, Some(Point3d::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn test_returns_world_position_not_screen() {
        let mut b = unit_box();
        b.position = Point3d::new(0.0, 0.0, 7.0);
        let hit = snap(Point3d::ORIGIN, &[b]);
        assert_eq!(hit, Some(Point3d::new(0.0, 0.0, 7.0)));
    }

    #[test]
    fn test_no_boxes() {
        assert_eq!(snap(Point3d::ORIGIN, &[]), None);
    }

    #[test]
    fn test_perspective_camera_centers_target() {
        let eye = Point3d::new(0.0, 0.0, 5.0);
        let camera = PerspectiveCamera::new(eye, Point3d::ORIGIN, 1.0);
        let s = screen(Point3d::ORIGIN, &camera);
        assert!((s.x - 200.0).abs() < 1e-9);
        assert!((s.y - 200.0).abs() < 1e-9);

        assert!(screen(Point3d::new(1.0, 0.0, 0.0), &camera).x > 200.0);
        assert!(screen(Point3d::new(0.0, 1.0, 0.0), &camera).y < 200.0);
    }

    #[test]
    fn test_perspective_snap() {
        let eye = Point3d::new(3.0, 3.0, 6.0);
        let camera = PerspectiveCamera::new(eye, Point3d::ORIGIN, 1.0);
        let reference = Point3d::new(1.0, 1.0, 1.001);
        let boxes = [unit_box()];
        let config = SnapConfig::default();
        let hit = find_nearest_snap_point(&reference, &boxes, &camera, 800.0, 800.0, &config);
        assert_eq!(hit, Some(Point3d::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_collapsed_viewport_never_snaps() {
        let eye = Point3d::new(0.0, 0.0, 5.0);
        let collapsed = PerspectiveCamera::new(eye, Point3d::ORIGIN, 0.0);
        assert!(!collapsed.is_valid());
        assert_eq!(collapsed.project_to_ndc(&Point3d::ORIGIN), None);

        let hit = find_nearest_snap_point(
            &Point3d::ORIGIN,
            &[unit_box()],
            &collapsed,
            0.0,
            600.0,
            &SnapConfig::default(),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_degenerate_lens_is_rejected() {
        let eye = Point3d::new(0.0, 0.0, 5.0);
        let mut camera = PerspectiveCamera::new(eye, Point3d::ORIGIN, 1.0);
        assert!(camera.is_valid());

        camera.far = camera.near;
        assert!(!camera.is_valid());
        assert_eq!(camera.project_to_ndc(&Point3d::ORIGIN), None);

        camera.far = 1000.0;
        camera.aspect = f64::NAN;
        assert!(!camera.is_valid());
        assert_eq!(camera.project_to_ndc(&Point3d::ORIGIN), None);
    }

    #[test]
    fn test_view_aware_distance() {
        let a = Point3d::ORIGIN;
        let b = Point3d::new(3.0, 4.0, 5.0);
        let front = measure_distance(&a, &b, CameraView::Front.ignored_axis());
        let back = measure_distance(&a, &b, CameraView::Back.ignored_axis());
        let iso = measure_distance(&a, &b, CameraView::Iso.ignored_axis());
        let left = measure_distance(&a, &b, CameraView::Left.ignored_axis());
        let top = measure_distance(&a, &b, CameraView::Top.ignored_axis());
        assert_eq!(front, 5.0);
        assert_eq!(back, 5.0);
        assert!((iso - 50f64.sqrt()).abs() < 1e-12);
        assert!((left - 41f64.sqrt()).abs() < 1e-12);
        assert_eq!(top, measure_distance(&a, &b, None));
    }
}
