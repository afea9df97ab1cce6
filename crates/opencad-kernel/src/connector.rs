//! Beams spanning two measured points.

use tracing::{debug, info, instrument};

use opencad_types::{BoxCut, BoxSolid, CutFace, Dimensions, Point3d, Rotation3};

use crate::config::ConnectorConfig;
use crate::geometry::rotation::corner_from_visual_center;

/// Board cross-section in meters; the board's length runs along its depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AngledBoard {
    pub board: BoxSolid,
    /// Absolute pitch in degrees, clamped to the cut system maximum.
    pub pitch_degrees: f64,
    /// Distance between the endpoints in meters.
    pub length: f64,
}

/// Build a board from `a` to `b` with end miters that stand vertical once
/// the board is pitched.
///
/// Returns `None` when the endpoints are closer than `config.min_length`.
#[instrument(skip(config))]
pub fn create_angled_board(
    a: Point3d,
    b: Point3d,
    material_id: &str,
    cross_section: CrossSection,
    config: &ConnectorConfig,
) -> Option<AngledBoard> {
    let delta = b - a;
    let length = delta.length();
    if length < config.min_length {
        debug!(length, "endpoints too close for a board");
        return None;
    }

    // Yaw swings local +Z toward the target in the XZ plane. Pitch is
    // negated because a positive X rotation tips +Z downward.
    let yaw = delta.x.atan2(delta.z);
    let horizontal = (delta.x * delta.x + delta.z * delta.z).sqrt();
    let pitch = -delta.y.atan2(horizontal);
    let pitch_degrees = pitch.abs().to_degrees().min(config.max_pitch_degrees);

    let dimensions = Dimensions::new(cross_section.width, cross_section.height, length);
    let rotation = Rotation3::new(pitch, yaw, 0.0);
    let position = corner_from_visual_center(&a.midpoint(&b), &dimensions, &rotation);

    let cuts = if pitch_degrees > config.miter_threshold_degrees {
        vec![
            BoxCut::new(CutFace::Front, pitch_degrees),
            BoxCut::new(CutFace::Back, pitch_degrees),
        ]
    } else {
        Vec::new()
    };

    let board = BoxSolid::new(position, dimensions, rotation, material_id)
        .with_label("Angled Brace")
        .with_cuts(cuts);

    info!(id = %board.id, length, pitch_degrees, yaw, "created angled board");
    Some(AngledBoard {
        board,
        pitch_degrees,
        length,
    })
}
