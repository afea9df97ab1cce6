//! Tunable constants for the engine components.

use opencad_types::Dimensions;

/// Settings for beams drawn between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorConfig {
    /// Endpoints closer than this produce no beam (meters).
    pub min_length: f64,
    /// Reported pitch is clamped to this, matching the cut system maximum.
    pub max_pitch_degrees: f64,
    /// At or below this pitch the beam counts as level and gets no miters.
    pub miter_threshold_degrees: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            min_length: 2.0 * 0.0254, // 2 inches
            max_pitch_degrees: 89.0,
            miter_threshold_degrees: 0.1,
        }
    }
}

/// Settings for scanning new boxes into free space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackerConfig {
    /// Minimum gap kept between a placed shape and existing boxes (meters).
    pub spacing: f64,
    /// Size of boxes created without explicit dimensions.
    pub default_dimensions: Dimensions,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            spacing: 0.25,
            default_dimensions: Dimensions::cube(1.0),
        }
    }
}

/// Settings for corner snapping during measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Screen-space radius in pixels. A corner exactly this far away misses.
    pub radius_px: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self { radius_px: 12.0 }
    }
}
