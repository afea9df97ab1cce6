//! Checks callers run before handing data to the engine.
//!
//! The geometry functions assume positive dimensions and in-range cut
//! angles and never re-check them.

use thiserror::Error;

use opencad_types::{BoxCut, Dimensions};

use crate::cuts::{CutConventions, MAX_CUT_ANGLE_DEGREES};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{parameter} must be positive, got {value}")]
    InvalidDimension { parameter: &'static str, value: f64 },

    #[error("{parameter} is not a finite number")]
    NonFiniteValue { parameter: &'static str },

    #[error("cut angle {angle} is outside 0..=89 degrees")]
    CutAngleOutOfRange { angle: f64 },

    #[error("cut depth {depth} must be positive and at most {max}")]
    CutDepthOutOfRange { depth: f64, max: f64 },
}

fn positive(parameter: &'static str, value: f64) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFiniteValue { parameter });
    }
    if value <= 0.0 {
        return Err(GeometryError::InvalidDimension { parameter, value });
    }
    Ok(())
}

pub fn validate_dimensions(dimensions: &Dimensions) -> Result<(), GeometryError> {
    positive("width", dimensions.width)?;
    positive("height", dimensions.height)?;
    positive("depth", dimensions.depth)
}

impl CutConventions {
    /// Validate a cut against the box it will be applied to. The depth
    /// bound is the box extent along the face normal these conventions give.
    pub fn validate_cut(&self, dimensions: &Dimensions, cut: &BoxCut) -> Result<(), GeometryError> {
        if !cut.angle.is_finite() {
            return Err(GeometryError::NonFiniteValue { parameter: "angle" });
        }
        if !(0.0..=MAX_CUT_ANGLE_DEGREES).contains(&cut.angle) {
            return Err(GeometryError::CutAngleOutOfRange { angle: cut.angle });
        }
        if let Some(depth) = cut.depth {
            let max = dimensions.along(self.face(cut.face).normal_axis);
            if !depth.is_finite() || depth <= 0.0 || depth > max {
                return Err(GeometryError::CutDepthOutOfRange { depth, max });
            }
        }
        Ok(())
    }
}

/// [`CutConventions::validate_cut`] with the standard conventions.
pub fn validate_cut(dimensions: &Dimensions, cut: &BoxCut) -> Result<(), GeometryError> {
    CutConventions::STANDARD.validate_cut(dimensions, cut)
}

/// Clamp a user-entered angle into the valid cut range. NaN becomes 0.
pub fn clamp_cut_angle(angle: f64) -> f64 {
    if angle.is_nan() {
        return 0.0;
    }
    angle.clamp(0.0, MAX_CUT_ANGLE_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencad_types::{Axis, CutFace};

    fn cut(face: CutFace, angle: f64) -> BoxCut {
        BoxCut::new(face, angle)
    }

    #[test]
    fn test_valid_dimensions() {
        assert!(validate_dimensions(&Dimensions::new(0.1, 0.2, 0.3)).is_ok());
    }

    #[test]
    fn test_zero_and_negative_dimensions() {
        let err = validate_dimensions(&Dimensions::new(1.0, 0.0, 1.0)).unwrap_err();
        let expected = GeometryError::InvalidDimension {
            parameter: "height",
            value: 0.0,
        };
        assert_eq!(err, expected);
        let err = validate_dimensions(&Dimensions::new(1.0, 1.0, -2.0)).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDimension { .. }));
        let err = validate_dimensions(&Dimensions::new(f64::NAN, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, GeometryError::NonFiniteValue { parameter: "width" });
    }

    #[test]
    fn test_cut_angle_range() {
        let dims = Dimensions::cube(1.0);
        assert!(validate_cut(&dims, &cut(CutFace::Top, 0.0)).is_ok());
        assert!(validate_cut(&dims, &cut(CutFace::Top, 89.0)).is_ok());
        assert_eq!(
            validate_cut(&dims, &cut(CutFace::Top, 89.5)),
            Err(GeometryError::CutAngleOutOfRange { angle: 89.5 })
        );
        assert!(validate_cut(&dims, &cut(CutFace::Top, -1.0)).is_err());
    }

    #[test]
    fn test_cut_depth_bounded_by_normal_dimension() {
        let dims = Dimensions::new(0.5, 1.0, 2.0);
        let through = cut(CutFace::Front, 10.0).with_depth(2.0);
        assert!(validate_cut(&dims, &through).is_ok());

        let too_deep = cut(CutFace::Left, 10.0).with_depth(0.6);
        let err = validate_cut(&dims, &too_deep).unwrap_err();
        let expected = GeometryError::CutDepthOutOfRange {
            depth: 0.6,
            max: 0.5,
        };
        assert_eq!(err, expected);

        let empty = cut(CutFace::Top, 10.0).with_depth(0.0);
        assert!(validate_cut(&dims, &empty).is_err());
    }

    #[test]
    fn test_depth_follows_given_conventions() {
        let dims = Dimensions::new(0.5, 1.0, 2.0);
        let top = cut(CutFace::Top, 10.0).with_depth(1.5);

        let mut along_depth = CutConventions::STANDARD;
        along_depth.faces[CutFace::Top.index()].normal_axis = Axis::Z;
        assert_eq!(along_depth.validate_cut(&dims, &top), Ok(()));

        let err = CutConventions::STANDARD.validate_cut(&dims, &top);
        let expected = GeometryError::CutDepthOutOfRange {
            depth: 1.5,
            max: 1.0,
        };
        assert_eq!(err, Err(expected));
        assert_eq!(validate_cut(&dims, &top), err);
    }

    #[test]
    fn test_clamp_cut_angle() {
        assert_eq!(clamp_cut_angle(-5.0), 0.0);
        assert_eq!(clamp_cut_angle(45.0), 45.0);
        assert_eq!(clamp_cut_angle(120.0), 89.0);
        assert_eq!(clamp_cut_angle(f64::NAN), 0.0);
    }

    #[test]
    fn test_error_messages() {
        let msg = GeometryError::CutAngleOutOfRange { angle: 95.0 }.to_string();
        assert_eq!(msg, "cut angle 95 is outside 0..=89 degrees");
    }
}
