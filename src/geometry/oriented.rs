// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Oriented boxes built from translation, Euler rotation, scale and padding

use super::transform::{compose_matrix, decompose_matrix, rotation_matrix};
use super::AxisAlignedBox;
use crate::error::{Result, YuheError};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Lower corner of the canonical box on every axis
pub const CANONICAL_MIN: f64 = -0.5;
/// Upper corner of the canonical box on every axis
pub const CANONICAL_MAX: f64 = 0.5;

/// User-facing box description.
///
/// The canonical cube `[CANONICAL_MIN, CANONICAL_MAX]^3` is scaled, rotated
/// (X, then Y, then Z, in degrees) and translated, then grown by `padding`
/// on every face. When `matrix` is set (16 values, row-major) it replaces
/// translation, rotation and scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSpec {
    pub translation: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
    pub padding: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<f64>>,
}

impl Default for BoxSpec {
    /// The box `[0, 10]^3`
    fn default() -> Self {
        Self {
            translation: [5.0, 5.0, 5.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [10.0, 10.0, 10.0],
            padding: 0.0,
            matrix: None,
        }
    }
}

impl BoxSpec {
    /// Box spanning `[min, max]` on every axis without rotation
    pub fn axis_aligned(min: Point3<f64>, max: Point3<f64>) -> Self {
        let center = nalgebra::center(&min, &max);
        let size = max - min;
        Self {
            translation: center.coords.into(),
            scale: size.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn finite(values: &[f64]) -> bool {
            values.iter().all(|v| v.is_finite())
        }

        if !finite(&self.translation) || !finite(&self.rotation) {
            return Err(invalid("translation and rotation must be finite"));
        }
        if !finite(&self.scale) || self.scale.iter().any(|s| *s < 0.0) {
            return Err(invalid("scale components must be finite and non-negative"));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(invalid("padding must be finite and non-negative"));
        }
        if let Some(matrix) = &self.matrix {
            if matrix.len() != 16 {
                return Err(invalid(&format!(
                    "matrix needs 16 values, got {}",
                    matrix.len()
                )));
            }
            if !finite(matrix) {
                return Err(invalid("matrix values must be finite"));
            }
        }
        Ok(())
    }

    /// Translation, rotation (degrees) and scale, taking `matrix` into account
    pub fn components(&self) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        match &self.matrix {
            Some(values) if values.len() == 16 => {
                let d = decompose_matrix(&Matrix4::from_row_slice(values));
                (d.translation, d.rotation, d.scale)
            }
            _ => (
                Vector3::from(self.translation),
                Vector3::from(self.rotation),
                Vector3::from(self.scale),
            ),
        }
    }

    /// Composed `T * R * S` matrix, padding excluded
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let (translation, rotation, scale) = self.components();
        compose_matrix(&translation, &rotation, &scale)
    }
}

fn invalid(message: &str) -> YuheError {
    YuheError::InvalidBox {
        message: message.to_string(),
    }
}

/// Box in world space, stored as a local frame for containment tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    center: Point3<f64>,
    /// Local-to-world rotation; columns are the box axes
    rotation: Matrix3<f64>,
    half_extents: Vector3<f64>,
}

impl Default for OrientedBox {
    /// The box `[0, 10]^3`, as described by `BoxSpec::default()`
    fn default() -> Self {
        let spec = BoxSpec::default();
        Self::new(
            Vector3::from(spec.translation),
            Vector3::from(spec.rotation),
            Vector3::from(spec.scale),
            spec.padding,
        )
    }
}

impl OrientedBox {
    pub fn new(
        translation: Vector3<f64>,
        rotation_degrees: Vector3<f64>,
        scale: Vector3<f64>,
        padding: f64,
    ) -> Self {
        let rotation = rotation_matrix(rotation_degrees.x, rotation_degrees.y, rotation_degrees.z)
            .fixed_view::<3, 3>(0, 0)
            .into_owned();
        let canonical_half = (CANONICAL_MAX - CANONICAL_MIN) / 2.0;
        let canonical_center = (CANONICAL_MAX + CANONICAL_MIN) / 2.0;
        let offset = rotation * scale.map(|s| s * canonical_center);

        Self {
            center: Point3::from(translation + offset),
            rotation,
            half_extents: scale.map(|s| s * canonical_half + padding),
        }
    }

    pub fn from_spec(spec: &BoxSpec) -> Result<Self> {
        spec.validate()?;
        let (translation, rotation, scale) = spec.components();
        Ok(Self::new(translation, rotation, scale, spec.padding))
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    pub fn half_extents(&self) -> Vector3<f64> {
        self.half_extents
    }

    /// Coordinates of `point` along the box axes, relative to the center
    pub fn to_local(&self, point: &Point3<f64>) -> Vector3<f64> {
        self.rotation.transpose() * (point - self.center)
    }

    /// Faces are part of the box. NaN coordinates are never inside.
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let local = self.to_local(point);
        local
            .iter()
            .zip(self.half_extents.iter())
            .all(|(l, h)| l.abs() <= *h)
    }

    pub fn corners(&self) -> [Point3<f64>; 8] {
        let h = self.half_extents;
        let mut corners = [self.center; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let signs = Vector3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            *corner = self.center + self.rotation * signs.component_mul(&h);
        }
        corners
    }

    /// World-space axis-aligned bounds of the box
    pub fn bounds(&self) -> AxisAlignedBox {
        AxisAlignedBox::from_points(&self.corners())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_spec_is_zero_to_ten() {
        let obb = OrientedBox::from_spec(&BoxSpec::default()).unwrap();
        let bounds = obb.bounds();

        assert_eq!(obb, OrientedBox::default());
        assert_relative_eq!(bounds.min, Point3::origin(), epsilon = 1e-12);
        assert_relative_eq!(bounds.max, Point3::new(10.0, 10.0, 10.0), epsilon = 1e-12);
        assert!(obb.contains(&Point3::new(1.0, 2.0, 3.0)));
        assert!(obb.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(obb.contains(&Point3::new(10.0, 10.0, 10.0)));
        assert!(!obb.contains(&Point3::new(100.0, 2.0, 3.0)));
        assert!(!obb.contains(&Point3::new(f64::NAN, 2.0, 3.0)));
    }

    #[test]
    fn test_axis_aligned_spec() {
        let spec = BoxSpec::axis_aligned(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 4.0, 3.0));
        assert_eq!(spec.translation, [0.0, 2.0, 2.5]);
        assert_eq!(spec.scale, [2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_rotated_box_uses_local_frame() {
        // Long along X before rotation, long along Y after 90 degrees about Z.
        let obb = OrientedBox::new(
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 90.0),
            Vector3::new(4.0, 1.0, 1.0),
            0.0,
        );

        assert!(obb.contains(&Point3::new(0.0, 1.9, 0.0)));
        assert!(!obb.contains(&Point3::new(1.9, 0.0, 0.0)));
        assert_relative_eq!(
            obb.bounds().size(),
            Vector3::new(1.0, 4.0, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rotated_45_about_z() {
        let obb = OrientedBox::new(
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 45.0),
            Vector3::new(1.0, 1.0, 1.0),
            0.0,
        );
        // A corner of the unrotated cube now falls outside; a point on the
        // rotated diagonal further out is still inside.
        assert!(!obb.contains(&Point3::new(0.45, 0.45, 0.0)));
        assert!(obb.contains(&Point3::new(0.0, 0.7, 0.0)));
    }

    #[test]
    fn test_padding_grows_box() {
        let tight = OrientedBox::new(Vector3::zeros(), Vector3::zeros(), Vector3::repeat(1.0), 0.0);
        let padded = OrientedBox::new(Vector3::zeros(), Vector3::zeros(), Vector3::repeat(1.0), 0.25);
        let point = Point3::new(0.7, 0.0, 0.0);

        assert!(!tight.contains(&point));
        assert!(padded.contains(&point));
        assert_relative_eq!(padded.half_extents(), Vector3::repeat(0.75));
    }

    #[test]
    fn test_matrix_overrides_components() {
        let reference = BoxSpec {
            translation: [1.0, 0.5, -0.5],
            rotation: [10.0, 20.0, 30.0],
            scale: [2.0, 0.5, 1.5],
            padding: 0.0,
            matrix: None,
        };
        let m = reference.to_matrix();
        let from_matrix = BoxSpec {
            matrix: Some(m.transpose().as_slice().to_vec()),
            ..BoxSpec::default()
        };

        let a = OrientedBox::from_spec(&reference).unwrap();
        let b = OrientedBox::from_spec(&from_matrix).unwrap();
        assert_relative_eq!(a.center(), b.center(), epsilon = 1e-9);
        assert_relative_eq!(a.rotation(), b.rotation(), epsilon = 1e-9);
        assert_relative_eq!(a.half_extents(), b.half_extents(), epsilon = 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_specs() {
        let negative_scale = BoxSpec {
            scale: [1.0, -1.0, 1.0],
            ..BoxSpec::default()
        };
        assert!(negative_scale.validate().is_err());

        let negative_padding = BoxSpec {
            padding: -0.1,
            ..BoxSpec::default()
        };
        assert!(negative_padding.validate().is_err());

        let short_matrix = BoxSpec {
            matrix: Some(vec![1.0; 9]),
            ..BoxSpec::default()
        };
        assert!(matches!(
            OrientedBox::from_spec(&short_matrix),
            Err(YuheError::InvalidBox { .. })
        ));
    }
}
