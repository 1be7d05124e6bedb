// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Affine transforms: Euler rotations, translation, scale and decomposition

use crate::utils::math::{deg_to_rad, rad_to_deg};
use nalgebra::{Matrix3, Matrix4, Vector3};

/// Column norms and cosines below this are treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-8;

/// Normalize an angle in degrees to `(-180, 180]`
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Homogeneous rotation from Euler angles in degrees, applied X, then Y, then Z.
pub fn rotation_matrix(rx: f64, ry: f64, rz: f64) -> Matrix4<f64> {
    let (sx, cx) = deg_to_rad(rx).sin_cos();
    let (sy, cy) = deg_to_rad(ry).sin_cos();
    let (sz, cz) = deg_to_rad(rz).sin_cos();

    #[rustfmt::skip]
    let rot_x = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, cx,  -sx, 0.0,
        0.0, sx,  cx,  0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    #[rustfmt::skip]
    let rot_y = Matrix4::new(
        cy,  0.0, sy,  0.0,
        0.0, 1.0, 0.0, 0.0,
        -sy, 0.0, cy,  0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    #[rustfmt::skip]
    let rot_z = Matrix4::new(
        cz,  -sz, 0.0, 0.0,
        sz,  cz,  0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    rot_z * rot_y * rot_x
}

pub fn translation_matrix(tx: f64, ty: f64, tz: f64) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(tx, ty, tz))
}

pub fn scale_matrix(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
}

/// Compose `T * R * S`
pub fn compose_matrix(
    translation: &Vector3<f64>,
    rotation: &Vector3<f64>,
    scale: &Vector3<f64>,
) -> Matrix4<f64> {
    translation_matrix(translation.x, translation.y, translation.z)
        * rotation_matrix(rotation.x, rotation.y, rotation.z)
        * scale_matrix(scale.x, scale.y, scale.z)
}

/// Components recovered from an affine matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    pub translation: Vector3<f64>,
    /// Euler angles in degrees, each in `(-180, 180]`
    pub rotation: Vector3<f64>,
    pub scale: Vector3<f64>,
}

/// Split an affine matrix into translation, Euler rotation (degrees) and scale.
///
/// Scale is the norm of each basis column. A column whose norm is degenerate
/// contributes nothing to the rotation basis. When the Y rotation sits at
/// +/-90 degrees the Z angle is pinned to zero and X absorbs the remainder.
pub fn decompose_matrix(matrix: &Matrix4<f64>) -> Decomposition {
    let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
    let basis: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    let scale = Vector3::new(
        basis.column(0).norm(),
        basis.column(1).norm(),
        basis.column(2).norm(),
    );

    let mut r = Matrix3::zeros();
    for i in 0..3 {
        if scale[i] > DEGENERATE_EPSILON {
            r.set_column(i, &(basis.column(i) / scale[i]));
        }
    }

    let ry = (-r[(2, 0)]).clamp(-1.0, 1.0).asin();
    let (rx, rz) = if ry.cos().abs() > DEGENERATE_EPSILON {
        (r[(2, 1)].atan2(r[(2, 2)]), r[(1, 0)].atan2(r[(0, 0)]))
    } else {
        ((-r[(1, 2)]).atan2(r[(1, 1)]), 0.0)
    };

    let rotation = Vector3::new(
        normalize_angle(rad_to_deg(rx)),
        normalize_angle(rad_to_deg(ry)),
        normalize_angle(rad_to_deg(rz)),
    );

    Decomposition {
        translation,
        rotation,
        scale,
    }
}
