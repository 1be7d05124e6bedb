// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Geometry module - transforms, axis-aligned and oriented boxes

mod bbox;
mod oriented;
mod transform;

pub use bbox::AxisAlignedBox;
pub use oriented::{BoxSpec, OrientedBox, CANONICAL_MAX, CANONICAL_MIN};
pub use transform::{
    compose_matrix, decompose_matrix, normalize_angle, rotation_matrix, scale_matrix,
    translation_matrix, Decomposition,
};
