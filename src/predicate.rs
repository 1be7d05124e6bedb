// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Point-in-box predicates

use crate::geometry::{AxisAlignedBox, OrientedBox};
use nalgebra::Point3;

/// A containment test the harness can be built around.
///
/// Any `Fn(f64, f64, f64) -> bool` closure or function pointer qualifies, so
/// generated code can be plugged in without wrapping it.
pub trait PointPredicate {
    fn is_point_in_box(&self, x: f64, y: f64, z: f64) -> bool;
}

impl<F> PointPredicate for F
where
    F: Fn(f64, f64, f64) -> bool,
{
    fn is_point_in_box(&self, x: f64, y: f64, z: f64) -> bool {
        self(x, y, z)
    }
}

impl PointPredicate for AxisAlignedBox {
    fn is_point_in_box(&self, x: f64, y: f64, z: f64) -> bool {
        self.contains(&Point3::new(x, y, z))
    }
}

impl PointPredicate for OrientedBox {
    fn is_point_in_box(&self, x: f64, y: f64, z: f64) -> bool {
        self.contains(&Point3::new(x, y, z))
    }
}
