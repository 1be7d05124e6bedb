// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Test grids: sample a region on a regular lattice and classify every point

use crate::error::{Result, YuheError};
use crate::geometry::AxisAlignedBox;
use crate::predicate::PointPredicate;
use crate::utils::math::linspace;
use nalgebra::Point3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Largest number of points a single grid may hold
pub const MAX_GRID_POINTS: usize = 50_000_000;
/// Largest per-axis count whose cube stays within [`MAX_GRID_POINTS`]
pub const MAX_POINTS_PER_AXIS: usize = 368;

/// Number of points in a grid with `points_per_axis` samples on each axis
pub fn grid_size(points_per_axis: usize) -> Result<usize> {
    points_per_axis
        .checked_mul(points_per_axis)
        .and_then(|n| n.checked_mul(points_per_axis))
        .filter(|n| *n <= MAX_GRID_POINTS)
        .ok_or(YuheError::GridTooLarge {
            points_per_axis,
            limit: MAX_GRID_POINTS,
        })
}

/// `points_per_axis^3` points covering the cube `[min, max]^3`
pub fn generate_test_grid(min: f64, max: f64, points_per_axis: usize) -> Result<Vec<Point3<f64>>> {
    let bounds = AxisAlignedBox::new(Point3::new(min, min, min), Point3::new(max, max, max));
    generate_grid_in(&bounds, points_per_axis)
}

/// Lattice over `bounds`, X varying fastest
pub fn generate_grid_in(bounds: &AxisAlignedBox, points_per_axis: usize) -> Result<Vec<Point3<f64>>> {
    let size = grid_size(points_per_axis)?;
    let xs = linspace(bounds.min.x, bounds.max.x, points_per_axis);
    let ys = linspace(bounds.min.y, bounds.max.y, points_per_axis);
    let zs = linspace(bounds.min.z, bounds.max.z, points_per_axis);

    let mut points = Vec::with_capacity(size);
    for &z in &zs {
        for &y in &ys {
            for &x in &xs {
                points.push(Point3::new(x, y, z));
            }
        }
    }
    Ok(points)
}

/// Outcome of classifying a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridReport {
    pub points_per_axis: usize,
    pub bounds: AxisAlignedBox,
    pub total: usize,
    pub inside: usize,
    pub outside: usize,
}

impl GridReport {
    pub fn inside_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.inside as f64 / self.total as f64
        }
    }
}

/// Count how many points satisfy `predicate`, in parallel
pub fn count_inside<P>(predicate: &P, points: &[Point3<f64>]) -> usize
where
    P: PointPredicate + Sync,
{
    points
        .par_iter()
        .filter(|p| predicate.is_point_in_box(p.x, p.y, p.z))
        .count()
}

pub fn evaluate_grid<P>(
    predicate: &P,
    bounds: &AxisAlignedBox,
    points_per_axis: usize,
) -> Result<GridReport>
where
    P: PointPredicate + Sync,
{
    let points = generate_grid_in(bounds, points_per_axis)?;
    let inside = count_inside(predicate, &points);
    tracing::debug!(total = points.len(), inside, "grid evaluated");

    Ok(GridReport {
        points_per_axis,
        bounds: *bounds,
        total: points.len(),
        inside,
        outside: points.len() - inside,
    })
}
