// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Yuhe
//!
//! Oriented bounding boxes and the `is_point_in_box` predicates derived from
//! them: a command-line harness that evaluates an injected predicate, source
//! generators that emit the predicate for other languages, and grid sampling
//! to check a box against expectations.

pub mod codegen;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod harness;
pub mod logging;
pub mod predicate;
pub mod utils;

pub use codegen::{generate_function, Language};
pub use config::YuheConfig;
pub use error::{Result, YuheError};
pub use geometry::{AxisAlignedBox, BoxSpec, OrientedBox};
pub use harness::{parse_coordinate, Harness};
pub use predicate::PointPredicate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_harness() {
        let harness = Harness::new(OrientedBox::from_spec(&BoxSpec::default()).unwrap());
        assert!(harness.evaluate(&["point-in-box", "1", "2", "3"]).unwrap());
        assert!(!harness.evaluate(&["point-in-box", "100", "2", "3"]).unwrap());
    }
}
