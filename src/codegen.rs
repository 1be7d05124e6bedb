// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Source generators for `is_point_in_box`
//!
//! Each generator bakes the box's center, inverse rotation and half extents
//! into literals, so the emitted function performs exactly the test of
//! [`OrientedBox::contains`]: move the point into the box frame and compare
//! each coordinate against the half extent, faces included.

use crate::error::YuheError;
use crate::geometry::OrientedBox;
use std::fmt;
use std::str::FromStr;

pub const FUNCTION_NAME: &str = "is_point_in_box";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Python,
    Rust,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = YuheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            "python" | "py" => Ok(Language::Python),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(YuheError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Constants of the containment test, as they appear in generated code
struct Frame {
    center: [f64; 3],
    /// Rows of the world-to-local rotation
    rows: [[f64; 3]; 3],
    half_extents: [f64; 3],
}

impl Frame {
    fn of(obb: &OrientedBox) -> Self {
        let inverse = obb.rotation().transpose();
        let row = |i: usize| [inverse[(i, 0)], inverse[(i, 1)], inverse[(i, 2)]];
        Self {
            center: obb.center().coords.into(),
            rows: [row(0), row(1), row(2)],
            half_extents: obb.half_extents().into(),
        }
    }
}

const DELTAS: [&str; 3] = ["dx", "dy", "dz"];
const LOCALS: [&str; 3] = ["lx", "ly", "lz"];
const AXES: [&str; 3] = ["x", "y", "z"];

/// Float literal valid in all three target languages
fn literal(value: f64) -> String {
    format!("{:?}", value)
}

/// `var - c`, written as `var + |c|` for negative offsets
fn offset(var: &str, c: f64) -> String {
    let c = if c == 0.0 { 0.0 } else { c };
    if c < 0.0 {
        format!("{} + {}", var, literal(-c))
    } else {
        format!("{} - {}", var, literal(c))
    }
}

/// `r0 * dx + r1 * dy + r2 * dz` with signs folded into the operators
fn dot(row: &[f64; 3]) -> String {
    let mut expr = String::new();
    for (i, (coefficient, var)) in row.iter().zip(DELTAS).enumerate() {
        let negative = *coefficient < 0.0;
        let magnitude = literal(coefficient.abs());
        match (i, negative) {
            (0, false) => expr.push_str(&format!("{} * {}", magnitude, var)),
            (0, true) => expr.push_str(&format!("-{} * {}", magnitude, var)),
            (_, false) => expr.push_str(&format!(" + {} * {}", magnitude, var)),
            (_, true) => expr.push_str(&format!(" - {} * {}", magnitude, var)),
        }
    }
    expr
}

pub fn generate_function(obb: &OrientedBox, language: Language) -> String {
    let frame = Frame::of(obb);
    match language {
        Language::Cpp => generate_cpp(&frame),
        Language::Python => generate_python(&frame),
        Language::Rust => generate_rust(&frame),
    }
}

fn generate_cpp(frame: &Frame) -> String {
    let mut src = String::new();
    src.push_str("#include <cmath>\n\n");
    src.push_str(&format!(
        "bool {}(double x, double y, double z) {{\n",
        FUNCTION_NAME
    ));
    for i in 0..3 {
        src.push_str(&format!(
            "    const double {} = {};\n",
            DELTAS[i],
            offset(AXES[i], frame.center[i])
        ));
    }
    for i in 0..3 {
        src.push_str(&format!(
            "    const double {} = {};\n",
            LOCALS[i],
            dot(&frame.rows[i])
        ));
    }
    let checks: Vec<String> = (0..3)
        .map(|i| format!("std::fabs({}) <= {}", LOCALS[i], literal(frame.half_extents[i])))
        .collect();
    src.push_str(&format!("    return {};\n", checks.join(" && ")));
    src.push_str("}\n");
    src
}

fn generate_python(frame: &Frame) -> String {
    let mut src = String::new();
    src.push_str(&format!(
        "def {}(x: float, y: float, z: float) -> bool:\n",
        FUNCTION_NAME
    ));
    for i in 0..3 {
        src.push_str(&format!(
            "    {} = {}\n",
            DELTAS[i],
            offset(AXES[i], frame.center[i])
        ));
    }
    for i in 0..3 {
        src.push_str(&format!("    {} = {}\n", LOCALS[i], dot(&frame.rows[i])));
    }
    let checks: Vec<String> = (0..3)
        .map(|i| format!("abs({}) <= {}", LOCALS[i], literal(frame.half_extents[i])))
        .collect();
    src.push_str(&format!("    return {}\n", checks.join(" and ")));
    src
}

fn generate_rust(frame: &Frame) -> String {
    let mut src = String::new();
    src.push_str(&format!(
        "pub fn {}(x: f64, y: f64, z: f64) -> bool {{\n",
        FUNCTION_NAME
    ));
    for i in 0..3 {
        src.push_str(&format!(
            "    let {} = {};\n",
            DELTAS[i],
            offset(AXES[i], frame.center[i])
        ));
    }
    for i in 0..3 {
        src.push_str(&format!("    let {} = {};\n", LOCALS[i], dot(&frame.rows[i])));
    }
    let checks: Vec<String> = (0..3)
        .map(|i| format!("{}.abs() <= {}", LOCALS[i], literal(frame.half_extents[i])))
        .collect();
    src.push_str(&format!("    {}\n", checks.join(" && ")));
    src.push_str("}\n");
    src
}
