// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Library error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YuheError {
    #[error("Usage: {program} x y z")]
    Usage { program: String },

    #[error("Unsupported language: {0} (expected cpp, python or rust)")]
    UnsupportedLanguage(String),

    #[error("Invalid box: {message}")]
    InvalidBox { message: String },

    #[error("Grid of {points_per_axis}^3 points exceeds the limit of {limit} points")]
    GridTooLarge { points_per_axis: usize, limit: usize },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, YuheError>;
