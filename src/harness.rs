// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Command-line harness around a single point-in-box predicate
//!
//! `program x y z` prints `1` when the predicate holds and `0` otherwise.
//! Coordinates are parsed permissively: text without a numeric prefix reads
//! as `0.0` and never fails the run. Fewer than three coordinates prints a
//! usage line to the error stream and exits with [`EXIT_USAGE`].

use crate::error::{Result, YuheError};
use crate::predicate::PointPredicate;
use std::ffi::OsString;
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;

/// Program name used in the usage line when `argv[0]` is missing
pub const DEFAULT_PROGRAM: &str = "point-in-box";

pub struct Harness<P> {
    predicate: P,
}

impl<P: PointPredicate> Harness<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Evaluate a full argument list, program name first. Extra arguments
    /// after the third coordinate are ignored.
    pub fn evaluate<S: AsRef<str>>(&self, args: &[S]) -> Result<bool> {
        let program = args
            .first()
            .map(|p| p.as_ref().to_string())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        let [x, y, z] = match args.get(1..4) {
            Some([x, y, z]) => [x, y, z].map(|arg| parse_coordinate(arg.as_ref())),
            _ => return Err(YuheError::Usage { program }),
        };

        let inside = self.predicate.is_point_in_box(x, y, z);
        tracing::debug!(x, y, z, inside, "evaluated predicate");
        Ok(inside)
    }

    /// Run the harness and return the process exit code.
    pub fn run<S, W, E>(&self, args: &[S], out: &mut W, err: &mut E) -> std::io::Result<i32>
    where
        S: AsRef<str>,
        W: Write,
        E: Write,
    {
        match self.evaluate(args) {
            Ok(inside) => {
                writeln!(out, "{}", if inside { 1 } else { 0 })?;
                out.flush()?;
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                writeln!(err, "{}", e)?;
                Ok(EXIT_USAGE)
            }
        }
    }
}

/// Turn raw process arguments into text. Bytes that are not valid UTF-8
/// become U+FFFD, which then parses as `0.0` like any other non-number.
pub fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Parse a coordinate the way C's `atof` does.
///
/// Leading whitespace as C `isspace` defines it is skipped, and the longest
/// numeric prefix is used (`"1.5abc"` is `1.5`, `"inf"` is infinity).
/// Anything without a numeric prefix is `0.0`.
pub fn parse_coordinate(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let len = numeric_prefix_len(trimmed);
    trimmed[..len].parse().unwrap_or(0.0)
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let rest = &bytes[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return i + word.len();
        }
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_from(i + 1);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_from(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}
