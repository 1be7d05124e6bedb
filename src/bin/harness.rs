// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Point-in-box harness: `point-in-box x y z` prints 1 or 0
//!
//! The predicate is the built-in box `[0, 10]^3`. No environment variables
//! or files are read.

use yuhe::harness::{collect_args, EXIT_USAGE};
use yuhe::{logging, Harness, OrientedBox};

fn main() {
    logging::init_fixed(tracing::Level::WARN);

    let args = collect_args(std::env::args_os());
    let harness = Harness::new(OrientedBox::default());

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = match harness.run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}
