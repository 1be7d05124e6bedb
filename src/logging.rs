// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Tracing subscriber setup shared by the binaries

use crate::error::{Result, YuheError};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target prefix of this crate's events
pub const APP_TARGET: &str = "yuhe";

pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| YuheError::InvalidLogLevel(level.to_string()))
}

/// Filter directives for a chosen level.
///
/// At debug and trace only this crate goes below `info`; dependencies stay
/// at `info` so their chatter does not drown the output.
pub fn filter_directives(level: Level) -> String {
    let name = level.as_str().to_lowercase();
    if level >= Level::DEBUG {
        format!("{APP_TARGET}={name},info")
    } else {
        name
    }
}

/// Install the global subscriber on stderr. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));
    install(filter);
    Ok(())
}

/// Install the subscriber at a fixed level, ignoring the environment.
/// Cannot fail; a subscriber that is already in place is kept.
pub fn init_fixed(level: Level) {
    install(EnvFilter::new(filter_directives(level)));
}

fn install(filter: EnvFilter) {
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
