// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Ultrawide cutscene patching for The Witcher 3.
//!
//! The game renders cutscenes at a hardcoded 16:9 aspect ratio, stored in its executable as a
//! little-endian `f32`. This crate finds the executable in an installation directory, backs it up
//! and overwrites every occurrence of that constant with the aspect ratio of an ultrawide
//! resolution.
//!
//! The three steps share a single [`PatchConfig`] and are meant to run strictly in order: never
//! patch a file that hasn't been backed up successfully.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use ultrawide::PatchConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PatchConfig::new();
//! let root = Path::new("/games/witcher3");
//! let resolution = config.get_resolutions().get("3440x1440").unwrap();
//!
//! let mut target = ultrawide::locate(root, &config)?;
//! ultrawide::backup(&mut target, &config.backup_path(root))?;
//! let outcome = ultrawide::patch(&mut target, &resolution.bytes(), &config)?;
//!
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

mod backup;
mod config;
mod locate;
mod patch;
mod resolution;

pub use backup::backup;
pub use config::PatchConfig;
pub use locate::{LocateError, find, locate};
pub use patch::{PatchOutcome, patch, replace_all};
pub use resolution::{
    Resolution, ResolutionTable, WITCHER3_RESOLUTIONS, aspect_ratio, aspect_ratio_bytes,
};
