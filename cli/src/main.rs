// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{debug, warn};
use ultrawide::PatchConfig;

/// Patch The Witcher 3 for ultrawide cutscenes with no black bars
#[derive(Parser)]
#[command(
    name = "witcher3-ultrawide-fix",
    after_help = "Use quotes \" around the path, e.g.:\n  \
                  witcher3-ultrawide-fix \"C:\\Games\\GOG\\The Witcher 3 Wild Hunt\" 3440x1440"
)]
struct Args {
    /// The game installation directory
    game_dir: PathBuf,
    /// The monitor resolution to patch for, e.g., 3440x1440
    resolution: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            debug!("Showing usage after parse result: {:?}", e.kind());
            eprint!("{}", Args::command().render_help());
            return ExitCode::SUCCESS;
        }
    };

    let config = PatchConfig::new();
    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &PatchConfig) -> anyhow::Result<()> {
    if !args.game_dir.is_dir() {
        bail!("{} does not exist", args.game_dir.display());
    }

    let resolutions = config.get_resolutions();
    let Some(resolution) = resolutions.get(&args.resolution) else {
        let labels: Vec<_> = resolutions.labels().collect();
        bail!(
            "{} is not a valid option, choose one:\n{}",
            args.resolution,
            labels.join("\n"),
        );
    };

    let mut target = ultrawide::locate(&args.game_dir, config).with_context(|| {
        format!(
            "could not locate {} under {}",
            config.get_target_file(),
            args.game_dir.display(),
        )
    })?;

    let backup_path = config.backup_path(&args.game_dir);
    ultrawide::backup(&mut target, &backup_path)
        .with_context(|| format!("could not create a backup at {}", backup_path.display()))?;
    println!("created a backup at {}", backup_path.display());

    let outcome = ultrawide::patch(&mut target, &resolution.bytes(), config)
        .with_context(|| format!("could not patch {}", config.get_target_file()))?;
    if outcome.is_version_mismatch() {
        warn!(
            "Found {} occurrences instead of {}, this may be an unsupported game version",
            outcome.replaced(),
            outcome.expected(),
        );
    }
    println!("{outcome}");

    Ok(())
}
