use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use doc_icon_sprites::{IconSpriteConfig, IconSpriteStep, SetupContext, SetupStep, SpriteRefresh};

/// Regenerate the icon sprite used by the reference manuals.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Project root containing the front-end sources.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output root of the generated reference manuals.
    #[arg(long)]
    ref_manuals: PathBuf,

    /// Configuration file. Defaults to `icon_sprites.config.json` in the project root.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only report whether the sprite is stale. Exits with status 1 when it is.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        },
    ))
    .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => IconSpriteConfig::from_path(path)?,
        None => IconSpriteConfig::discover(&cli.root),
    };

    let context = SetupContext::new(&cli.root, &cli.ref_manuals);
    let mut step = IconSpriteStep::new(config.layout());
    step.enter(&context)
        .with_context(|| format!("step '{}' failed to start", step.id()))?;

    if cli.check {
        let stale = step
            .check(&context)
            .with_context(|| format!("step '{}' failed", step.id()))?;
        if stale {
            log::warn!(
                "{} is out of date",
                step.paths(&context).manifest_path.display()
            );
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    }

    step.setup(&context)
        .with_context(|| format!("step '{}' failed", step.id()))?;

    if let Some(SpriteRefresh::Regenerated { skipped, .. }) = step.last_refresh()
        && !skipped.is_empty()
    {
        log::warn!("icons left out of the sprite: {}", skipped.join(", "));
    }

    Ok(ExitCode::SUCCESS)
}
