//! # hero-render
//!
//! Writes the hero section to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Default hero, viewer from unpkg
//! hero-render --cdn --out public/index.html
//!
//! # Overrides from JSON, fragment only
//! hero-render --config hero.json --fragment --out partials/hero.html
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use hero_leptos::config::HeroConfig;
use hero_leptos::effects::{BackgroundEffect, SceneViewport, SplineViewport, VortexBackground};
use hero_leptos::{HeroAssets, render_hero_page, render_hero_with};

#[derive(Parser, Debug)]
#[command(name = "hero-render")]
#[command(about = "Render the landing-page hero section to static HTML")]
#[command(version)]
struct Args {
    /// JSON file with configuration overrides (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file
    #[arg(long, short, default_value = "hero.html")]
    out: PathBuf,

    /// Render only the hero section instead of a full document
    #[arg(long)]
    fragment: bool,

    /// Load the Spline viewer runtime from unpkg
    #[arg(long)]
    cdn: bool,

    /// Particle runtime script (path or URL) for the vortex canvas
    #[arg(long)]
    vortex_script: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => HeroConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let config = HeroConfig::default();
            config.validate().context("validating default config")?;
            config
        }
    };

    let html = if args.fragment {
        let background = VortexBackground::new(config.vortex.clone());
        let scene = SplineViewport::new(config.scene.clone());
        debug!(
            background = background.name(),
            scene = scene.name(),
            particles = background.config().particle_count,
            hue = background.config().base_hue,
            "composing hero fragment"
        );
        render_hero_with(
            Arc::new(background),
            Arc::new(scene),
            &config.heading,
            &config.subheading,
        )
    } else {
        let mut assets = if args.cdn {
            HeroAssets::cdn()
        } else {
            HeroAssets::default()
        };
        if let Some(script) = args.vortex_script {
            assets.vortex_script_path = script;
        }
        debug!(
            particles = config.vortex.particle_count,
            hue = config.vortex.base_hue,
            viewer = %assets.spline_viewer_path,
            "composing hero page"
        );
        render_hero_page(&config, &assets)
    };

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(
        "Hero written to {} ({} bytes, scene {})",
        args.out.display(),
        html.len(),
        config.scene.url
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hero-render: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
