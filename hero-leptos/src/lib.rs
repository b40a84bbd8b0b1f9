//! # hero-leptos
//!
//! Leptos SSR renderer for a landing-page hero section.
//!
//! The hero fills the viewport with an animated particle background
//! ("vortex") and splits it into two regions: a headline block and an
//! embedded [Spline](https://spline.design/) 3D scene. The particle
//! simulation and the scene viewer are browser runtimes; this crate renders
//! the markup and configuration they pick up.
//!
//! ## Quick Start
//!
//! ```rust
//! use hero_leptos::{render_hero_page, HeroAssets, config::HeroConfig};
//!
//! let html = render_hero_page(&HeroConfig::default(), &HeroAssets::cdn());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("kizoku oni naru"));
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Static configuration record with validation
//! - [`effects`] - Background and scene capability traits
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and CSP constants
//! - [`error`] - Configuration errors
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait. No reactive runtime or
//! hydration is involved.
//!
//! ---
//!
//! Built by Sujan (c)2026

#![doc(html_root_url = "https://docs.rs/hero-leptos/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod effects;
pub mod error;
pub mod styles;

use std::sync::Arc;

use components::{HeroDisplay, HeroDocument, HeroLayout};
use config::HeroConfig;
use effects::{BackgroundEffect, SceneViewport};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Published ES module of the `<spline-viewer>` custom element.
pub const SPLINE_VIEWER_CDN: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

/// Render only the hero section, for embedding into an existing page.
///
/// # Example
///
/// ```rust
/// use hero_leptos::{render_hero, config::HeroConfig};
///
/// let html = render_hero(&HeroConfig::default());
/// assert!(html.contains("https://prod.spline.design/kZDDjO5HuC9GJUM2/scene.splinecode"));
/// ```
pub fn render_hero(config: &HeroConfig) -> String {
    view! { <HeroDisplay config=config.clone() /> }.to_html()
}

/// Render the hero section over caller-provided background and scene renderers.
///
/// [`render_hero`] is this function with [`VortexBackground`](effects::VortexBackground)
/// and [`SplineViewport`](effects::SplineViewport) built from the config.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use hero_leptos::{render_hero, render_hero_with, config::HeroConfig};
/// use hero_leptos::effects::{SplineViewport, VortexBackground};
///
/// let config = HeroConfig::default();
/// let html = render_hero_with(
///     Arc::new(VortexBackground::new(config.vortex.clone())),
///     Arc::new(SplineViewport::new(config.scene.clone())),
///     &config.heading,
///     &config.subheading,
/// );
/// assert_eq!(html, render_hero(&config));
/// ```
pub fn render_hero_with(
    background: Arc<dyn BackgroundEffect>,
    scene: Arc<dyn SceneViewport>,
    heading: &str,
    subheading: &str,
) -> String {
    view! {
        <HeroLayout
            background=background
            scene=scene
            heading=heading.to_string()
            subheading=subheading.to_string()
        />
    }
    .to_html()
}

/// Render a standalone HTML page containing the hero.
///
/// # Arguments
///
/// * `config` - Text, scene and particle settings
/// * `assets` - Script locations for the browser runtimes
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_hero_page(config: &HeroConfig, assets: &HeroAssets) -> String {
    let doc = view! {
        <HeroDocument config=config.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Script locations for the browser runtimes.
///
/// Each path may be a CDN URL or a locally served file. An empty path omits
/// the script tag; the markup is still rendered and a host page can provide
/// the runtime itself.
///
/// # Example
///
/// ```rust
/// use hero_leptos::HeroAssets;
///
/// // Viewer from unpkg, particle runtime served locally
/// let assets = HeroAssets {
///     vortex_script_path: "/js/vortex.js".into(),
///     ..HeroAssets::cdn()
/// };
///
/// // Markup only
/// let assets = HeroAssets::default();
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct HeroAssets {
    /// ES module defining the `<spline-viewer>` element
    pub spline_viewer_path: String,
    /// Script animating `.vortex-canvas` from its `data-*` attributes
    pub vortex_script_path: String,
}

impl HeroAssets {
    /// Viewer loaded from [`SPLINE_VIEWER_CDN`], no particle runtime.
    pub fn cdn() -> Self {
        Self {
            spline_viewer_path: SPLINE_VIEWER_CDN.into(),
            ..Default::default()
        }
    }
}
