//! Hero section - headline on the left, 3D scene on the right, particles behind both

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::HeroConfig;
use crate::effects::{BackgroundEffect, SceneViewport, SplineViewport, VortexBackground};

const TEXT_REGION_CLASS: &str = "hero-text flex-1 z-20 flex flex-col justify-center max-w-xl";
const HEADING_CLASS: &str = "hero-heading text-5xl md:text-7xl font-bold bg-clip-text text-transparent bg-gradient-to-b from-neutral-50 to-neutral-400";
const SUBHEADING_CLASS: &str = "hero-subheading mt-6 text-neutral-300 text-lg md:text-xl max-w-lg";
const VISUAL_REGION_CLASS: &str = "hero-visual flex-1 relative z-20 h-full flex items-center justify-center";

/// The hero as shipped on the landing page.
///
/// Takes no input; `config` only exists for overrides and defaults to
/// [`HeroConfig::default`].
#[component]
pub fn HeroDisplay(
    /// Overrides for text, scene and particles
    #[prop(optional)]
    config: HeroConfig,
) -> impl IntoView {
    let background: Arc<dyn BackgroundEffect> = Arc::new(VortexBackground::new(config.vortex));
    let scene: Arc<dyn SceneViewport> = Arc::new(SplineViewport::new(config.scene));

    view! {
        <HeroLayout
            background=background
            scene=scene
            heading=config.heading
            subheading=config.subheading
        />
    }
}

/// Two-region hero layout over any background and scene renderer.
#[component]
pub fn HeroLayout(
    /// Effect drawn behind both regions
    background: Arc<dyn BackgroundEffect>,
    /// Scene placed in the visual region
    scene: Arc<dyn SceneViewport>,
    /// Headline text
    #[prop(into)]
    heading: String,
    /// Text under the headline
    #[prop(into)]
    subheading: String,
) -> impl IntoView {
    let content = view! {
        <div class=TEXT_REGION_CLASS data-region="text">
            <h1 class=HEADING_CLASS>{heading}</h1>
            <p class=SUBHEADING_CLASS>{subheading}</p>
        </div>
        <div class=VISUAL_REGION_CLASS data-region="visual">
            <div class="w-full h-full">{scene.viewport()}</div>
        </div>
    }
    .into_any();

    background.wrap(content)
}
