//! Capability seams for the two widgets the hero composes.
//!
//! [`HeroLayout`](crate::components::HeroLayout) only talks to these traits,
//! so another background or scene renderer can be dropped in without touching
//! the layout:
//!
//! ```rust
//! use std::sync::Arc;
//! use hero_leptos::effects::{BackgroundEffect, SceneViewport, VortexBackground, SplineViewport};
//! use hero_leptos::config::HeroConfig;
//!
//! let config = HeroConfig::default();
//! let background: Arc<dyn BackgroundEffect> = Arc::new(VortexBackground::new(config.vortex));
//! let scene: Arc<dyn SceneViewport> = Arc::new(SplineViewport::new(config.scene));
//! assert_eq!(background.name(), "vortex");
//! assert_eq!(scene.name(), "spline");
//! ```

use leptos::prelude::*;

use crate::components::{SplineScene, Vortex};
use crate::config::{SceneConfig, VortexConfig};

/// Animated background drawn behind the hero content.
pub trait BackgroundEffect: Send + Sync {
    /// Short identifier, used in logs
    fn name(&self) -> &'static str;

    /// Render the background with `content` placed inside it.
    fn wrap(&self, content: AnyView) -> AnyView;
}

/// Embedded 3D scene shown in the visual region.
pub trait SceneViewport: Send + Sync {
    /// Short identifier, used in logs
    fn name(&self) -> &'static str;

    /// Render the scene element.
    fn viewport(&self) -> AnyView;
}

/// [`BackgroundEffect`] backed by the [`Vortex`] particle canvas.
#[derive(Clone, Debug, Default)]
pub struct VortexBackground {
    config: VortexConfig,
}

impl VortexBackground {
    /// Wrap the given settings.
    pub fn new(config: VortexConfig) -> Self {
        Self { config }
    }

    /// Settings forwarded to the canvas.
    pub fn config(&self) -> &VortexConfig {
        &self.config
    }
}

impl BackgroundEffect for VortexBackground {
    fn name(&self) -> &'static str {
        "vortex"
    }

    fn wrap(&self, content: AnyView) -> AnyView {
        let config = self.config.clone();
        view! { <Vortex config=config>{content}</Vortex> }.into_any()
    }
}

/// [`SceneViewport`] backed by the [`SplineScene`] viewer element.
#[derive(Clone, Debug, Default)]
pub struct SplineViewport {
    config: SceneConfig,
}

impl SplineViewport {
    /// Wrap the given settings.
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Scene location and classes.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl SceneViewport for SplineViewport {
    fn name(&self) -> &'static str {
        "spline"
    }

    fn viewport(&self) -> AnyView {
        let config = self.config.clone();
        view! { <SplineScene config=config /> }.into_any()
    }
}
