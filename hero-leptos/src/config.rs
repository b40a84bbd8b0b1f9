//! Hero section configuration.
//!
//! Every value the hero forwards to its widgets lives here. The defaults are
//! the literal values of the shipped landing page, so `HeroConfig::default()`
//! renders the production hero unchanged.
//!
//! Partial JSON documents are accepted; missing fields keep their defaults:
//!
//! ```rust
//! use hero_leptos::config::HeroConfig;
//!
//! let config = HeroConfig::from_json_str(r#"{ "vortex": { "particle_count": 800 } }"#).unwrap();
//! assert_eq!(config.vortex.particle_count, 800);
//! assert_eq!(config.vortex.base_hue, 220);
//! assert_eq!(config.heading, "I'm Sujan");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{HeroError, Result};

/// Default headline text
pub const DEFAULT_HEADING: &str = "I'm Sujan";
/// Default text below the headline
pub const DEFAULT_SUBHEADING: &str = "kizoku oni naru";
/// Default remote scene rendered by the viewport
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/kZDDjO5HuC9GJUM2/scene.splinecode";

/// Upper bound for `base_hue` (degrees on the color wheel)
pub const MAX_HUE: u16 = 360;

/// Complete configuration for one hero render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Headline text
    pub heading: String,
    /// Text rendered under the headline
    pub subheading: String,
    /// Animated background settings
    pub vortex: VortexConfig,
    /// Embedded 3D scene settings
    pub scene: SceneConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.into(),
            subheading: DEFAULT_SUBHEADING.into(),
            vortex: VortexConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

/// Settings forwarded to the vortex particle background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VortexConfig {
    /// CSS color painted behind the particles
    pub background_color: String,
    /// Vertical spread of particle spawn positions, in pixels
    pub range_y: u32,
    /// Number of particles
    pub particle_count: u32,
    /// Base hue of particle colors, 0-360
    pub base_hue: u16,
    /// Classes for the outer container
    pub container_class_name: String,
    /// Classes for the content wrapper holding the children
    pub class_name: String,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            background_color: "black".into(),
            range_y: 300,
            particle_count: 500,
            base_hue: 220,
            container_class_name: "w-screen h-screen".into(),
            class_name: "w-full h-full flex items-center justify-between px-12 md:px-20".into(),
        }
    }
}

/// Settings forwarded to the Spline scene viewport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Location of the `.splinecode` scene
    pub url: String,
    /// Classes for the viewport wrapper
    pub class_name: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SCENE_URL.into(),
            class_name: "w-full h-full".into(),
        }
    }
}

impl HeroConfig {
    /// Parse a (possibly partial) JSON override document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: HeroConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            scene = %config.scene.url,
            particles = config.vortex.particle_count,
            "loaded hero config"
        );
        Ok(config)
    }

    /// Read a JSON override file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| HeroError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("reading hero config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Check every field constraint. The first violation is reported.
    pub fn validate(&self) -> Result<()> {
        self.vortex.validate()?;
        self.scene.validate()
    }

    /// Replace the headline text.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Replace the text under the headline.
    pub fn with_subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = subheading.into();
        self
    }

    /// Point the viewport at another scene.
    pub fn with_scene_url(mut self, url: impl Into<String>) -> Self {
        self.scene.url = url.into();
        self
    }

    /// Change the number of background particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.vortex.particle_count = count;
        self
    }

    /// Change the base hue of background particles.
    pub fn with_base_hue(mut self, hue: u16) -> Self {
        self.vortex.base_hue = hue;
        self
    }
}

impl VortexConfig {
    /// Check background constraints in field order.
    pub fn validate(&self) -> Result<()> {
        if self.background_color.trim().is_empty() {
            return Err(HeroError::EmptyBackgroundColor);
        }
        if self.range_y == 0 {
            return Err(HeroError::NonPositiveRangeY);
        }
        if self.particle_count == 0 {
            return Err(HeroError::ZeroParticleCount);
        }
        if self.base_hue > MAX_HUE {
            return Err(HeroError::HueOutOfRange(self.base_hue));
        }
        Ok(())
    }
}

impl SceneConfig {
    /// The scene must be an absolute http(s) URL; the viewer fetches it as is.
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.url).map_err(|source| HeroError::InvalidSceneUrl {
            url: self.url.clone(),
            source,
        })?;
        match parsed.scheme() {
            "https" => Ok(()),
            "http" => {
                warn!(scene = %self.url, "scene is served without TLS; browsers may block it on https pages");
                Ok(())
            }
            scheme => Err(HeroError::UnsupportedSceneScheme {
                url: self.url.clone(),
                scheme: scheme.to_string(),
            }),
        }
    }
}
