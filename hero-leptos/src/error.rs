//! Errors raised while loading or validating a [`HeroConfig`](crate::config::HeroConfig).
//!
//! Rendering itself never fails; only configuration handling does.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error for the hero section.
#[derive(Debug, Error)]
pub enum HeroError {
    /// `vortex.background_color` is empty or whitespace.
    #[error("vortex background color must not be empty")]
    EmptyBackgroundColor,

    /// `vortex.range_y` is zero.
    #[error("vortex range_y must be a positive integer")]
    NonPositiveRangeY,

    /// `vortex.particle_count` is zero.
    #[error("vortex particle_count must be a positive integer")]
    ZeroParticleCount,

    /// `vortex.base_hue` lies outside `0..=360`.
    #[error("vortex base_hue {0} is outside 0..=360")]
    HueOutOfRange(u16),

    /// `scene.url` does not parse as an absolute URL.
    #[error("scene url {url:?} is not a valid URL")]
    InvalidSceneUrl {
        /// The rejected value
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// `scene.url` parsed, but the scheme cannot be fetched by the viewer.
    #[error("scene url {url:?} uses unsupported scheme {scheme:?} (expected http or https)")]
    UnsupportedSceneScheme {
        /// The rejected value
        url: String,
        /// Scheme found in the URL
        scheme: String,
    },

    /// The override document is not valid JSON for [`HeroConfig`](crate::config::HeroConfig).
    #[error("invalid hero config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The override file could not be read.
    #[error("failed to read hero config {path}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for configuration handling.
pub type Result<T> = std::result::Result<T, HeroError>;
