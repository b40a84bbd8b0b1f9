//! Leptos UI components for the hero section.
//!
//! # Component Hierarchy
//!
//! ```text
//! HeroDocument
//! └── HeroDisplay
//!     └── HeroLayout
//!         └── BackgroundEffect (Vortex)
//!             ├── text region: heading + subheading
//!             └── visual region
//!                 └── SceneViewport (SplineScene)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_hero`] or
//! [`crate::render_hero_page`], but can be mounted directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use hero_leptos::components::HeroDisplay;
//!
//! view! { <HeroDisplay /> }
//! ```

mod document;
mod hero;
mod spline;
mod vortex;

pub use document::HeroDocument;
pub use hero::{HeroDisplay, HeroLayout};
pub use spline::SplineScene;
pub use vortex::Vortex;
