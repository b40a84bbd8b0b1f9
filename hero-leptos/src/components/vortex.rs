//! Vortex background - particle canvas behind arbitrary content
//!
//! The particle simulation runs in the browser. This component only emits the
//! canvas and hands it its settings through `data-*` attributes:
//!
//! | attribute | source |
//! |---|---|
//! | `data-background-color` | `VortexConfig::background_color` |
//! | `data-range-y` | `VortexConfig::range_y` |
//! | `data-particle-count` | `VortexConfig::particle_count` |
//! | `data-base-hue` | `VortexConfig::base_hue` |

use leptos::prelude::*;

use crate::config::VortexConfig;

/// Animated particle background wrapping its children
#[component]
pub fn Vortex(
    /// Particle and layout settings
    config: VortexConfig,
    children: Children,
) -> impl IntoView {
    let container_class = join_classes("vortex-container", &config.container_class_name);
    let content_class = join_classes("vortex-content relative z-10", &config.class_name);
    let background = format!("background-color: {}", config.background_color);

    view! {
        <div class=container_class data-component="vortex" style=background>
            <canvas
                class="vortex-canvas"
                data-background-color=config.background_color.clone()
                data-range-y=config.range_y.to_string()
                data-particle-count=config.particle_count.to_string()
                data-base-hue=config.base_hue.to_string()
            ></canvas>
            <div class=content_class>{children()}</div>
        </div>
    }
}

/// Prefix a fixed class with caller classes, skipping empty input.
pub(crate) fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}
