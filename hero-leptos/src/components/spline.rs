//! Spline scene viewport
//!
//! Emits the `<spline-viewer>` custom element. Fetching and drawing the scene is
//! the viewer runtime's job (see [`HeroAssets`](crate::HeroAssets)); until it
//! upgrades the element the loader stays visible.

use leptos::prelude::*;

use super::vortex::join_classes;
use crate::config::SceneConfig;

/// Embedded remote 3D scene
#[component]
pub fn SplineScene(
    /// Scene location and wrapper classes
    config: SceneConfig,
) -> impl IntoView {
    let wrapper_class = join_classes("spline-scene", &config.class_name);

    view! {
        <div class=wrapper_class data-component="spline-scene">
            <span class="spline-loader" aria-hidden="true"></span>
            <spline-viewer
                class="spline-viewer"
                url=config.url
                loading-anim-type="spinner-small-dark"
            ></spline-viewer>
        </div>
    }
}
