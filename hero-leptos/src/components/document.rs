//! Root document component - standalone HTML page around the hero

use leptos::prelude::*;

use super::HeroDisplay;
use crate::HeroAssets;
use crate::config::HeroConfig;
use crate::styles::{HERO_CSS, content_security_policy};

/// The complete HTML document for the hero page
#[component]
pub fn HeroDocument(
    config: HeroConfig,
    /// Browser runtimes for the scene viewer and the particle canvas
    #[prop(optional)]
    assets: HeroAssets,
) -> impl IntoView {
    let title = config.heading.clone();
    let csp = content_security_policy(&config.scene.url, &assets);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>{title}</title>
                <style>{HERO_CSS}</style>
                <RuntimeScripts assets=assets />
            </head>
            <body>
                <HeroDisplay config=config />
            </body>
        </html>
    }
}

/// Script tags for the external runtimes, skipped when no path is set
#[component]
fn RuntimeScripts(assets: HeroAssets) -> impl IntoView {
    let viewer = (!assets.spline_viewer_path.is_empty()).then_some(assets.spline_viewer_path);
    let vortex = (!assets.vortex_script_path.is_empty()).then_some(assets.vortex_script_path);

    view! {
        {viewer.map(|src| view! { <script type="module" src=src></script> })}
        {vortex.map(|src| view! { <script defer=true src=src></script> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn omits_scripts_without_assets() {
        let html = view! { <HeroDocument config=HeroConfig::default() /> }.to_html();

        assert!(!html.contains("<script"));
        assert!(html.contains("<title>I'm Sujan</title>"));
    }

    #[test]
    fn includes_configured_scripts() {
        let assets = HeroAssets {
            spline_viewer_path: "/js/spline-viewer.js".into(),
            vortex_script_path: "/js/vortex.js".into(),
        };
        let html = view! { <HeroDocument config=HeroConfig::default() assets=assets /> }.to_html();

        assert!(html.contains(r#"<script type="module" src="/js/spline-viewer.js">"#));
        assert!(html.contains(r#"src="/js/vortex.js""#));
    }

    #[test]
    fn csp_allows_scene_origin() {
        let config = HeroConfig::default().with_scene_url("https://cdn.example.com/s.splinecode");
        let html = view! { <HeroDocument config=config /> }.to_html();

        assert!(html.contains("https://cdn.example.com"));
    }

    #[test]
    fn csp_allows_off_cdn_scripts() {
        let assets = HeroAssets {
            vortex_script_path: "https://cdn.jsdelivr.net/npm/vortex.js".into(),
            ..HeroAssets::cdn()
        };
        let html = view! { <HeroDocument config=HeroConfig::default() assets=assets /> }.to_html();

        assert!(html.contains(r#"src="https://cdn.jsdelivr.net/npm/vortex.js""#));
        assert!(html.contains("'wasm-unsafe-eval' https://unpkg.com https://cdn.jsdelivr.net;"));
    }
}
