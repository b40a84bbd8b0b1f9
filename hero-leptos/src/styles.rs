//! CSS and Content-Security-Policy for the standalone hero page.
//!
//! The component markup uses utility class names (`flex-1`, `md:px-20`, ...).
//! [`HERO_CSS`] defines exactly the utilities the hero needs, so the page
//! lays out without an external CSS build step. Pages that already ship a
//! utility framework can skip it and render only the fragment.

use url::Url;

use crate::HeroAssets;

/// Complete CSS for the hero page.
pub const HERO_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    padding: 0;
    background: #000000;
    color: #fafafa;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    overflow: hidden;
}

.vortex-container {
    position: relative;
    overflow: hidden;
}

.vortex-canvas {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    z-index: 0;
}

.spline-scene {
    position: relative;
}

.spline-viewer {
    display: block;
    width: 100%;
    height: 100%;
}

.spline-loader {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 32px;
    height: 32px;
    margin: -16px 0 0 -16px;
    border: 3px solid rgba(250, 250, 250, 0.2);
    border-top-color: #fafafa;
    border-radius: 50%;
    animation: spline-spin 0.8s linear infinite;
}

.spline-scene:has(canvas) .spline-loader {
    display: none;
}

@keyframes spline-spin {
    to { transform: rotate(360deg); }
}

/* Layout utilities */
.w-screen { width: 100vw; }
.h-screen { height: 100vh; }
.w-full { width: 100%; }
.h-full { height: 100%; }
.flex { display: flex; }
.flex-1 { flex: 1 1 0%; }
.flex-col { flex-direction: column; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.relative { position: relative; }
.z-10 { z-index: 10; }
.z-20 { z-index: 20; }
.max-w-xl { max-width: 36rem; }
.max-w-lg { max-width: 32rem; }
.px-12 { padding-left: 3rem; padding-right: 3rem; }
.mt-6 { margin-top: 1.5rem; }

/* Typography utilities */
.text-5xl { font-size: 3rem; line-height: 1; }
.text-lg { font-size: 1.125rem; line-height: 1.75rem; }
.font-bold { font-weight: 700; }
.text-neutral-300 { color: #d4d4d4; }
.text-transparent { color: transparent; }
.bg-clip-text { -webkit-background-clip: text; background-clip: text; }
.bg-gradient-to-b.from-neutral-50.to-neutral-400 {
    background-image: linear-gradient(to bottom, #fafafa, #a3a3a3);
}

@media (min-width: 768px) {
    .md\:px-20 { padding-left: 5rem; padding-right: 5rem; }
    .md\:text-7xl { font-size: 4.5rem; line-height: 1; }
    .md\:text-xl { font-size: 1.25rem; line-height: 1.75rem; }
}
"#;

/// Base Content-Security-Policy: inline styles, images and workers. The
/// `script-src` and `connect-src` directives depend on the page and are
/// appended by [`content_security_policy`].
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; worker-src 'self' blob:; font-src 'self' data:;";

/// Script hosts allowed on every page (the published viewer module).
const SCRIPT_ORIGINS: &[&str] = &["https://unpkg.com"];

/// Hosts the viewer runtime fetches from regardless of the scene location.
const VIEWER_ORIGINS: &[&str] = &["https://unpkg.com", "https://prod.spline.design"];

/// [`CSP`] plus `script-src` admitting every absolute asset location and
/// `connect-src` admitting the scene's origin.
///
/// Relative asset paths are already covered by `'self'`.
pub fn content_security_policy(scene_url: &str, assets: &HeroAssets) -> String {
    let script_origins = [
        assets.spline_viewer_path.as_str(),
        assets.vortex_script_path.as_str(),
    ]
    .into_iter()
    .filter_map(absolute_origin);
    let script_src = source_list(SCRIPT_ORIGINS, script_origins);
    let connect_src = source_list(VIEWER_ORIGINS, absolute_origin(scene_url));

    format!(
        "{} script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' {}; connect-src 'self' {};",
        CSP, script_src, connect_src
    )
}

/// Origin of an absolute URL; `None` for relative paths and opaque origins.
fn absolute_origin(location: &str) -> Option<String> {
    Url::parse(location)
        .ok()
        .map(|url| url.origin().ascii_serialization())
        .filter(|origin| origin != "null")
}

/// Fixed origins followed by extra ones, each listed once.
fn source_list(fixed: &[&str], extra: impl IntoIterator<Item = String>) -> String {
    let mut sources: Vec<String> = fixed.iter().map(|origin| origin.to_string()).collect();
    for origin in extra {
        if !sources.contains(&origin) {
            sources.push(origin);
        }
    }
    sources.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_host_not_duplicated() {
        let csp = content_security_policy(crate::config::DEFAULT_SCENE_URL, &HeroAssets::cdn());
        assert_eq!(csp.matches("https://prod.spline.design").count(), 1);
        assert!(csp.contains("script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https://unpkg.com;"));
        assert!(csp.ends_with("connect-src 'self' https://unpkg.com https://prod.spline.design;"));
    }

    #[test]
    fn foreign_scene_host_is_added() {
        let csp = content_security_policy(
            "https://cdn.example.com:8443/s.splinecode",
            &HeroAssets::default(),
        );
        assert!(csp.contains("https://cdn.example.com:8443;"));
    }

    #[test]
    fn scene_host_prefix_of_viewer_host_is_kept() {
        let csp = content_security_policy("https://unpkg.co/scene.splinecode", &HeroAssets::default());
        assert!(csp.ends_with("connect-src 'self' https://unpkg.com https://prod.spline.design https://unpkg.co;"));

        let csp = content_security_policy("https://prod.spline/scene.splinecode", &HeroAssets::default());
        assert!(csp.contains(" https://prod.spline;"));
    }

    #[test]
    fn absolute_asset_hosts_are_allowed_scripts() {
        let assets = HeroAssets {
            vortex_script_path: "https://cdn.jsdelivr.net/npm/vortex.js".into(),
            ..HeroAssets::cdn()
        };
        let csp = content_security_policy(crate::config::DEFAULT_SCENE_URL, &assets);
        assert!(csp.contains("script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https://unpkg.com https://cdn.jsdelivr.net;"));
    }

    #[test]
    fn relative_asset_paths_add_nothing() {
        let assets = HeroAssets {
            spline_viewer_path: "/js/spline-viewer.js".into(),
            vortex_script_path: "js/vortex.js".into(),
        };
        let csp = content_security_policy(crate::config::DEFAULT_SCENE_URL, &assets);
        assert!(csp.contains("'wasm-unsafe-eval' https://unpkg.com;"));
        assert!(!csp.contains("js/"));
    }

    #[test]
    fn unparsable_url_keeps_base_policy() {
        let csp = content_security_policy("not a url", &HeroAssets::default());
        assert!(csp.starts_with(CSP));
        assert!(!csp.contains("not a url"));
    }

    #[test]
    fn css_covers_responsive_utilities() {
        assert!(HERO_CSS.contains(r".md\:px-20"));
        assert!(HERO_CSS.contains(".w-screen"));
    }
}
