//! Rendering properties of the hero section.

use hero_leptos::config::{DEFAULT_SCENE_URL, HeroConfig};
use hero_leptos::{HeroAssets, render_hero, render_hero_page};
use pretty_assertions::{assert_eq, assert_ne};

/// Drop one `name="value"` attribute so two renders can be compared around it.
fn without_attr(html: &str, name: &str) -> String {
    let needle = format!(" {}=\"", name);
    let Some(start) = html.find(&needle) else {
        return html.to_string();
    };
    let value_start = start + needle.len();
    let end = value_start + html[value_start..].find('"').unwrap() + 1;
    format!("{}{}", &html[..start], &html[end..])
}

fn configs() -> Vec<HeroConfig> {
    vec![
        HeroConfig::default(),
        HeroConfig::default().with_particle_count(1).with_base_hue(0),
        HeroConfig::default().with_particle_count(5000).with_base_hue(360),
        HeroConfig::default()
            .with_heading("Another name")
            .with_scene_url("https://example.com/other.splinecode"),
    ]
}

#[test]
fn structure_holds_for_valid_configs() {
    for config in configs() {
        config.validate().unwrap();
        let html = render_hero(&config);

        assert_eq!(html.matches(r#"data-component="vortex""#).count(), 1);
        assert_eq!(html.matches(r#"data-region="text""#).count(), 1);
        assert_eq!(html.matches(r#"data-region="visual""#).count(), 1);
        assert_eq!(html.matches("<spline-viewer").count(), 1);
    }
}

#[test]
fn literal_text_is_rendered() {
    let html = render_hero(&HeroConfig::default());

    let heading = &html[html.find("<h1").unwrap()..html.find("</h1>").unwrap()];
    assert!(heading.contains("I'm Sujan"));

    let sub = &html[html.find("<p").unwrap()..html.find("</p>").unwrap()];
    assert!(sub.contains("kizoku oni naru"));
}

#[test]
fn scene_url_passes_through_unchanged() {
    let html = render_hero(&HeroConfig::default());

    assert_eq!(
        DEFAULT_SCENE_URL,
        "https://prod.spline.design/kZDDjO5HuC9GJUM2/scene.splinecode"
    );
    assert!(html.contains(&format!(r#"url="{}""#, DEFAULT_SCENE_URL)));
}

#[test]
fn rendering_is_idempotent() {
    let config = HeroConfig::default();
    assert_eq!(render_hero(&config), render_hero(&config));

    let assets = HeroAssets::cdn();
    assert_eq!(
        render_hero_page(&config, &assets),
        render_hero_page(&config, &assets)
    );
}

#[test]
fn particle_settings_only_touch_the_canvas() {
    let base = render_hero(&HeroConfig::default());
    let changed = render_hero(&HeroConfig::default().with_particle_count(900).with_base_hue(30));

    assert_ne!(base, changed);
    assert!(changed.contains(r#"data-particle-count="900""#));
    assert!(changed.contains(r#"data-base-hue="30""#));

    let strip = |html: &str| without_attr(&without_attr(html, "data-particle-count"), "data-base-hue");
    assert_eq!(strip(&base), strip(&changed));
}

#[test]
fn page_wraps_fragment() {
    let config = HeroConfig::default();
    let page = render_hero_page(&config, &HeroAssets::default());
    let fragment = render_hero(&config);

    assert!(page.starts_with("<!DOCTYPE html>\n<html"));
    assert!(page.contains(&fragment));
}

#[test]
fn json_overrides_reach_the_markup() {
    let config = HeroConfig::from_json_str(
        r#"{
            "subheading": "configured",
            "scene": { "url": "https://example.com/x.splinecode" },
            "vortex": { "background_color": "navy", "range_y": 120 }
        }"#,
    )
    .unwrap();
    let html = render_hero(&config);

    assert!(html.contains("configured"));
    assert!(html.contains(r#"url="https://example.com/x.splinecode""#));
    assert!(html.contains(r#"data-background-color="navy""#));
    assert!(html.contains(r#"data-range-y="120""#));
    assert!(html.contains("Sujan"));
}
