//! Standalone HTML preview of the configured title.
//!
//! The page needs no build step and no Tailwind: the background is always
//! the literal gradient and the keyframe animation is inlined.
//! Open the file in a browser to see the title animate.
//!
//! Uses [maud](https://maud.lambda.xyz/) so the title text is escaped.

use crate::export::FALLBACK_TITLE;
use crate::resolve::ResolvedGradient;
use crate::state::{Direction, TitleConfig};
use maud::{DOCTYPE, Markup, html};

/// The one keyframe animation the configured direction needs.
fn keyframes_css(direction: Direction) -> String {
    let (edge, middle) = direction.keyframe_positions();
    format!(
        "@keyframes {name} {{\n    0%, 100% {{ background-position: {edge}; }}\n    50% {{ background-position: {middle}; }}\n}}",
        name = direction.keyframes(),
    )
}

const PAGE_CSS: &str = r#"html, body { margin: 0; height: 100%; background: #030712; }
body { display: flex; align-items: center; justify-content: center; overflow: hidden; font-family: system-ui, sans-serif; }
.stage { position: relative; text-align: center; }
.glow { position: fixed; top: 50%; left: 50%; width: 800px; height: 800px; transform: translate(-50%, -50%); filter: blur(120px); border-radius: 50%; opacity: 0.2; pointer-events: none; }
.title-wrap { position: relative; display: inline-block; }
.flow-title { margin: 0; line-height: 1.1; background-clip: text; -webkit-background-clip: text; color: transparent; user-select: none; white-space: pre-wrap; }
.flow-reflection { position: absolute; top: 100%; left: 0; right: 0; transform-origin: top; pointer-events: none; }"#;

/// Inline style shared by the title and its reflection.
fn title_style(config: &TitleConfig, resolved: &ResolvedGradient) -> String {
    format!(
        "--speed: {speed}s; --ease: {ease}; background-image: {background}; background-size: {bg}% {bg}%; \
         font-size: {size}px; font-weight: {weight}; animation: {keyframes} {speed}s {ease} infinite;",
        speed = config.speed,
        ease = config.easing,
        background = resolved.literal_css,
        bg = config.bg_size,
        size = config.font_size,
        weight = config.font_weight.css_value(),
        keyframes = config.direction.keyframes(),
    )
}

fn reflection_style(config: &TitleConfig, resolved: &ResolvedGradient) -> String {
    let mask = "linear-gradient(to top, rgba(0,0,0,1) 0%, rgba(0,0,0,0) 80%)";
    format!(
        "{base} opacity: {opacity}; filter: blur({blur}px); transform: scaleY(-0.8) translateY(70%); \
         -webkit-mask-image: {mask}; mask-image: {mask};",
        base = title_style(config, resolved),
        opacity = config.reflection_opacity,
        blur = config.reflection_blur,
    )
}

/// Render the full preview document.
pub fn render_page(config: &TitleConfig, resolved: &ResolvedGradient) -> Markup {
    let text = if config.title.is_empty() {
        FALLBACK_TITLE
    } else {
        config.title.as_str()
    };
    let glow = resolved
        .glow_background()
        .map(|bg| format!("background: {bg};"));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (text) " · " (resolved.gradient.name) }
                style { (keyframes_css(config.direction)) "\n" (PAGE_CSS) }
            }
            body {
                div.glow style=[glow] {}
                main.stage {
                    div.title-wrap {
                        h1.flow-title style=(title_style(config, resolved)) { (text) }
                        @if config.show_reflection {
                            h1.flow-title.flow-reflection aria-hidden="true"
                                style=(reflection_style(config, resolved)) { (text) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::resolve::resolve;
    use crate::state::{Direction, TitleUpdate};

    fn page(update: TitleUpdate) -> String {
        let config = TitleConfig::default().apply_update(update);
        let resolved = resolve(&config, Catalog::builtin());
        render_page(&config, &resolved).into_string()
    }

    #[test]
    fn page_is_a_full_document() {
        let html = page(TitleUpdate::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@keyframes gradient-xy"));
        assert!(html.contains("Super Flow Title"));
    }

    #[test]
    fn uses_literal_gradient_and_direction() {
        let html = page(TitleUpdate {
            direction: Some(Direction::Vertical),
            ..Default::default()
        });
        assert!(html.contains("background-image: linear-gradient(135deg, #2563eb, #22d3ee, #2563eb)"));
        assert!(html.contains("animation: gradient-y 8s ease-in-out infinite"));
        assert!(html.contains("@keyframes gradient-y {"));
        assert!(html.contains("50% { background-position: 50% 100%; }"));
    }

    #[test]
    fn empty_title_shows_fallback() {
        let html = page(TitleUpdate {
            title: Some(String::new()),
            ..Default::default()
        });
        assert!(html.contains(FALLBACK_TITLE));
    }

    #[test]
    fn reflection_follows_flag() {
        let on = page(TitleUpdate::default());
        assert!(on.contains("flow-reflection"));
        assert!(on.contains("filter: blur(8px)"));
        let off = page(TitleUpdate {
            show_reflection: Some(false),
            ..Default::default()
        });
        assert!(!off.contains("flow-reflection\""));
        assert!(!off.contains("blur(8px)"));
    }

    #[test]
    fn glow_uses_midpoint_color() {
        let html = page(TitleUpdate::default());
        assert!(html.contains("radial-gradient(circle, #22d3ee55 0%, transparent 70%)"));
    }

    #[test]
    fn title_is_escaped() {
        let html = page(TitleUpdate {
            title: Some("<script>x</script>".to_string()),
            ..Default::default()
        });
        assert!(!html.contains("<script>x"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
