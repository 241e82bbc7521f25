//! Plain HTML + CSS target.

use super::{CodeBlock, REFLECTION_TRANSFORM};
use crate::resolve::ResolvedGradient;
use crate::state::TitleConfig;

pub fn generate(config: &TitleConfig, resolved: &ResolvedGradient) -> Vec<CodeBlock> {
    vec![
        CodeBlock::new("HTML Structure", markup(config)),
        CodeBlock::new("CSS Styles", stylesheet(config, resolved)),
    ]
}

fn markup(config: &TitleConfig) -> String {
    let title = &config.title;
    let reflection = if config.show_reflection {
        format!(r#"<h1 class="flow-title reflection">{title}</h1>"#)
    } else {
        String::new()
    };
    format!(
        r#"<div class="flow-container">
  <h1 class="flow-title">{title}</h1>
  {reflection}
</div>"#
    )
}

fn stylesheet(config: &TitleConfig, resolved: &ResolvedGradient) -> String {
    let (edge, middle) = config.direction.keyframe_positions();
    let mut css = format!(
        r#".flow-title {{
  font-size: {size}px;
  font-weight: {weight};
  background: {background};
  background-size: {bg}% {bg}%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: flow {speed}s {ease} infinite;
}}

@keyframes flow {{
  0%, 100% {{ background-position: {edge}; }}
  50% {{ background-position: {middle}; }}
}}"#,
        size = config.font_size,
        weight = config.font_weight.css_value(),
        background = resolved.literal_css,
        bg = config.bg_size,
        speed = config.speed,
        ease = config.easing,
    );
    if config.show_reflection {
        css.push_str(&format!(
            r#"

.reflection {{
  position: absolute;
  top: 100%;
  opacity: {opacity};
  filter: blur({blur}px);
  transform: {REFLECTION_TRANSFORM};
  -webkit-mask-image: linear-gradient(to top, black, transparent);
}}"#,
            opacity = config.reflection_opacity,
            blur = config.reflection_blur,
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::resolve::resolve;
    use crate::state::{Direction, TitleUpdate};

    fn render(update: TitleUpdate) -> Vec<CodeBlock> {
        let config = TitleConfig::default().apply_update(update);
        let resolved = resolve(&config, Catalog::builtin());
        generate(&config, &resolved)
    }

    #[test]
    fn markup_duplicates_title_for_reflection() {
        let blocks = render(TitleUpdate {
            title: Some("Glow".to_string()),
            ..Default::default()
        });
        assert!(blocks[0].source.contains(r#"<h1 class="flow-title">Glow</h1>"#));
        assert!(blocks[0].source.contains(r#"<h1 class="flow-title reflection">Glow</h1>"#));
    }

    #[test]
    fn reflection_rule_gated_on_flag() {
        let off = render(TitleUpdate {
            show_reflection: Some(false),
            ..Default::default()
        });
        assert!(!off[0].source.contains("reflection"));
        assert!(!off[1].source.contains(".reflection"));

        let on = render(TitleUpdate {
            reflection_blur: Some(20),
            ..Default::default()
        });
        assert!(on[1].source.contains(".reflection {"));
        assert!(on[1].source.contains("filter: blur(20px);"));
        assert!(on[1].source.contains("transform: scaleY(-0.8) translateY(70%);"));
    }

    #[test]
    fn stylesheet_has_keyframes_and_animation() {
        let blocks = render(TitleUpdate {
            speed: Some(3),
            ..Default::default()
        });
        assert!(blocks[1].source.contains("@keyframes flow {"));
        assert!(blocks[1].source.contains("animation: flow 3s ease-in-out infinite;"));
    }

    #[test]
    fn keyframes_follow_direction() {
        let css = |direction| {
            render(TitleUpdate {
                direction: Some(direction),
                ..Default::default()
            })
            .remove(1)
            .source
        };
        let horizontal = css(Direction::Horizontal);
        let vertical = css(Direction::Vertical);
        let diagonal = css(Direction::Diagonal);

        assert!(horizontal.contains("0%, 100% { background-position: 0% 50%; }"));
        assert!(horizontal.contains("50% { background-position: 100% 50%; }"));
        assert!(vertical.contains("0%, 100% { background-position: 50% 0%; }"));
        assert!(vertical.contains("50% { background-position: 50% 100%; }"));
        assert!(diagonal.contains("50% { background-position: 100% 100%; }"));
        assert_ne!(vertical, horizontal);
        assert_ne!(diagonal, horizontal);
    }
}
