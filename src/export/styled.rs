//! styled-components target.
//!
//! There is no class mechanism here, so the background is always the
//! literal gradient. The keyframes are the horizontal oscillation regardless
//! of the configured direction.

use super::{CodeBlock, REFLECTION_TRANSFORM};
use crate::resolve::ResolvedGradient;
use crate::state::TitleConfig;

pub fn generate(config: &TitleConfig, resolved: &ResolvedGradient) -> CodeBlock {
    let reflection = if config.show_reflection {
        format!(
            r#"const Reflection = styled(Title)`
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  opacity: {opacity};
  filter: blur({blur}px);
  transform: {REFLECTION_TRANSFORM};
  mask-image: linear-gradient(to top, rgba(0,0,0,1), rgba(0,0,0,0));
  -webkit-mask-image: linear-gradient(to top, rgba(0,0,0,1), rgba(0,0,0,0));
`;"#,
            opacity = config.reflection_opacity,
            blur = config.reflection_blur,
        )
    } else {
        String::new()
    };

    let source = format!(
        r#"import styled, {{ keyframes }} from 'styled-components';

const flowX = keyframes`
  0%, 100% {{ background-position: 0% 50%; }}
  50% {{ background-position: 100% 50%; }}
`;

const Title = styled.h1`
  font-size: {size}px;
  font-weight: {weight};
  background: {background};
  background-size: {bg}% {bg}%;
  background-clip: text;
  -webkit-background-clip: text;
  color: transparent;
  animation: ${{flowX}} {speed}s {ease} infinite;
  user-select: none;
`;

{reflection}"#,
        size = config.font_size,
        weight = config.font_weight.css_value(),
        background = resolved.literal_css,
        bg = config.bg_size,
        speed = config.speed,
        ease = config.easing,
    );
    CodeBlock::new("Styled Components", source)
}
