//! Framer Motion target: background position driven by a three-step
//! keyframe array (`0% → 100% → 0%`). Horizontal only, and no reflection.

use super::CodeBlock;
use crate::resolve::ResolvedGradient;
use crate::state::TitleConfig;

pub fn generate(config: &TitleConfig, resolved: &ResolvedGradient) -> CodeBlock {
    let source = format!(
        r#"import {{ motion }} from 'framer-motion';

const FlowingTitle = () => {{
  return (
    <motion.h1
      animate={{{{ backgroundPosition: ["0% 50%", "100% 50%", "0% 50%"] }}}}
      transition={{{{
        duration: {speed},
        ease: "{ease}",
        repeat: Infinity
      }}}}
      style={{{{
        fontSize: "{size}px",
        fontWeight: "{weight}",
        background: "{background}",
        backgroundSize: "{bg}% {bg}%",
        WebkitBackgroundClip: "text",
        backgroundClip: "text",
        color: "transparent",
      }}}}
    >
      {title}
    </motion.h1>
  );
}};"#,
        speed = config.speed,
        ease = config.easing,
        size = config.font_size,
        weight = config.font_weight.css_value(),
        background = resolved.literal_css,
        bg = config.bg_size,
        title = config.title,
    );
    CodeBlock::new("Framer Motion", source)
}
