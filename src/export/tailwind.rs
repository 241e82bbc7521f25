//! Tailwind CSS target: a React component plus the `tailwind.config.js`
//! snippet that registers the three gradient animations.
//!
//! Speed and easing travel through the `--speed` / `--ease` custom
//! properties so one config file serves every title on a page.

use super::{CodeBlock, FALLBACK_TITLE, REFLECTION_TRANSFORM};
use crate::resolve::ResolvedGradient;
use crate::state::TitleConfig;

const REFLECTION_MASK: &str = "linear-gradient(to top, rgba(0,0,0,1) 0%, rgba(0,0,0,0) 80%)";

const CONFIG_JS: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  theme: {
    extend: {
      keyframes: {
        'gradient-x': { '0%, 100%': { 'background-position': '0% 50%' }, '50%': { 'background-position': '100% 50%' } },
        'gradient-y': { '0%, 100%': { 'background-position': '50% 0%' }, '50%': { 'background-position': '50% 100%' } },
        'gradient-xy': { '0%, 100%': { 'background-position': '0% 0%' }, '50%': { 'background-position': '100% 100%' } },
      },
      animation: {
        'gradient-x': 'gradient-x var(--speed, 8s) var(--ease, ease) infinite',
        'gradient-y': 'gradient-y var(--speed, 8s) var(--ease, ease) infinite',
        'gradient-xy': 'gradient-xy var(--speed, 8s) var(--ease, ease) infinite',
      },
    },
  },
}"#;

pub fn generate(config: &TitleConfig, resolved: &ResolvedGradient) -> Vec<CodeBlock> {
    vec![
        CodeBlock::new("React Component", component(config, resolved)),
        CodeBlock::new("tailwind.config.js", CONFIG_JS.to_string()),
    ]
}

fn component(config: &TitleConfig, resolved: &ResolvedGradient) -> String {
    let animation = config.direction.animation_class();
    let classes = resolved.gradient_classes();
    let title = if config.title.is_empty() {
        FALLBACK_TITLE
    } else {
        config.title.as_str()
    };
    let weight = config.font_weight.css_value();
    let background_image = resolved
        .inline_css()
        .map(|css| format!(",\n          backgroundImage: '{css}'"))
        .unwrap_or_default();

    let reflection = if config.show_reflection {
        format!(
            r#"
      {{/* Reflection */}}
      <h1
        className="absolute top-full left-0 right-0 {animation} bg-clip-text text-transparent {classes} origin-top select-none pointer-events-none"
        style={{{{
          fontSize: '{size}px',
          fontWeight: '{weight}',
          backgroundSize: '{bg}% {bg}%',
          opacity: {opacity},
          filter: 'blur({blur}px)',
          transform: '{REFLECTION_TRANSFORM}',
          WebkitMaskImage: '{REFLECTION_MASK}',
          maskImage: '{REFLECTION_MASK}',
          '--speed': '{speed}s',
          '--ease': '{ease}'{background_image}
        }} as React.CSSProperties}}
      >
        {title}
      </h1>"#,
            size = config.font_size,
            bg = config.bg_size,
            opacity = config.reflection_opacity,
            blur = config.reflection_blur,
            speed = config.speed,
            ease = config.easing,
        )
    } else {
        String::new()
    };

    format!(
        r#"import React from 'react';

const FlowingTitle = () => {{
  return (
    <div className="relative group w-full flex justify-center py-20">
      <h1
        className="{animation} bg-clip-text text-transparent {classes} transition-all duration-300 select-none"
        style={{{{
          fontSize: '{size}px',
          fontWeight: '{weight}',
          backgroundSize: '{bg}% {bg}%',
          '--speed': '{speed}s',
          '--ease': '{ease}'{background_image}
        }} as React.CSSProperties}}
      >
        {title}
      </h1>{reflection}
    </div>
  );
}};"#,
        size = config.font_size,
        bg = config.bg_size,
        speed = config.speed,
        ease = config.easing,
    )
}
