//! Code export: one resolved gradient, four front-end flavours.
//!
//! Each target is a pure function from `(TitleConfig, ResolvedGradient)` to
//! one or two named [`CodeBlock`]s:
//!
//! | Target | Blocks |
//! |--------|--------|
//! | [`tailwind`] | React component + `tailwind.config.js` |
//! | [`styled`] | styled-components module |
//! | [`framer`] | Framer Motion component |
//! | [`vanilla`] | HTML structure + CSS styles |
//!
//! The targets do not agree on everything, and that is kept as-is:
//!
//! - styled-components and Framer Motion always animate horizontally,
//!   whatever the configured direction.
//! - Framer Motion never renders a reflection.
//! - Only the Tailwind component substitutes [`FALLBACK_TITLE`] for an empty
//!   title; the others print the title verbatim.
//!
//! Use [`ExportBundle::build`] to resolve once and render all four from the
//! same snapshot.

pub mod framer;
pub mod styled;
pub mod tailwind;
pub mod vanilla;

use crate::catalog::Catalog;
use crate::resolve::{self, ResolvedGradient};
use crate::state::TitleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text for an empty title.
pub const FALLBACK_TITLE: &str = "Flowing Wave";

/// Mirrored reflection transform shared by every target that renders one.
pub(crate) const REFLECTION_TRANSFORM: &str = "scaleY(-0.8) translateY(70%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Tailwind,
    Styled,
    Framer,
    Vanilla,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Tailwind,
        ExportFormat::Styled,
        ExportFormat::Framer,
        ExportFormat::Vanilla,
    ];

    /// Human label, as shown on the format picker.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "Tailwind CSS",
            ExportFormat::Styled => "Styled Components",
            ExportFormat::Framer => "Framer Motion",
            ExportFormat::Vanilla => "Vanilla CSS",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Styled => "styled",
            ExportFormat::Framer => "framer",
            ExportFormat::Vanilla => "vanilla",
        })
    }
}

/// One copyable piece of generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub title: &'static str,
    pub source: String,
}

impl CodeBlock {
    pub(crate) fn new(title: &'static str, source: String) -> Self {
        Self { title, source }
    }
}

/// Render a single target.
pub fn export(
    format: ExportFormat,
    config: &TitleConfig,
    resolved: &ResolvedGradient,
) -> Vec<CodeBlock> {
    match format {
        ExportFormat::Tailwind => tailwind::generate(config, resolved),
        ExportFormat::Styled => vec![styled::generate(config, resolved)],
        ExportFormat::Framer => vec![framer::generate(config, resolved)],
        ExportFormat::Vanilla => vanilla::generate(config, resolved),
    }
}

/// All four exports for one configuration snapshot.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub resolved: ResolvedGradient,
    pub tailwind: Vec<CodeBlock>,
    pub styled: Vec<CodeBlock>,
    pub framer: Vec<CodeBlock>,
    pub vanilla: Vec<CodeBlock>,
}

impl ExportBundle {
    pub fn build(config: &TitleConfig, catalog: &Catalog) -> Self {
        let resolved = resolve::resolve(config, catalog);
        Self {
            tailwind: export(ExportFormat::Tailwind, config, &resolved),
            styled: export(ExportFormat::Styled, config, &resolved),
            framer: export(ExportFormat::Framer, config, &resolved),
            vanilla: export(ExportFormat::Vanilla, config, &resolved),
            resolved,
        }
    }

    pub fn blocks(&self, format: ExportFormat) -> &[CodeBlock] {
        match format {
            ExportFormat::Tailwind => &self.tailwind,
            ExportFormat::Styled => &self.styled,
            ExportFormat::Framer => &self.framer,
            ExportFormat::Vanilla => &self.vanilla,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GradientDefinition;
    use crate::state::{Direction, Easing, FontWeight, TitleUpdate};

    fn example_config() -> TitleConfig {
        TitleConfig::default().apply_update(TitleUpdate {
            title: Some("Hi".to_string()),
            direction: Some(Direction::Horizontal),
            speed: Some(8),
            easing: Some(Easing::EaseInOut),
            gradient_id: Some("ocean".to_string()),
            font_size: Some(96),
            font_weight: Some(FontWeight::Black),
            bg_size: Some(400),
            show_reflection: Some(false),
            ..Default::default()
        })
    }

    fn with_custom(config: TitleConfig) -> TitleConfig {
        config.with_custom_gradient(GradientDefinition {
            id: "custom-42".to_string(),
            name: "Night".to_string(),
            classes: String::new(),
            colors: vec!["#000".to_string(), "#fff".to_string()],
            stops: Some(vec![80.0, 20.0]),
            is_custom: true,
        })
    }

    #[test]
    fn block_counts_per_format() {
        let bundle = ExportBundle::build(&example_config(), Catalog::builtin());
        assert_eq!(bundle.blocks(ExportFormat::Tailwind).len(), 2);
        assert_eq!(bundle.blocks(ExportFormat::Styled).len(), 1);
        assert_eq!(bundle.blocks(ExportFormat::Framer).len(), 1);
        assert_eq!(bundle.blocks(ExportFormat::Vanilla).len(), 2);
    }

    #[test]
    fn block_titles() {
        let bundle = ExportBundle::build(&example_config(), Catalog::builtin());
        let titles: Vec<_> = ExportFormat::ALL
            .iter()
            .flat_map(|f| bundle.blocks(*f).iter().map(|b| b.title))
            .collect();
        assert_eq!(
            titles,
            vec![
                "React Component",
                "tailwind.config.js",
                "Styled Components",
                "Framer Motion",
                "HTML Structure",
                "CSS Styles",
            ]
        );
    }

    #[test]
    fn example_config_is_shorthand_with_900_weight_and_no_reflection() {
        let bundle = ExportBundle::build(&example_config(), Catalog::builtin());
        assert!(!bundle.resolved.is_manual());
        let component = &bundle.tailwind[0].source;
        assert!(component.contains("fontWeight: '900'"));
        assert!(!component.contains("Reflection"));
        assert!(!component.contains("backgroundImage"));
        assert!(component.contains("from-blue-600 via-cyan-400 to-blue-600"));
    }

    #[test]
    fn manual_css_is_identical_in_every_target() {
        let config = with_custom(example_config());
        let bundle = ExportBundle::build(&config, Catalog::builtin());
        let css = bundle.resolved.inline_css().unwrap().to_string();
        assert_eq!(css, "linear-gradient(135deg, #fff 20%, #000 80%)");
        assert!(bundle.tailwind[0].source.contains(&css));
        assert!(bundle.styled[0].source.contains(&css));
        assert!(bundle.framer[0].source.contains(&css));
        assert!(bundle.vanilla[1].source.contains(&css));
    }

    #[test]
    fn weight_substitution_is_uniform() {
        let bundle = ExportBundle::build(&example_config(), Catalog::builtin());
        assert!(bundle.styled[0].source.contains("font-weight: 900;"));
        assert!(bundle.framer[0].source.contains("fontWeight: \"900\""));
        assert!(bundle.vanilla[1].source.contains("font-weight: 900;"));
    }

    #[test]
    fn empty_title_falls_back_only_in_tailwind() {
        let config = example_config().apply_update(TitleUpdate {
            title: Some(String::new()),
            ..Default::default()
        });
        let bundle = ExportBundle::build(&config, Catalog::builtin());
        assert!(bundle.tailwind[0].source.contains(FALLBACK_TITLE));
        assert!(!bundle.framer[0].source.contains(FALLBACK_TITLE));
        assert!(!bundle.vanilla[0].source.contains(FALLBACK_TITLE));
        assert!(bundle.vanilla[0].source.contains(r#"<h1 class="flow-title"></h1>"#));
    }

    #[test]
    fn reflection_toggles_consistently() {
        let on = example_config().apply_update(TitleUpdate {
            show_reflection: Some(true),
            ..Default::default()
        });
        let bundle = ExportBundle::build(&on, Catalog::builtin());
        assert!(bundle.tailwind[0].source.contains("{/* Reflection */}"));
        assert!(bundle.styled[0].source.contains("const Reflection = styled(Title)"));
        assert!(bundle.vanilla[0].source.contains("flow-title reflection"));
        assert!(!bundle.framer[0].source.contains("scaleY"));
    }

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::Vanilla.to_string(), "vanilla");
        assert_eq!(ExportFormat::Styled.label(), "Styled Components");
    }
}
