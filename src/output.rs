//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, easy to
//! test) and a `print_*` wrapper that writes them to stdout.
//!
//! ## Gradients
//!
//! ```text
//! * 001 custom-1718000000000  Night Drift  [custom]
//!   002 ocean                 Arctic Ocean  [shorthand]
//!   003 prism                 Prism Flow  [manual]
//! ```
//!
//! ## Show
//!
//! ```text
//! Title:      Super Flow Title
//! Gradient:   Arctic Ocean (ocean, shorthand)
//! Animation:  diagonal, 8s ease-in-out
//! ...
//! ```
//!
//! ## Export
//!
//! ```text
//! ### Tailwind CSS
//!
//! ==> [1] React Component
//! import React from 'react';
//! ...
//! ```

use crate::catalog::GradientDefinition;
use crate::export::{CodeBlock, ExportFormat};
use crate::resolve::{self, ResolvedGradient};
use crate::state::TitleConfig;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn mode_tag(gradient: &GradientDefinition) -> &'static str {
    if gradient.is_custom {
        "custom"
    } else {
        resolve::resolve_definition(gradient).mode.as_str()
    }
}

/// Merged gradient list with the active entry starred.
pub fn format_gradient_list(gradients: &[&GradientDefinition], active_id: &str) -> Vec<String> {
    let width = gradients.iter().map(|g| g.id.len()).max().unwrap_or(0);
    gradients
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let marker = if g.id == active_id { '*' } else { ' ' };
            format!(
                "{marker} {} {:<width$}  {}  [{}]",
                format_index(i + 1),
                g.id,
                g.name,
                mode_tag(g),
            )
        })
        .collect()
}

pub fn print_gradient_list(gradients: &[&GradientDefinition], active_id: &str) {
    for line in format_gradient_list(gradients, active_id) {
        println!("{}", line);
    }
}

/// Summary of the current title design.
pub fn format_config_summary(config: &TitleConfig, resolved: &ResolvedGradient) -> Vec<String> {
    let mut lines = vec![
        format!("Title:      {}", config.title),
        format!(
            "Gradient:   {} ({}, {})",
            resolved.gradient.name,
            resolved.gradient.id,
            resolved.mode.as_str()
        ),
        format!("            {}", resolved.literal_css),
        format!(
            "Animation:  {}, {}s {}",
            config.direction, config.speed, config.easing
        ),
        format!(
            "Font:       {}px {}",
            config.font_size, config.font_weight
        ),
        format!("Zoom:       {}%", config.bg_size),
    ];
    if config.show_reflection {
        lines.push(format!(
            "Reflection: blur {}px, opacity {}",
            config.reflection_blur, config.reflection_opacity
        ));
    } else {
        lines.push("Reflection: off".to_string());
    }
    if resolved.gradient.id != config.gradient_id {
        lines.push(format!(
            "    (gradient '{}' not found, using '{}')",
            config.gradient_id, resolved.gradient.id
        ));
    }
    if !config.custom_gradients.is_empty() {
        lines.push(format!("Custom:     {} saved", config.custom_gradients.len()));
    }
    lines
}

pub fn print_config_summary(config: &TitleConfig, resolved: &ResolvedGradient) {
    for line in format_config_summary(config, resolved) {
        println!("{}", line);
    }
}

/// Code blocks under the format's label, with numbered headers, ready to
/// paste from the terminal.
pub fn format_code_blocks(format: ExportFormat, blocks: &[CodeBlock]) -> Vec<String> {
    let mut lines = vec![format!("### {}", format.label())];
    for (i, block) in blocks.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("==> [{}] {}", i + 1, block.title));
        lines.extend(block.source.lines().map(str::to_string));
    }
    lines
}

pub fn print_code_blocks(format: ExportFormat, blocks: &[CodeBlock]) {
    for line in format_code_blocks(format, blocks) {
        println!("{}", line);
    }
}

/// One-line confirmation for a saved custom gradient.
pub fn format_saved_gradient(gradient: &GradientDefinition) -> String {
    format!(
        "Saved {} ({}): {}",
        gradient.name,
        gradient.id,
        resolve::stop_list(gradient)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, merge_gradients};
    use crate::resolve::resolve;
    use crate::state::TitleUpdate;

    #[test]
    fn index_is_zero_padded() {
        assert_eq!(format_index(7), "007");
        assert_eq!(format_index(123), "123");
    }

    #[test]
    fn gradient_list_marks_active_and_modes() {
        let merged = merge_gradients(&[], Catalog::builtin());
        let lines = format_gradient_list(&merged, "prism");
        assert_eq!(lines.len(), 21);
        assert!(lines[0].starts_with("  001 ocean"));
        assert!(lines[0].ends_with("Arctic Ocean  [shorthand]"));
        assert!(lines[1].starts_with("* 002 prism"));
        assert!(lines[1].ends_with("[manual]"));
    }

    #[test]
    fn summary_reports_fallback() {
        let config = TitleConfig::default().apply_update(TitleUpdate {
            gradient_id: Some("gone".to_string()),
            show_reflection: Some(false),
            ..Default::default()
        });
        let resolved = resolve(&config, Catalog::builtin());
        let lines = format_config_summary(&config, &resolved);
        assert!(lines.contains(&"Reflection: off".to_string()));
        assert!(lines.iter().any(|l| l.contains("gradient 'gone' not found")));
    }

    #[test]
    fn code_blocks_are_numbered() {
        let blocks = vec![
            CodeBlock::new("One", "a\nb".to_string()),
            CodeBlock::new("Two", "c".to_string()),
        ];
        let lines = format_code_blocks(ExportFormat::Vanilla, &blocks);
        assert_eq!(
            lines,
            vec!["### Vanilla CSS", "", "==> [1] One", "a", "b", "", "==> [2] Two", "c"]
        );
    }
}
