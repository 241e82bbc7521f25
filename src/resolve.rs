//! Gradient resolution: from a [`TitleConfig`] to the CSS every target shares.
//!
//! Resolution happens once per configuration snapshot and the result is
//! handed to every generator, so the four exports can never disagree about
//! which gradient they render.
//!
//! ## Render Modes
//!
//! | Mode | When | Background |
//! |------|------|------------|
//! | Manual | gradient is custom, or has explicit stops | inline `linear-gradient(135deg, …)` |
//! | Shorthand | everything else | Tailwind classes `bg-gradient-to-br from-… via-… to-…` |
//!
//! Targets without a class mechanism always use [`ResolvedGradient::literal_css`],
//! which spells the colours out in both modes.

use crate::catalog::{Catalog, GradientDefinition};
use crate::state::TitleConfig;

/// Gradient angle used by every generated expression.
pub const GRADIENT_ANGLE: &str = "135deg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Manual,
    Shorthand,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Manual => "manual",
            RenderMode::Shorthand => "shorthand",
        }
    }
}

/// How the background is applied in class-aware targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Inline `background-image` value.
    Inline(String),
    /// Tailwind classes that carry the colours.
    Shorthand(String),
}

/// The gradient picked for one configuration snapshot plus its derived CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGradient {
    pub gradient: GradientDefinition,
    pub mode: RenderMode,
    pub background: Background,
    /// Concrete `linear-gradient(...)` with the colours spelled out.
    pub literal_css: String,
}

impl ResolvedGradient {
    pub fn is_manual(&self) -> bool {
        self.mode == RenderMode::Manual
    }

    /// Inline background expression, manual mode only.
    pub fn inline_css(&self) -> Option<&str> {
        match &self.background {
            Background::Inline(css) => Some(css),
            Background::Shorthand(_) => None,
        }
    }

    /// Gradient classes for Tailwind markup. Empty in manual mode.
    pub fn gradient_classes(&self) -> &str {
        match &self.background {
            Background::Inline(_) => "",
            Background::Shorthand(classes) => classes,
        }
    }

    /// Colour at index `len / 2`. Picked, not averaged, so even-length lists
    /// take the upper of the two middle colours.
    pub fn midpoint_color(&self) -> Option<&str> {
        let colors = &self.gradient.colors;
        colors.get(colors.len() / 2).map(String::as_str)
    }

    /// Soft radial glow drawn behind the title.
    pub fn glow_background(&self) -> Option<String> {
        self.midpoint_color()
            .map(|c| format!("radial-gradient(circle, {c}55 0%, transparent 70%)"))
    }
}

/// Look up `id` in custom gradients first, then the catalog.
pub fn find_gradient<'a>(
    id: &str,
    custom: &'a [GradientDefinition],
    catalog: &'a Catalog,
) -> Option<&'a GradientDefinition> {
    custom
        .iter()
        .find(|g| g.id == id)
        .or_else(|| catalog.get(id))
}

/// Resolve the active gradient of `config` and derive its CSS.
///
/// Unknown ids fall back to the first catalog entry.
pub fn resolve(config: &TitleConfig, catalog: &Catalog) -> ResolvedGradient {
    let gradient = match find_gradient(&config.gradient_id, &config.custom_gradients, catalog) {
        Some(g) => g,
        None => {
            let fallback = catalog.default_entry();
            log::debug!(
                "gradient '{}' not found, falling back to '{}'",
                config.gradient_id,
                fallback.id
            );
            fallback
        }
    };
    resolve_definition(gradient)
}

/// Derive mode and CSS for a single definition.
pub fn resolve_definition(gradient: &GradientDefinition) -> ResolvedGradient {
    let mode = if gradient.is_custom || gradient.stops.is_some() {
        RenderMode::Manual
    } else {
        RenderMode::Shorthand
    };
    let literal_css = linear_gradient_css(gradient);
    let background = match mode {
        RenderMode::Manual => Background::Inline(literal_css.clone()),
        RenderMode::Shorthand => {
            Background::Shorthand(format!("bg-gradient-to-br {}", gradient.classes))
        }
    };
    ResolvedGradient {
        gradient: gradient.clone(),
        mode,
        background,
        literal_css,
    }
}

/// `linear-gradient(135deg, …)` for a definition. Stops are emitted in
/// ascending position order; without stops the bare colours are listed and
/// the browser spaces them evenly.
pub fn linear_gradient_css(gradient: &GradientDefinition) -> String {
    format!("linear-gradient({GRADIENT_ANGLE}, {})", stop_list(gradient))
}

/// Comma-separated stop list, e.g. `#000 20%, #fff 80%`.
pub fn stop_list(gradient: &GradientDefinition) -> String {
    match gradient.aligned_stops() {
        Some(stops) => sorted_stops(&gradient.colors, stops)
            .into_iter()
            .map(|(color, pos)| format!("{color} {pos}%"))
            .collect::<Vec<_>>()
            .join(", "),
        None => {
            if gradient.stops.is_some() {
                log::debug!(
                    "gradient '{}' has {} colours but a different number of stops; spacing evenly",
                    gradient.id,
                    gradient.colors.len()
                );
            }
            gradient.colors.join(", ")
        }
    }
}

/// Pair colours with positions and sort by position. Ties keep input order.
pub fn sorted_stops<'a>(colors: &'a [String], stops: &[f64]) -> Vec<(&'a str, f64)> {
    let mut pairs: Vec<(&str, f64)> = colors
        .iter()
        .map(String::as_str)
        .zip(stops.iter().copied())
        .collect();
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
    pairs
}
