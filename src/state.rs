//! The title configuration: the single record every other module reads.
//!
//! [`TitleConfig`] is created with fixed defaults, updated through
//! [`TitleConfig::apply_update`] (a pure partial-merge that returns a new
//! record), and persisted by [`crate::store`]. Numeric fields are clamped to
//! the ranges the editor exposes; nothing else is validated.
//!
//! ```text
//! speed              1 – 30 s
//! font_size          24 – 200 px
//! bg_size            100 – 1000 %, step 50
//! reflection_blur    0 – 40 px
//! reflection_opacity 0 – 1
//! ```

use crate::catalog::GradientDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const SPEED_RANGE: RangeInclusive<u32> = 1..=30;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 24..=200;
pub const BG_SIZE_RANGE: RangeInclusive<u32> = 100..=1000;
pub const BG_SIZE_STEP: u32 = 50;
pub const REFLECTION_BLUR_RANGE: RangeInclusive<u32> = 0..=40;

/// Which way the gradient flows across the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
    #[default]
    Diagonal,
}

impl Direction {
    /// Keyframes name used by the Tailwind config and the preview page.
    pub fn keyframes(self) -> &'static str {
        match self {
            Direction::Horizontal => "gradient-x",
            Direction::Vertical => "gradient-y",
            Direction::Diagonal => "gradient-xy",
        }
    }

    /// `background-position` at the ends and at the middle of one cycle.
    pub fn keyframe_positions(self) -> (&'static str, &'static str) {
        match self {
            Direction::Horizontal => ("0% 50%", "100% 50%"),
            Direction::Vertical => ("50% 0%", "50% 100%"),
            Direction::Diagonal => ("0% 0%", "100% 100%"),
        }
    }

    /// Tailwind animation utility class.
    pub fn animation_class(self) -> &'static str {
        match self {
            Direction::Horizontal => "animate-gradient-x",
            Direction::Vertical => "animate-gradient-y",
            Direction::Diagonal => "animate-gradient-xy",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
        })
    }
}

/// CSS timing function for the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Named font weights offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
    Extrabold,
    #[default]
    Black,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Extrabold => "extrabold",
            FontWeight::Black => "black",
        }
    }

    /// Value written into generated code. Only `black` is translated (to
    /// `900`); every other name is emitted as-is.
    pub fn css_value(self) -> &'static str {
        match self {
            FontWeight::Black => "900",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that describes one animated title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Title text as typed. May be empty.
    pub title: String,
    pub direction: Direction,
    /// Animation duration in seconds.
    pub speed: u32,
    pub easing: Easing,
    /// Weak reference into custom gradients ∪ catalog.
    pub gradient_id: String,
    /// Font size in pixels.
    pub font_size: u32,
    pub font_weight: FontWeight,
    /// Background zoom in percent.
    pub bg_size: u32,
    pub show_reflection: bool,
    /// Reflection blur radius in pixels.
    pub reflection_blur: u32,
    pub reflection_opacity: f64,
    /// User-authored gradients, most recently saved first.
    pub custom_gradients: Vec<GradientDefinition>,
    /// Runtime-only; never written to or read from storage.
    #[serde(skip)]
    pub is_fullscreen: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            title: "Super Flow Title".to_string(),
            direction: Direction::Diagonal,
            speed: 8,
            easing: Easing::EaseInOut,
            gradient_id: "ocean".to_string(),
            font_size: 96,
            font_weight: FontWeight::Black,
            bg_size: 400,
            show_reflection: true,
            reflection_blur: 8,
            reflection_opacity: 0.3,
            custom_gradients: Vec::new(),
            is_fullscreen: false,
        }
    }
}

/// A sparse set of field changes. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleUpdate {
    pub title: Option<String>,
    pub direction: Option<Direction>,
    pub speed: Option<u32>,
    pub easing: Option<Easing>,
    pub gradient_id: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<FontWeight>,
    pub bg_size: Option<u32>,
    pub show_reflection: Option<bool>,
    pub reflection_blur: Option<u32>,
    pub reflection_opacity: Option<f64>,
}

impl TitleUpdate {
    pub fn is_empty(&self) -> bool {
        *self == TitleUpdate::default()
    }
}

impl TitleConfig {
    /// Return a copy with `update` merged in and all numeric fields clamped.
    pub fn apply_update(&self, update: TitleUpdate) -> TitleConfig {
        let mut next = self.clone();
        if let Some(title) = update.title {
            next.title = title;
        }
        if let Some(direction) = update.direction {
            next.direction = direction;
        }
        if let Some(speed) = update.speed {
            next.speed = speed;
        }
        if let Some(easing) = update.easing {
            next.easing = easing;
        }
        if let Some(id) = update.gradient_id {
            next.gradient_id = id;
        }
        if let Some(size) = update.font_size {
            next.font_size = size;
        }
        if let Some(weight) = update.font_weight {
            next.font_weight = weight;
        }
        if let Some(bg) = update.bg_size {
            next.bg_size = bg;
        }
        if let Some(show) = update.show_reflection {
            next.show_reflection = show;
        }
        if let Some(blur) = update.reflection_blur {
            next.reflection_blur = blur;
        }
        if let Some(opacity) = update.reflection_opacity {
            next.reflection_opacity = opacity;
        }
        next.clamped()
    }

    /// Clamp every numeric field into its editor range.
    pub fn clamped(mut self) -> TitleConfig {
        self.speed = clamp_to(self.speed, &SPEED_RANGE);
        self.font_size = clamp_to(self.font_size, &FONT_SIZE_RANGE);
        self.bg_size = snap_bg_size(self.bg_size);
        self.reflection_blur = clamp_to(self.reflection_blur, &REFLECTION_BLUR_RANGE);
        self.reflection_opacity = if self.reflection_opacity.is_nan() {
            TitleConfig::default().reflection_opacity
        } else {
            self.reflection_opacity.clamp(0.0, 1.0)
        };
        self
    }

    /// Save `gradient` as a custom gradient and make it active.
    ///
    /// Any existing custom gradient with the same id is removed first and the
    /// new one goes to the front of the list.
    pub fn with_custom_gradient(&self, mut gradient: GradientDefinition) -> TitleConfig {
        gradient.is_custom = true;
        let mut next = self.clone();
        next.custom_gradients.retain(|g| g.id != gradient.id);
        next.gradient_id = gradient.id.clone();
        next.custom_gradients.insert(0, gradient);
        next
    }

    /// Fullscreen is a view toggle for an interactive editing surface. It is
    /// not part of [`TitleUpdate`] and never reaches the stored record.
    pub fn enter_fullscreen(&mut self) {
        self.is_fullscreen = true;
    }

    pub fn exit_fullscreen(&mut self) {
        self.is_fullscreen = false;
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Clamp to the zoom range and round to the nearest 50 % step.
fn snap_bg_size(value: u32) -> u32 {
    let clamped = clamp_to(value, &BG_SIZE_RANGE);
    let start = *BG_SIZE_RANGE.start();
    let steps = (clamped - start + BG_SIZE_STEP / 2) / BG_SIZE_STEP;
    (start + steps * BG_SIZE_STEP).min(*BG_SIZE_RANGE.end())
}
