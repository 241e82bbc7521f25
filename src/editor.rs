//! Custom gradient editor model.
//!
//! Holds the stops of a gradient being authored, in whatever order the user
//! left them. Stops are only sorted when something is rendered or when the
//! editor is finished into a [`GradientDefinition`].
//!
//! A gradient always keeps at least [`MIN_STOPS`] stops; removing below that
//! is a silent no-op.

use crate::catalog::{CUSTOM_ID_PREFIX, GradientDefinition};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

pub const MIN_STOPS: usize = 2;

/// Name used when the user clears the name field.
pub const DEFAULT_CUSTOM_NAME: &str = "Custom Gradient";

const ADJECTIVES: &[&str] = &[
    "Ethereal", "Cyber", "Neon", "Cosmic", "Vibrant", "Misty", "Golden", "Electric", "Arctic",
    "Midnight",
];
const NOUNS: &[&str] = &[
    "Aura", "Flow", "Drift", "Pulse", "Wave", "Vibe", "Core", "Glow", "Nova", "Bloom",
];

#[derive(Error, Debug, PartialEq)]
pub enum EditorError {
    #[error("a gradient needs at least {MIN_STOPS} stops, got {0}")]
    TooFewStops(usize),
}

pub type StopId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub id: StopId,
    pub color: String,
    /// Position in percent, always within `0..=100`.
    pub position: f64,
}

#[derive(Debug, Clone)]
pub struct GradientEditor {
    name: String,
    stops: Vec<ColorStop>,
    /// Id to keep on save; set only when editing an existing custom gradient.
    editing_id: Option<String>,
    next_id: StopId,
}

impl GradientEditor {
    /// A fresh editor with a random name and a blue → violet → blue ramp.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Cosmic");
        let noun = NOUNS.choose(rng).copied().unwrap_or("Flow");
        let mut editor = Self::empty(format!("{adjective} {noun}"), None);
        editor.push_stop("#3b82f6", 0.0);
        editor.push_stop("#8b5cf6", 50.0);
        editor.push_stop("#3b82f6", 100.0);
        editor
    }

    /// Open an existing gradient for editing.
    ///
    /// Without explicit stops the colours are spread evenly over `0..=100`.
    /// Saving keeps the id only if `gradient` is custom; editing a preset
    /// produces a new custom gradient.
    pub fn from_gradient(gradient: &GradientDefinition) -> Self {
        let editing_id = gradient.is_custom.then(|| gradient.id.clone());
        let mut editor = Self::empty(gradient.name.clone(), editing_id);
        let count = gradient.colors.len();
        let stops = gradient.aligned_stops();
        for (i, color) in gradient.colors.iter().enumerate() {
            let position = match stops {
                Some(stops) => stops[i],
                None if count > 1 => i as f64 / (count - 1) as f64 * 100.0,
                None => 0.0,
            };
            editor.push_stop(color, position);
        }
        editor
    }

    /// Swap in a new set of `(colour, position)` stops.
    ///
    /// Name and saved id are untouched, so re-saving an opened custom
    /// gradient still replaces it. Fewer than [`MIN_STOPS`] stops are
    /// rejected and the current stops are kept.
    pub fn replace_stops(&mut self, stops: Vec<(String, f64)>) -> Result<(), EditorError> {
        if stops.len() < MIN_STOPS {
            return Err(EditorError::TooFewStops(stops.len()));
        }
        self.stops.clear();
        for (color, position) in stops {
            self.push_stop(&color, position);
        }
        Ok(())
    }

    fn empty(name: String, editing_id: Option<String>) -> Self {
        Self {
            name,
            stops: Vec::new(),
            editing_id,
            next_id: 1,
        }
    }

    fn push_stop(&mut self, color: &str, position: f64) -> StopId {
        let id = self.next_id;
        self.next_id += 1;
        self.stops.push(ColorStop {
            id,
            color: color.to_string(),
            position: clamp_position(position),
        });
        id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Stops in editing order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Stops in ascending position order. Ties keep editing order.
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// Left-to-right preview of the stops being edited.
    pub fn preview_css(&self) -> String {
        let stops = self
            .sorted_stops()
            .iter()
            .map(|s| format!("{} {}%", s.color, s.position))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient(to right, {stops})")
    }

    /// Add a white stop in the middle.
    pub fn add_stop(&mut self) -> StopId {
        self.push_stop("#ffffff", 50.0)
    }

    /// Remove a stop. Returns `false` (and changes nothing) when only
    /// [`MIN_STOPS`] remain or the id is unknown.
    pub fn remove_stop(&mut self, id: StopId) -> bool {
        if self.stops.len() <= MIN_STOPS {
            log::debug!("keeping stop {id}: a gradient needs {MIN_STOPS} stops");
            return false;
        }
        let before = self.stops.len();
        self.stops.retain(|s| s.id != id);
        self.stops.len() != before
    }

    pub fn set_color(&mut self, id: StopId, color: &str) {
        if let Some(stop) = self.stop_mut(id) {
            stop.color = color.to_string();
        }
    }

    /// Move a stop. Out-of-range positions are clamped to `0..=100`.
    pub fn set_position(&mut self, id: StopId, position: f64) {
        if let Some(stop) = self.stop_mut(id) {
            stop.position = clamp_position(position);
        }
    }

    /// Move a stop from a typed value. Text that is not a number becomes 0.
    pub fn set_position_text(&mut self, id: StopId, text: &str) {
        self.set_position(id, parse_position(text));
    }

    fn stop_mut(&mut self, id: StopId) -> Option<&mut ColorStop> {
        self.stops.iter_mut().find(|s| s.id == id)
    }

    /// Produce the custom gradient to save.
    ///
    /// `timestamp_ms` names new gradients (`custom-<ms>`); it is ignored when
    /// re-saving an existing custom gradient.
    pub fn finish(&self, timestamp_ms: u128) -> GradientDefinition {
        let sorted = self.sorted_stops();
        let id = self
            .editing_id
            .clone()
            .unwrap_or_else(|| format!("{CUSTOM_ID_PREFIX}{timestamp_ms}"));
        let name = if self.name.is_empty() {
            DEFAULT_CUSTOM_NAME.to_string()
        } else {
            self.name.clone()
        };
        GradientDefinition {
            id,
            name,
            classes: String::new(),
            colors: sorted.iter().map(|s| s.color.clone()).collect(),
            stops: Some(sorted.iter().map(|s| s.position).collect()),
            is_custom: true,
        }
    }
}

fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 100.0)
    }
}

/// Parse the leading integer of `text`, like a lenient number field.
/// Anything unparseable yields 0.
pub fn parse_position(text: &str) -> f64 {
    let trimmed = text.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..digits_end].parse::<i64>().map_or(0.0, |n| n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn editor() -> GradientEditor {
        GradientEditor::new(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn new_editor_has_three_stops_and_generated_name() {
        let e = editor();
        assert_eq!(e.stops().len(), 3);
        let (adj, noun) = e.name().split_once(' ').unwrap();
        assert!(ADJECTIVES.contains(&adj));
        assert!(NOUNS.contains(&noun));
        assert_eq!(
            e.preview_css(),
            "linear-gradient(to right, #3b82f6 0%, #8b5cf6 50%, #3b82f6 100%)"
        );
    }

    #[test]
    fn removing_below_two_is_noop() {
        let mut e = editor();
        let first = e.stops()[0].id;
        let second = e.stops()[1].id;
        assert!(e.remove_stop(first));
        assert_eq!(e.stops().len(), 2);
        assert!(!e.remove_stop(second));
        assert_eq!(e.stops().len(), 2);
    }

    #[test]
    fn add_stop_is_white_in_the_middle() {
        let mut e = editor();
        let id = e.add_stop();
        let stop = e.stops().iter().find(|s| s.id == id).unwrap();
        assert_eq!(stop.color, "#ffffff");
        assert_eq!(stop.position, 50.0);
        assert_eq!(e.stops().len(), 4);
    }

    #[test]
    fn positions_are_clamped() {
        let mut e = editor();
        let id = e.stops()[1].id;
        e.set_position(id, 140.0);
        assert_eq!(e.stops()[1].position, 100.0);
        e.set_position(id, -3.0);
        assert_eq!(e.stops()[1].position, 0.0);
    }

    #[test]
    fn typed_positions_fall_back_to_zero() {
        let mut e = editor();
        let id = e.stops()[1].id;
        e.set_position_text(id, "abc");
        assert_eq!(e.stops()[1].position, 0.0);
        e.set_position_text(id, " 42% ");
        assert_eq!(e.stops()[1].position, 42.0);
        e.set_position_text(id, "250");
        assert_eq!(e.stops()[1].position, 100.0);
    }

    #[test]
    fn parse_position_takes_leading_integer() {
        assert_eq!(parse_position("12.7"), 12.0);
        assert_eq!(parse_position("-5"), -5.0);
        assert_eq!(parse_position(""), 0.0);
    }

    #[test]
    fn finish_sorts_and_names_new_gradient() {
        let mut e = editor();
        e.set_name("");
        e.replace_stops(vec![("#000".to_string(), 80.0), ("#fff".to_string(), 20.0)])
            .unwrap();
        e.set_color(e.stops()[0].id, "#111");
        let g = e.finish(1_700_000_000_000);
        assert_eq!(g.id, "custom-1700000000000");
        assert_eq!(g.name, DEFAULT_CUSTOM_NAME);
        assert_eq!(g.colors, vec!["#fff", "#111"]);
        assert_eq!(g.stops, Some(vec![20.0, 80.0]));
        assert!(g.is_custom);
        assert!(g.classes.is_empty());
    }

    #[test]
    fn editing_custom_keeps_its_id() {
        let original = GradientDefinition {
            id: "custom-5".to_string(),
            name: "Mine".to_string(),
            classes: String::new(),
            colors: vec!["#000".to_string(), "#fff".to_string()],
            stops: Some(vec![10.0, 90.0]),
            is_custom: true,
        };
        let e = GradientEditor::from_gradient(&original);
        assert_eq!(e.finish(99).id, "custom-5");
    }

    #[test]
    fn editing_preset_spreads_colors_and_gets_new_id() {
        let ocean = crate::catalog::Catalog::builtin().get("ocean").unwrap();
        let e = GradientEditor::from_gradient(ocean);
        let positions: Vec<_> = e.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 50.0, 100.0]);
        assert_eq!(e.name(), "Arctic Ocean");
        assert_eq!(e.finish(12).id, "custom-12");
    }

    #[test]
    fn too_few_stops_rejected() {
        let mut e = editor();
        let err = e.replace_stops(vec![("#000".to_string(), 0.0)]).unwrap_err();
        assert_eq!(err, EditorError::TooFewStops(1));
        assert_eq!(e.stops().len(), 3);
    }

    #[test]
    fn replacing_stops_of_custom_keeps_id_and_name() {
        let saved = GradientDefinition {
            id: "custom-5".to_string(),
            name: "Mine".to_string(),
            classes: String::new(),
            colors: vec!["#000".to_string(), "#fff".to_string()],
            stops: Some(vec![0.0, 100.0]),
            is_custom: true,
        };
        let mut e = GradientEditor::from_gradient(&saved);
        e.replace_stops(vec![("#0f0".to_string(), 100.0), ("#f00".to_string(), 0.0)])
            .unwrap();
        let g = e.finish(99);
        assert_eq!(g.id, "custom-5");
        assert_eq!(g.name, "Mine");
        assert_eq!(g.colors, vec!["#f00", "#0f0"]);
        assert_eq!(g.stops, Some(vec![0.0, 100.0]));
    }
}
