//! Gradient definitions and the built-in preset catalog.
//!
//! A [`GradientDefinition`] is either a built-in preset or a user-authored
//! ("custom") gradient. Presets usually carry a Tailwind shorthand class
//! string (`from-… via-… to-…`) that stands in for their colours; custom
//! gradients never do and always render from their explicit colour list.
//!
//! ## Lookup Order
//!
//! Gradients are looked up in the concatenation `[custom…, catalog…]`:
//!
//! ```text
//! custom-1718000000000   ← most recently saved custom gradient
//! custom-1717000000000
//! ocean                  ← catalog, first entry is the fallback
//! prism
//! …
//! ```
//!
//! Custom ids carry a `custom-` prefix so they never collide with preset ids
//! in practice, but [`merge_gradients`] still lets the custom side win.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Id prefix for user-authored gradients.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("a gradient catalog needs at least one entry")]
    Empty,
}

/// A named gradient: ordered colours, optional stop positions, optional
/// Tailwind shorthand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientDefinition {
    /// Unique within catalog ∪ custom gradients.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Tailwind colour classes, e.g. `from-blue-600 via-cyan-400 to-blue-600`.
    /// Empty for custom gradients and for presets that need explicit stops.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub classes: String,
    /// Colours in order, any CSS colour syntax (usually hex).
    pub colors: Vec<String>,
    /// Stop positions in percent, one per colour. `None` means evenly spaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<f64>>,
    /// Whether this gradient was authored by the user.
    #[serde(default)]
    pub is_custom: bool,
}

impl GradientDefinition {
    /// Stop positions, but only when they line up one-to-one with the colours.
    pub fn aligned_stops(&self) -> Option<&[f64]> {
        self.stops
            .as_deref()
            .filter(|stops| stops.len() == self.colors.len())
    }
}

/// The built-in gradient presets. Never empty: the first entry is the
/// fallback for unresolvable gradient references.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<GradientDefinition>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<GradientDefinition>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// The stock presets shipped with flowtitle.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
            entries: PRESETS.iter().map(Preset::to_definition).collect(),
        });
        &BUILTIN
    }

    pub fn entries(&self) -> &[GradientDefinition] {
        &self.entries
    }

    /// The fallback entry, used when a gradient id cannot be resolved.
    pub fn default_entry(&self) -> &GradientDefinition {
        &self.entries[0]
    }

    pub fn get(&self, id: &str) -> Option<&GradientDefinition> {
        self.entries.iter().find(|g| g.id == id)
    }
}

/// Merge custom gradients in front of the catalog.
///
/// Catalog entries whose id is already taken by a custom gradient are
/// dropped, so every id appears at most once and the custom side wins.
pub fn merge_gradients<'a>(
    custom: &'a [GradientDefinition],
    catalog: &'a Catalog,
) -> Vec<&'a GradientDefinition> {
    let custom_ids: HashSet<&str> = custom.iter().map(|g| g.id.as_str()).collect();
    custom
        .iter()
        .chain(
            catalog
                .entries()
                .iter()
                .filter(|g| !custom_ids.contains(g.id.as_str())),
        )
        .collect()
}

// =============================================================================
// Stock presets
// =============================================================================

struct Preset {
    id: &'static str,
    name: &'static str,
    classes: &'static str,
    colors: &'static [&'static str],
    stops: Option<&'static [f64]>,
}

impl Preset {
    fn to_definition(&self) -> GradientDefinition {
        GradientDefinition {
            id: self.id.to_string(),
            name: self.name.to_string(),
            classes: self.classes.to_string(),
            colors: self.colors.iter().map(|c| c.to_string()).collect(),
            stops: self.stops.map(<[f64]>::to_vec),
            is_custom: false,
        }
    }
}

const fn preset(
    id: &'static str,
    name: &'static str,
    classes: &'static str,
    colors: &'static [&'static str],
) -> Preset {
    Preset {
        id,
        name,
        classes,
        colors,
        stops: None,
    }
}

const PRESETS: &[Preset] = &[
    preset(
        "ocean",
        "Arctic Ocean",
        "from-blue-600 via-cyan-400 to-blue-600",
        &["#2563eb", "#22d3ee", "#2563eb"],
    ),
    Preset {
        id: "prism",
        name: "Prism Flow",
        classes: "",
        colors: &["#4f46e5", "#c084fc", "#ffffff", "#9972d7", "#4f46e5"],
        stops: Some(&[0.0, 50.0, 52.0, 57.0, 100.0]),
    },
    preset(
        "sunset",
        "Vibrant Sunset",
        "from-orange-500 via-rose-500 to-orange-500",
        &["#f97316", "#f43f5e", "#f97316"],
    ),
    preset(
        "lavender",
        "Cosmic Lavender",
        "from-indigo-600 via-purple-400 to-indigo-600",
        &["#4f46e5", "#c084fc", "#4f46e5"],
    ),
    preset(
        "mint",
        "Fresh Mint",
        "from-emerald-500 via-teal-300 to-emerald-500",
        &["#10b981", "#5eead4", "#10b981"],
    ),
    preset(
        "aurora",
        "Aurora Borealis",
        "from-green-400 via-blue-500 to-purple-600",
        &["#4ade80", "#3b82f6", "#9333ea"],
    ),
    preset(
        "fire",
        "Magma Flow",
        "from-red-600 via-amber-500 to-red-600",
        &["#dc2626", "#f59e0b", "#dc2626"],
    ),
    preset(
        "midnight",
        "Midnight Glass",
        "from-slate-400 via-slate-100 to-slate-400",
        &["#94a3b8", "#f1f5f9", "#94a3b8"],
    ),
    preset(
        "electric",
        "Electric Violet",
        "from-violet-600 via-fuchsia-400 to-violet-600",
        &["#7c3aed", "#e879f9", "#7c3aed"],
    ),
    preset(
        "neon",
        "Neon Jungle",
        "from-lime-500 via-emerald-400 to-cyan-500",
        &["#84cc16", "#34d399", "#06b6d4"],
    ),
    preset(
        "tropical",
        "Tropical Dream",
        "from-yellow-400 via-orange-500 to-pink-500",
        &["#facc15", "#f97316", "#ec4899"],
    ),
    preset(
        "mist",
        "Silver Mist",
        "from-gray-300 via-slate-200 to-gray-400",
        &["#d1d5db", "#e2e8f0", "#9ca3af"],
    ),
    preset(
        "golden",
        "Golden Hour",
        "from-amber-400 via-orange-400 to-yellow-600",
        &["#fbbf24", "#fb923c", "#ca8a04"],
    ),
    preset(
        "cherry",
        "Cherry Blossom",
        "from-pink-300 via-rose-300 to-pink-400",
        &["#f9a8d4", "#fda4af", "#f472b6"],
    ),
    preset(
        "deepsea",
        "Deep Sea",
        "from-blue-900 via-indigo-800 to-blue-700",
        &["#1e3a8a", "#3730a3", "#1d4ed8"],
    ),
    preset(
        "forest",
        "Forest Edge",
        "from-green-800 via-emerald-600 to-lime-700",
        &["#064e3b", "#059669", "#4d7c0f"],
    ),
    preset(
        "desert",
        "Desert Sands",
        "from-amber-200 via-orange-200 to-amber-400",
        &["#fde68a", "#fed7aa", "#fbbf24"],
    ),
    preset(
        "cyber",
        "Cyberpunk",
        "from-pink-500 via-purple-600 to-cyan-400",
        &["#ec4899", "#9333ea", "#22d3ee"],
    ),
    preset(
        "quartz",
        "Rose Quartz",
        "from-rose-100 via-pink-100 to-rose-200",
        &["#ffe4e6", "#fdf2f8", "#fecdd3"],
    ),
    preset(
        "slate",
        "Slate Blue",
        "from-slate-700 via-indigo-400 to-slate-800",
        &["#334155", "#818cf8", "#1e293b"],
    ),
    preset(
        "lime",
        "Lime Twist",
        "from-lime-300 via-green-400 to-lime-500",
        &["#bef264", "#4ade80", "#84cc16"],
    ),
];
