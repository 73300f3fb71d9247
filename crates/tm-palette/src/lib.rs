//! Palette resolution
//!
//! Resolves ColorBrewer palettes by name into ordered color sequences, one
//! color per class, lightest/first class first.

pub mod catalog;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tm_core::Color;
use tracing::debug;

pub use catalog::{palette_kind, palette_max_colors, palette_names};

/// Palette used when none is named
pub const DEFAULT_PALETTE: &str = "OrRd";

/// Smallest class count the catalog is resolved for
pub const MIN_COLORS: usize = 3;

/// Largest class count the catalog is resolved for
pub const MAX_COLORS: usize = 12;

/// Palette family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteKind {
    /// Ordered data from low to high
    Sequential,
    /// Emphasis on a critical mid value and both extremes
    Diverging,
    /// Nominal data, no implied magnitude
    Qualitative,
}

/// Errors that can occur while resolving palettes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    #[error("Palette {name} provides at most {max} colors, {requested} requested")]
    UnsupportedCount {
        name: String,
        requested: usize,
        max: usize,
    },
}

/// Resolve `count` colors from the palette called `name`.
///
/// An empty name selects [`DEFAULT_PALETTE`]. Names are matched exactly.
pub fn resolve_palette(name: &str, count: usize) -> Result<Vec<Color>, PaletteError> {
    let name = if name.is_empty() { DEFAULT_PALETTE } else { name };

    let entry = catalog::lookup(name).ok_or_else(|| PaletteError::PaletteNotFound(name.to_string()))?;
    let colors = entry.colors(count).ok_or_else(|| PaletteError::UnsupportedCount {
        name: name.to_string(),
        requested: count,
        max: entry.max_colors(),
    })?;

    debug!(palette = name, count, "resolved palette");
    Ok(colors)
}
