//! Static ColorBrewer catalog

use ahash::AHashMap;
use once_cell::sync::Lazy;
use tm_core::Color;

use crate::PaletteKind;

/// How an entry produces colors
#[derive(Clone, Copy)]
pub(crate) enum PaletteSource {
    /// Continuous scheme sampled evenly, any count
    Gradient(&'static colorous::Gradient),
    /// Fixed discrete colors, taken from the front
    Discrete(&'static [colorous::Color]),
}

#[derive(Clone, Copy)]
pub(crate) struct PaletteEntry {
    pub(crate) kind: PaletteKind,
    pub(crate) source: PaletteSource,
}

impl PaletteEntry {
    pub(crate) fn max_colors(&self) -> usize {
        match self.source {
            PaletteSource::Gradient(_) => crate::MAX_COLORS,
            PaletteSource::Discrete(colors) => colors.len(),
        }
    }

    pub(crate) fn colors(&self, count: usize) -> Option<Vec<Color>> {
        match self.source {
            // ColorBrewer gradients return the published n-class colors for `eval_rational(i, n)`
            PaletteSource::Gradient(gradient) => {
                Some((0..count).map(|i| to_color(gradient.eval_rational(i, count))).collect())
            }
            PaletteSource::Discrete(colors) => {
                (count <= colors.len()).then(|| colors[..count].iter().copied().map(to_color).collect())
            }
        }
    }
}

fn to_color(color: colorous::Color) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

const DIVERGING: &[(&str, &colorous::Gradient)] = &[
    ("PuOr", &colorous::PURPLE_ORANGE),
    ("BrBG", &colorous::BROWN_GREEN),
    ("PRGn", &colorous::PURPLE_GREEN),
    ("PiYG", &colorous::PINK_GREEN),
    ("RdBu", &colorous::RED_BLUE),
    ("RdGy", &colorous::RED_GREY),
    ("RdYlBu", &colorous::RED_YELLOW_BLUE),
    ("Spectral", &colorous::SPECTRAL),
    ("RdYlGn", &colorous::RED_YELLOW_GREEN),
];

const QUALITATIVE: &[(&str, &[colorous::Color])] = &[
    ("Set1", &colorous::SET1),
    ("Pastel1", &colorous::PASTEL1),
    ("Set2", &colorous::SET2),
    ("Pastel2", &colorous::PASTEL2),
    ("Dark2", &colorous::DARK2),
    ("Set3", &colorous::SET3),
    ("Paired", &colorous::PAIRED),
    ("Accent", &colorous::ACCENT),
];

const SEQUENTIAL: &[(&str, &colorous::Gradient)] = &[
    ("YlGn", &colorous::YELLOW_GREEN),
    ("YlGnBu", &colorous::YELLOW_GREEN_BLUE),
    ("GnBu", &colorous::GREEN_BLUE),
    ("BuGn", &colorous::BLUE_GREEN),
    ("PuBuGn", &colorous::PURPLE_BLUE_GREEN),
    ("PuBu", &colorous::PURPLE_BLUE),
    ("BuPu", &colorous::BLUE_PURPLE),
    ("RdPu", &colorous::RED_PURPLE),
    ("PuRd", &colorous::PURPLE_RED),
    ("OrRd", &colorous::ORANGE_RED),
    ("YlOrRd", &colorous::YELLOW_ORANGE_RED),
    ("YlOrBr", &colorous::YELLOW_ORANGE_BROWN),
    ("Purples", &colorous::PURPLES),
    ("Blues", &colorous::BLUES),
    ("Greens", &colorous::GREENS),
    ("Oranges", &colorous::ORANGES),
    ("Reds", &colorous::REDS),
    ("Greys", &colorous::GREYS),
];

static CATALOG: Lazy<AHashMap<&'static str, PaletteEntry>> = Lazy::new(|| {
    let mut catalog = AHashMap::new();

    for (name, gradient) in DIVERGING {
        catalog.insert(*name, PaletteEntry {
            kind: PaletteKind::Diverging,
            source: PaletteSource::Gradient(*gradient),
        });
    }
    for (name, colors) in QUALITATIVE {
        catalog.insert(*name, PaletteEntry {
            kind: PaletteKind::Qualitative,
            source: PaletteSource::Discrete(*colors),
        });
    }
    for (name, gradient) in SEQUENTIAL {
        catalog.insert(*name, PaletteEntry {
            kind: PaletteKind::Sequential,
            source: PaletteSource::Gradient(*gradient),
        });
    }

    catalog
});

pub(crate) fn lookup(name: &str) -> Option<PaletteEntry> {
    CATALOG.get(name).copied()
}

/// All palette names: diverging, then qualitative, then sequential
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    DIVERGING
        .iter()
        .map(|(name, _)| *name)
        .chain(QUALITATIVE.iter().map(|(name, _)| *name))
        .chain(SEQUENTIAL.iter().map(|(name, _)| *name))
}

pub fn palette_kind(name: &str) -> Option<PaletteKind> {
    lookup(name).map(|entry| entry.kind)
}

/// Largest count `name` can resolve
pub fn palette_max_colors(name: &str) -> Option<usize> {
    lookup(name).map(|entry| entry.max_colors())
}
