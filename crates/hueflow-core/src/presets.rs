//! Built-in color ranges offered next to the custom palette editor

use crate::palette::ColorRange;
use once_cell::sync::Lazy;

/// Sequential ramps run from low to high values
pub const SEQUENTIAL: &str = "sequential";
/// Diverging ramps have a neutral midpoint
pub const DIVERGING: &str = "diverging";
/// Qualitative palettes color unordered categories
pub const QUALITATIVE: &str = "qualitative";

const PRESET_CATEGORY: &str = "Uber";

static PRESETS: Lazy<Vec<ColorRange>> = Lazy::new(|| {
    let preset = |name: &str, kind: &str, colors: &[&str]| {
        ColorRange::new(
            name,
            Some(kind),
            PRESET_CATEGORY,
            colors.iter().map(|c| c.to_string()).collect(),
        )
    };

    vec![
        preset(
            "Global Warming",
            SEQUENTIAL,
            &["#5A1846", "#900C3F", "#C70039", "#E3611C", "#F1920E", "#FFC300"],
        ),
        preset(
            "Sunrise",
            SEQUENTIAL,
            &["#355C7D", "#6C5B7B", "#C06C84", "#F67280", "#F8B195"],
        ),
        preset(
            "Uber Pool",
            SEQUENTIAL,
            &["#213E9A", "#3C1FA7", "#811CB5", "#C318B0", "#D01367", "#DE0F0E"],
        ),
        preset(
            "Ocean Green",
            SEQUENTIAL,
            &["#3A748A", "#4D9A96", "#5EBCA1", "#8DD3A9", "#C5E6B6", "#F8F2C1"],
        ),
        preset(
            "Ice And Fire",
            DIVERGING,
            &["#0198BD", "#49E3CE", "#E8FEB5", "#FEEDB1", "#FEAD54", "#D50255"],
        ),
        preset(
            "Pink Wine",
            DIVERGING,
            &["#2C1E3D", "#573660", "#83537C", "#A6758E", "#C99DA4", "#EDD1CA"],
        ),
        preset(
            "Uber Viz Qualitative",
            QUALITATIVE,
            &["#12939A", "#DDB27C", "#88572C", "#FF991F", "#F15C17", "#223F9A"],
        ),
    ]
});

/// All built-in ranges, in display order
pub fn all() -> &'static [ColorRange] {
    &PRESETS
}

/// Look up a built-in range by name
pub fn find(name: &str) -> Option<&'static ColorRange> {
    PRESETS.iter().find(|r| r.name == name)
}

/// Built-in ranges of type `kind` with `steps` colors; `None` matches anything
pub fn filtered<'a>(
    kind: Option<&'a str>,
    steps: Option<usize>,
) -> impl Iterator<Item = &'static ColorRange> + 'a {
    PRESETS
        .iter()
        .filter(move |r| kind.is_none_or(|k| r.palette_type.as_deref() == Some(k)))
        .filter(move |r| steps.is_none_or(|n| r.len() == n))
}

/// Distinct step counts among the built-in ranges, ascending
pub fn step_counts() -> Vec<usize> {
    let mut steps: Vec<usize> = PRESETS.iter().map(ColorRange::len).collect();
    steps.sort_unstable();
    steps.dedup();
    steps
}

/// The range a fresh layer starts with
pub fn default_range() -> ColorRange {
    PRESETS[0].clone()
}
