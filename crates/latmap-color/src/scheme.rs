//! Color palettes and the built-in sequential schemes
//!
//! Most schemes are ColorBrewer sequential ramps (<http://colorbrewer2.org/>);
//! `RED_2` and `RED_3` are longer in-house red ramps. Each scheme keeps the
//! darkest N colors of its ramp and draws zero on white.

use latmap_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WHITE: &str = "#ffffff";

const BREWER_RED: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];
const BREWER_PURPLE: &[&str] = &[
    "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#54278f",
    "#3f007d",
];
const BREWER_GREY: &[&str] = &[
    "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525",
    "#000000",
];
const BREWER_GREEN: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];
const BREWER_BLUE: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];
const BREWER_PURPLE_RED: &[&str] = &[
    "#f7f4f9", "#e7e1ef", "#d4b9da", "#c994c7", "#df65b0", "#e7298a", "#ce1256", "#980043",
    "#67001f",
];
const BREWER_PURPLE_BLUE: &[&str] = &[
    "#fff7fb", "#ece7f2", "#d0d1e6", "#a6bddb", "#74a9cf", "#3690c0", "#0570b0", "#045a8d",
    "#023858",
];
const BREWER_BLUE_PURPLE: &[&str] = &[
    "#f7fcfd", "#e0ecf4", "#bfd3e6", "#9ebcda", "#8c96c6", "#8c6bb1", "#88419d", "#810f7c",
    "#4d004b",
];
const BREWER_BLUE_GREEN: &[&str] = &[
    "#f7fcfd", "#e5f5f9", "#ccece6", "#99d8c9", "#66c2a4", "#41ae76", "#238b45", "#006d2c",
    "#00441b",
];
const BREWER_YELLOW_OR_RED: &[&str] = &[
    "#ffffcc", "#ffeda0", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c", "#bd0026",
    "#800026",
];
const INHOUSE_RED_1: &[&str] = &[
    "#FFE6E6", "#FFCCCC", "#FFB2B2", "#FF9999", "#FF8080", "#FF6666", "#FF4D4D", "#FF3333",
    "#FF1919", "#FF0000", "#E60000", "#CC0000", "#B20000", "#990000", "#800000", "#660000",
];
const INHOUSE_RED_2: &[&str] = &[
    "#FFE5E5", "#FFCCCC", "#FFB2B2", "#FF9999", "#FF7F7F", "#FF6666", "#FF4C4C", "#FF3232",
    "#FF1919", "#FF0000", "#E50000", "#CC0000", "#B20000", "#990000", "#7F0000", "#660000",
    "#4C0000", "#330000", "#190000",
];

/// Ordered foreground colors plus the color reserved for zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct ColorPalette {
    foreground: Vec<String>,
    background: String,
}

/// Unchecked palette fields as read from configuration
#[derive(Deserialize)]
struct RawPalette {
    foreground: Vec<String>,
    background: String,
}

impl TryFrom<RawPalette> for ColorPalette {
    type Error = Error;

    fn try_from(raw: RawPalette) -> Result<Self> {
        Self::new(raw.foreground, raw.background)
    }
}

impl ColorPalette {
    /// Build a palette from light-to-dark foreground colors
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPalette`] if `foreground` is empty or contains the
    /// background color.
    pub fn new<I, S>(foreground: I, background: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let foreground: Vec<String> = foreground.into_iter().map(Into::into).collect();
        let background = background.into();
        if foreground.is_empty() {
            return Err(Error::InvalidPalette(
                "at least one foreground color is required".to_string(),
            ));
        }
        if foreground.iter().any(|c| *c == background) {
            return Err(Error::InvalidPalette(format!(
                "foreground color {background} is the same as the background color"
            )));
        }
        Ok(Self {
            foreground,
            background,
        })
    }

    pub fn foreground(&self) -> &[String] {
        &self.foreground
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    /// Number of foreground colors
    pub fn len(&self) -> usize {
        self.foreground.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foreground.is_empty()
    }
}

/// Built-in sequential color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorRampScheme {
    YellowOrRed,
    BlueGreen,
    BluePurple,
    PurpleBlue,
    PurpleRed,
    Blue,
    Green,
    #[default]
    Grey,
    Purple,
    Red,
    #[serde(rename = "RED_2")]
    Red2,
    #[serde(rename = "RED_3")]
    Red3,
}

impl ColorRampScheme {
    pub const ALL: [ColorRampScheme; 12] = [
        Self::YellowOrRed,
        Self::BlueGreen,
        Self::BluePurple,
        Self::PurpleBlue,
        Self::PurpleRed,
        Self::Blue,
        Self::Green,
        Self::Grey,
        Self::Purple,
        Self::Red,
        Self::Red2,
        Self::Red3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::YellowOrRed => "YELLOW_OR_RED",
            Self::BlueGreen => "BLUE_GREEN",
            Self::BluePurple => "BLUE_PURPLE",
            Self::PurpleBlue => "PURPLE_BLUE",
            Self::PurpleRed => "PURPLE_RED",
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
            Self::Grey => "GREY",
            Self::Purple => "PURPLE",
            Self::Red => "RED",
            Self::Red2 => "RED_2",
            Self::Red3 => "RED_3",
        }
    }

    /// Full ramp and the number of its darkest colors in use
    fn ramp(&self) -> (&'static [&'static str], usize) {
        match self {
            Self::YellowOrRed => (BREWER_YELLOW_OR_RED, 9),
            Self::BlueGreen => (BREWER_BLUE_GREEN, 9),
            Self::BluePurple => (BREWER_BLUE_PURPLE, 9),
            Self::PurpleBlue => (BREWER_PURPLE_BLUE, 9),
            Self::PurpleRed => (BREWER_PURPLE_RED, 9),
            Self::Blue => (BREWER_BLUE, 9),
            Self::Green => (BREWER_GREEN, 9),
            // The lightest grey is the background
            Self::Grey => (BREWER_GREY, 8),
            Self::Purple => (BREWER_PURPLE, 9),
            Self::Red => (BREWER_RED, 9),
            Self::Red2 => (INHOUSE_RED_1, 16),
            Self::Red3 => (INHOUSE_RED_2, 19),
        }
    }

    /// Foreground colors of this scheme, light to dark
    pub fn foreground(&self) -> &'static [&'static str] {
        let (ramp, classes) = self.ramp();
        &ramp[ramp.len() - classes..]
    }

    /// The scheme as a palette over a white background
    pub fn palette(&self) -> ColorPalette {
        ColorPalette {
            foreground: self.foreground().iter().map(|c| c.to_string()).collect(),
            background: WHITE.to_string(),
        }
    }
}

impl fmt::Display for ColorRampScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRampScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
                Error::InvalidParameter(format!(
                    "unknown color scheme: {s}. Valid options: {}",
                    names.join(", ")
                ))
            })
    }
}
