//! Light and dark color palettes, and the presentation switch between them.
//!
//! The palettes are a single TOML file with a `[light]` and a `[dark]`
//! table of semantic color tokens.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::backend::Presentation;
use crate::error::StarterKitError;
use crate::theme::Theme;

/// Embedded palette TOML source (contains both light and dark).
const PALETTE_TOML: &str = include_str!("../../../assets/palette.toml");

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StarterKitError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.hex())
    }
}

mod hex_rgb {
    use serde::{Deserialize, Deserializer};

    use super::Rgb;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rgb, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Semantic color tokens for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub background: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub foreground: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub card: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub primary: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub primary_foreground: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub muted: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub muted_foreground: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub accent: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub border: Rgb,
    #[serde(deserialize_with = "hex_rgb::deserialize")]
    pub destructive: Rgb,
}

impl Palette {
    /// Token names paired with their colors, in display order.
    pub fn tokens(&self) -> [(&'static str, Rgb); 10] {
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("accent", self.accent),
            ("border", self.border),
            ("destructive", self.destructive),
        ]
    }
}

/// Both palettes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Palettes {
    pub fn from_toml(toml_str: &str) -> Result<Self, StarterKitError> {
        toml::from_str(toml_str).map_err(|e| StarterKitError::Config(format!("palette: {e}")))
    }

    /// The embedded palettes.
    pub fn builtin() -> Self {
        Self::from_toml(PALETTE_TOML).expect("embedded palette is valid TOML")
    }

    pub fn for_theme(&self, theme: Theme) -> &Palette {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Presentation target that selects one of the two palettes.
#[derive(Debug, Clone)]
pub struct PaletteSwitch {
    palettes: Palettes,
    dark: bool,
}

impl PaletteSwitch {
    pub fn new(palettes: Palettes) -> Self {
        Self {
            palettes,
            dark: false,
        }
    }

    pub fn builtin() -> Self {
        Self::new(Palettes::builtin())
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn active(&self) -> &Palette {
        if self.dark {
            &self.palettes.dark
        } else {
            &self.palettes.light
        }
    }
}

impl Presentation for PaletteSwitch {
    fn apply_dark(&mut self, dark: bool) -> Result<(), StarterKitError> {
        self.dark = dark;
        Ok(())
    }
}
