//! Built-in theme presets offered by the appearance settings

use crate::color::Color;
use crate::palette::SeedColors;
use serde::{Deserialize, Serialize};

/// A named set of seed colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// The built-in default theme
    #[default]
    Default,
    /// Blue on pale sky
    Ocean,
    /// Green on pale mint
    Forest,
    /// Orange on warm cream
    Sunset,
    /// Light text on deep navy
    Midnight,
}

impl ThemePreset {
    /// Every preset, in display order
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Default,
            ThemePreset::Ocean,
            ThemePreset::Forest,
            ThemePreset::Sunset,
            ThemePreset::Midnight,
        ]
    }

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            ThemePreset::Default => "default",
            ThemePreset::Ocean => "ocean",
            ThemePreset::Forest => "forest",
            ThemePreset::Sunset => "sunset",
            ThemePreset::Midnight => "midnight",
        }
    }

    /// Seed colors for this preset
    pub fn seed(&self) -> SeedColors {
        let (primary, background, text, accent) = match self {
            ThemePreset::Default => return SeedColors::default(),
            ThemePreset::Ocean => ("#0369a1", "#f0f9ff", "#0c4a6e", "#e0f2fe"),
            ThemePreset::Forest => ("#15803d", "#f0fdf4", "#14532d", "#dcfce7"),
            ThemePreset::Sunset => ("#c2410c", "#fff7ed", "#431407", "#ffedd5"),
            ThemePreset::Midnight => ("#38bdf8", "#0f172a", "#e2e8f0", "#1e293b"),
        };

        SeedColors {
            primary: Color::from_static(primary),
            background: Color::from_static(background),
            text: Color::from_static(text),
            accent: Color::from_static(accent),
        }
    }
}

impl std::fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreset::Default => write!(f, "Default"),
            ThemePreset::Ocean => write!(f, "Ocean"),
            ThemePreset::Forest => write!(f, "Forest"),
            ThemePreset::Sunset => write!(f, "Sunset"),
            ThemePreset::Midnight => write!(f, "Midnight"),
        }
    }
}

impl std::str::FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.to_lowercase();
        ThemePreset::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == id)
            .ok_or_else(|| format!("Unknown theme preset: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_catalog() {
        let ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["default", "ocean", "forest", "sunset", "midnight"]);
    }

    #[test]
    fn test_default_preset_matches_default_seed() {
        assert_eq!(ThemePreset::Default.seed(), SeedColors::default());
        assert!(ThemePreset::Default.seed().is_default());
    }

    #[test]
    fn test_presets_are_distinct_and_valid() {
        for preset in ThemePreset::all() {
            let seed = preset.seed();
            for color in [&seed.primary, &seed.background, &seed.text, &seed.accent] {
                assert_eq!(&Color::parse(color.as_str()).unwrap(), color, "preset={preset}");
            }
            if *preset != ThemePreset::Default {
                assert!(!seed.is_default(), "preset={preset}");
            }
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("ocean".parse::<ThemePreset>().unwrap(), ThemePreset::Ocean);
        assert_eq!("MIDNIGHT".parse::<ThemePreset>().unwrap(), ThemePreset::Midnight);
        assert!("neon".parse::<ThemePreset>().is_err());
        assert_eq!(ThemePreset::Sunset.to_string(), "Sunset");
    }
}
