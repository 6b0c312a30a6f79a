//! Seed colors and the palette derived from them
//!
//! Four seed colors fully determine the eleven theme variables that
//! presentational components bind to. Derivation is a pure function of the
//! seed and the configured hover direction.

use crate::color::Color;
use crate::config::HoverDirection;
use crate::error::Result;
use serde::{Deserialize, Serialize};

// =============================================================================
// Built-in Defaults
// =============================================================================

/// Built-in default seed colors
pub mod defaults {
    /// Teal brand color
    pub const PRIMARY: &str = "#008062";

    /// Pale blue-gray surface
    pub const BACKGROUND: &str = "#e6eeef";

    /// Near-black text
    pub const TEXT: &str = "#1a1a1a";

    /// Mint highlight
    pub const ACCENT: &str = "#e0fff8";
}

/// Brightness delta (percent) of the primary hover shade
pub const PRIMARY_HOVER_DELTA: i32 = 10;
/// Brightness delta (percent) of the light primary shade
pub const PRIMARY_LIGHT_DELTA: i32 = 40;
/// Brightness delta (percent) of the light/dark background shades
pub const BACKGROUND_DELTA: i32 = 5;
/// Brightness delta (percent) of the dark accent shade
pub const ACCENT_DARK_DELTA: i32 = -10;
/// Opacity of muted text
pub const TEXT_MUTED_OPACITY: f64 = 0.7;
/// Opacity of light text
pub const TEXT_LIGHT_OPACITY: f64 = 0.5;

// =============================================================================
// Seed Colors
// =============================================================================

/// The user-controlled colors every other theme value is derived from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedColors {
    /// Brand / interactive color
    pub primary: Color,
    /// Base surface color
    pub background: Color,
    /// Base foreground color
    pub text: Color,
    /// Highlight color
    pub accent: Color,
}

impl Default for SeedColors {
    fn default() -> Self {
        Self {
            primary: Color::from_static(defaults::PRIMARY),
            background: Color::from_static(defaults::BACKGROUND),
            text: Color::from_static(defaults::TEXT),
            accent: Color::from_static(defaults::ACCENT),
        }
    }
}

impl SeedColors {
    /// Parse four hex strings into a seed set
    pub fn parse(primary: &str, background: &str, text: &str, accent: &str) -> Result<Self> {
        Ok(Self {
            primary: Color::parse(primary)?,
            background: Color::parse(background)?,
            text: Color::parse(text)?,
            accent: Color::parse(accent)?,
        })
    }

    /// Merge a partial update onto this seed set
    ///
    /// Every supplied field is validated before anything is returned, so an
    /// invalid field rejects the whole update.
    pub fn merge(&self, update: &SeedUpdate) -> Result<Self> {
        let pick = |value: &Option<String>, current: &Color| -> Result<Color> {
            match value {
                Some(hex) => Color::parse(hex),
                None => Ok(current.clone()),
            }
        };

        Ok(Self {
            primary: pick(&update.primary, &self.primary)?,
            background: pick(&update.background, &self.background)?,
            text: pick(&update.text, &self.text)?,
            accent: pick(&update.accent, &self.accent)?,
        })
    }

    /// Whether these are the built-in default colors
    pub fn is_default(&self) -> bool {
        *self == SeedColors::default()
    }
}

/// A partial seed update as supplied by color pickers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUpdate {
    /// New primary color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// New background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// New text color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl SeedUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary color
    pub fn primary(mut self, hex: impl Into<String>) -> Self {
        self.primary = Some(hex.into());
        self
    }

    /// Set the background color
    pub fn background(mut self, hex: impl Into<String>) -> Self {
        self.background = Some(hex.into());
        self
    }

    /// Set the text color
    pub fn text(mut self, hex: impl Into<String>) -> Self {
        self.text = Some(hex.into());
        self
    }

    /// Set the accent color
    pub fn accent(mut self, hex: impl Into<String>) -> Self {
        self.accent = Some(hex.into());
        self
    }

    /// Check if the update carries no fields
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.background.is_none()
            && self.text.is_none()
            && self.accent.is_none()
    }
}

impl From<&SeedColors> for SeedUpdate {
    fn from(seed: &SeedColors) -> Self {
        Self {
            primary: Some(seed.primary.to_string()),
            background: Some(seed.background.to_string()),
            text: Some(seed.text.to_string()),
            accent: Some(seed.accent.to_string()),
        }
    }
}

// =============================================================================
// Theme Variables
// =============================================================================

/// The closed set of style variables owned by the theme engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeVariable {
    /// `theme-primary`
    Primary,
    /// `theme-primary-hover`
    PrimaryHover,
    /// `theme-primary-light`
    PrimaryLight,
    /// `theme-background`
    Background,
    /// `theme-background-light`
    BackgroundLight,
    /// `theme-background-dark`
    BackgroundDark,
    /// `theme-text`
    Text,
    /// `theme-text-muted`
    TextMuted,
    /// `theme-text-light`
    TextLight,
    /// `theme-accent`
    Accent,
    /// `theme-accent-dark`
    AccentDark,
}

impl ThemeVariable {
    /// Every variable, in stable order
    pub const ALL: [ThemeVariable; 11] = [
        ThemeVariable::Primary,
        ThemeVariable::PrimaryHover,
        ThemeVariable::PrimaryLight,
        ThemeVariable::Background,
        ThemeVariable::BackgroundLight,
        ThemeVariable::BackgroundDark,
        ThemeVariable::Text,
        ThemeVariable::TextMuted,
        ThemeVariable::TextLight,
        ThemeVariable::Accent,
        ThemeVariable::AccentDark,
    ];

    /// Stable variable name presentational components bind to
    pub fn name(&self) -> &'static str {
        match self {
            ThemeVariable::Primary => "theme-primary",
            ThemeVariable::PrimaryHover => "theme-primary-hover",
            ThemeVariable::PrimaryLight => "theme-primary-light",
            ThemeVariable::Background => "theme-background",
            ThemeVariable::BackgroundLight => "theme-background-light",
            ThemeVariable::BackgroundDark => "theme-background-dark",
            ThemeVariable::Text => "theme-text",
            ThemeVariable::TextMuted => "theme-text-muted",
            ThemeVariable::TextLight => "theme-text-light",
            ThemeVariable::Accent => "theme-accent",
            ThemeVariable::AccentDark => "theme-accent-dark",
        }
    }

    /// CSS custom property name (`--theme-primary`)
    pub fn css_property(&self) -> String {
        format!("--{}", self.name())
    }
}

impl std::fmt::Display for ThemeVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ThemeVariable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim_start_matches("--");
        ThemeVariable::ALL
            .into_iter()
            .find(|var| var.name() == name)
            .ok_or_else(|| format!("Unknown theme variable: {}", s))
    }
}

// =============================================================================
// Derived Palette
// =============================================================================

/// Primary shades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryShades {
    /// Seed color
    pub base: Color,
    /// Hover state
    pub hover: Color,
    /// Light tint
    pub light: Color,
}

/// Background shades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundShades {
    /// Seed color
    pub base: Color,
    /// Slightly brighter surface
    pub light: Color,
    /// Slightly darker surface
    pub dark: Color,
}

/// Text shades; variants are `rgba()` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextShades {
    /// Seed color
    pub base: Color,
    /// Reduced-opacity text
    pub muted: String,
    /// Further reduced-opacity text
    pub light: String,
}

/// Accent shades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentShades {
    /// Seed color
    pub base: Color,
    /// Darkened accent
    pub dark: Color,
}

/// The full set of theme values derived from a seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPalette {
    /// Primary shades
    pub primary: PrimaryShades,
    /// Background shades
    pub background: BackgroundShades,
    /// Text shades
    pub text: TextShades,
    /// Accent shades
    pub accent: AccentShades,
}

impl DerivedPalette {
    /// Derive a palette with the default hover direction
    pub fn from_seed(seed: &SeedColors) -> Self {
        Self::derive(seed, HoverDirection::default())
    }

    /// Derive a palette from seed colors
    pub fn derive(seed: &SeedColors, hover: HoverDirection) -> Self {
        let primary = seed.primary.to_rgb();
        let background = seed.background.to_rgb();
        let text = seed.text.to_rgb();
        let accent = seed.accent.to_rgb();

        Self {
            primary: PrimaryShades {
                base: seed.primary.clone(),
                hover: primary.brighten(hover.sign() * PRIMARY_HOVER_DELTA).to_color(),
                light: primary.brighten(PRIMARY_LIGHT_DELTA).to_color(),
            },
            background: BackgroundShades {
                base: seed.background.clone(),
                light: background.brighten(BACKGROUND_DELTA).to_color(),
                dark: background.brighten(-BACKGROUND_DELTA).to_color(),
            },
            text: TextShades {
                base: seed.text.clone(),
                muted: text.rgba(TEXT_MUTED_OPACITY),
                light: text.rgba(TEXT_LIGHT_OPACITY),
            },
            accent: AccentShades {
                base: seed.accent.clone(),
                dark: accent.brighten(ACCENT_DARK_DELTA).to_color(),
            },
        }
    }

    /// Value of a single theme variable
    pub fn get(&self, variable: ThemeVariable) -> &str {
        match variable {
            ThemeVariable::Primary => self.primary.base.as_str(),
            ThemeVariable::PrimaryHover => self.primary.hover.as_str(),
            ThemeVariable::PrimaryLight => self.primary.light.as_str(),
            ThemeVariable::Background => self.background.base.as_str(),
            ThemeVariable::BackgroundLight => self.background.light.as_str(),
            ThemeVariable::BackgroundDark => self.background.dark.as_str(),
            ThemeVariable::Text => self.text.base.as_str(),
            ThemeVariable::TextMuted => &self.text.muted,
            ThemeVariable::TextLight => &self.text.light,
            ThemeVariable::Accent => self.accent.base.as_str(),
            ThemeVariable::AccentDark => self.accent.dark.as_str(),
        }
    }

    /// All variables with their values, in stable order
    pub fn entries(&self) -> impl Iterator<Item = (ThemeVariable, &str)> + '_ {
        ThemeVariable::ALL.into_iter().map(move |var| (var, self.get(var)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use proptest::prelude::*;

    #[test]
    fn test_default_seed_colors() {
        let seed = SeedColors::default();
        assert_eq!(seed.primary.as_str(), "#008062");
        assert_eq!(seed.background.as_str(), "#e6eeef");
        assert_eq!(seed.text.as_str(), "#1a1a1a");
        assert_eq!(seed.accent.as_str(), "#e0fff8");
        assert!(seed.is_default());
    }

    #[test]
    fn test_seed_serializes_as_four_hex_fields() {
        let json = serde_json::to_value(SeedColors::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "primary": "#008062",
                "background": "#e6eeef",
                "text": "#1a1a1a",
                "accent": "#e0fff8"
            })
        );
    }

    #[test]
    fn test_seed_deserialize_rejects_bad_or_missing_colors() {
        let bad = r##"{"primary":"teal","background":"#e6eeef","text":"#1a1a1a","accent":"#e0fff8"}"##;
        assert!(serde_json::from_str::<SeedColors>(bad).is_err());

        let missing = r##"{"primary":"#008062"}"##;
        assert!(serde_json::from_str::<SeedColors>(missing).is_err());
    }

    #[test]
    fn test_merge_keeps_missing_fields() {
        let seed = SeedColors::default();
        let merged = seed.merge(&SeedUpdate::new().primary("#123456")).unwrap();

        assert_eq!(merged.primary.as_str(), "#123456");
        assert_eq!(merged.background, seed.background);
        assert_eq!(merged.text, seed.text);
        assert_eq!(merged.accent, seed.accent);
        assert!(!merged.is_default());
    }

    #[test]
    fn test_merge_rejects_any_invalid_field() {
        let seed = SeedColors::default();
        let update = SeedUpdate::new().primary("#123456").accent("#zzzzzz");

        assert!(seed.merge(&update).is_err());
    }

    #[test]
    fn test_merge_normalizes_case() {
        let merged = SeedColors::default()
            .merge(&SeedUpdate::new().text("#ABCDEF"))
            .unwrap();
        assert_eq!(merged.text.as_str(), "#abcdef");
    }

    #[test]
    fn test_seed_update_from_seed_is_full() {
        let update = SeedUpdate::from(&SeedColors::default());
        assert_eq!(update.primary.as_deref(), Some("#008062"));
        assert_eq!(update.accent.as_deref(), Some("#e0fff8"));
        assert!(!update.is_empty());
        assert!(SeedUpdate::new().is_empty());
    }

    #[test]
    fn test_default_palette_values() {
        let palette = DerivedPalette::from_seed(&SeedColors::default());

        assert_eq!(palette.get(ThemeVariable::Primary), "#008062");
        assert_eq!(palette.get(ThemeVariable::PrimaryHover), "#006648");
        assert_eq!(palette.get(ThemeVariable::PrimaryLight), "#66e6c8");
        assert_eq!(palette.get(ThemeVariable::Background), "#e6eeef");
        assert_eq!(palette.get(ThemeVariable::BackgroundLight), "#f3fbfc");
        assert_eq!(palette.get(ThemeVariable::BackgroundDark), "#d9e1e2");
        assert_eq!(palette.get(ThemeVariable::Text), "#1a1a1a");
        assert_eq!(palette.get(ThemeVariable::TextMuted), "rgba(26, 26, 26, 0.7)");
        assert_eq!(palette.get(ThemeVariable::TextLight), "rgba(26, 26, 26, 0.5)");
        assert_eq!(palette.get(ThemeVariable::Accent), "#e0fff8");
        assert_eq!(palette.get(ThemeVariable::AccentDark), "#c6e5de");
    }

    #[test]
    fn test_hover_direction_lighten() {
        let palette = DerivedPalette::derive(&SeedColors::default(), HoverDirection::Lighten);
        assert_eq!(palette.primary.hover.as_str(), "#1a9a7c");
    }

    #[test]
    fn test_entries_cover_every_variable_once() {
        let palette = DerivedPalette::from_seed(&SeedColors::default());
        let names: Vec<&str> = palette.entries().map(|(var, _)| var.name()).collect();

        assert_eq!(names.len(), 11);
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 11);
        assert!(names.iter().all(|name| name.starts_with("theme-")));
    }

    #[test]
    fn test_theme_variable_names() {
        assert_eq!(ThemeVariable::PrimaryHover.name(), "theme-primary-hover");
        assert_eq!(ThemeVariable::TextMuted.css_property(), "--theme-text-muted");
        assert_eq!(ThemeVariable::AccentDark.to_string(), "theme-accent-dark");
        assert_eq!(
            "--theme-background-light".parse::<ThemeVariable>().unwrap(),
            ThemeVariable::BackgroundLight
        );
        assert!("theme-border".parse::<ThemeVariable>().is_err());
    }

    fn any_color() -> impl Strategy<Value = Color> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b).to_color())
    }

    fn any_seed() -> impl Strategy<Value = SeedColors> {
        (any_color(), any_color(), any_color(), any_color()).prop_map(
            |(primary, background, text, accent)| SeedColors { primary, background, text, accent },
        )
    }

    fn any_hover() -> impl Strategy<Value = HoverDirection> {
        prop_oneof![Just(HoverDirection::Darken), Just(HoverDirection::Lighten)]
    }

    proptest! {
        #[test]
        fn prop_derivation_is_deterministic(seed in any_seed(), hover in any_hover()) {
            let first = DerivedPalette::derive(&seed, hover);
            let second = DerivedPalette::derive(&seed.clone(), hover);
            prop_assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_base_variables_echo_the_seed(seed in any_seed(), hover in any_hover()) {
            let palette = DerivedPalette::derive(&seed, hover);
            prop_assert_eq!(palette.get(ThemeVariable::Primary), seed.primary.as_str());
            prop_assert_eq!(palette.get(ThemeVariable::Background), seed.background.as_str());
            prop_assert_eq!(palette.get(ThemeVariable::Text), seed.text.as_str());
            prop_assert_eq!(palette.get(ThemeVariable::Accent), seed.accent.as_str());
        }

        #[test]
        fn prop_empty_update_keeps_seed(seed in any_seed()) {
            prop_assert_eq!(seed.merge(&SeedUpdate::new()).unwrap(), seed);
        }

        #[test]
        fn prop_invalid_field_rejects_whole_update(seed in any_seed(), accent in any_color()) {
            let update = SeedUpdate::new().accent(accent.as_str()).text("#12345");
            prop_assert!(seed.merge(&update).is_err());
        }
    }
}
