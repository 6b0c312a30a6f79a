//! Theme engine configuration

use serde::{Deserialize, Serialize};

/// Default device-scoped key for the persisted seed colors.
///
/// The schema version lives in the key; the stored value keeps the v1 shape.
pub const DEFAULT_STORAGE_KEY: &str = "theme-seed:v1";

/// Which way the primary hover shade moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverDirection {
    /// Hover shade is darker than the primary color
    #[default]
    Darken,
    /// Hover shade is lighter than the primary color
    Lighten,
}

impl HoverDirection {
    /// Sign applied to the hover brightness delta
    pub fn sign(&self) -> i32 {
        match self {
            HoverDirection::Darken => -1,
            HoverDirection::Lighten => 1,
        }
    }
}

/// How `reset_to_default` restores the style surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResetStrategy {
    /// Write the default palette over every theme variable
    #[default]
    ApplyDefaults,
    /// Remove every theme variable so fallback styling applies
    ClearOverrides,
}

/// Theme store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Device-scoped storage key for the seed record
    pub storage_key: String,
    /// Direction of the primary hover shade
    pub hover_direction: HoverDirection,
    /// Reset behavior for the style surface
    pub reset_strategy: ResetStrategy,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            hover_direction: HoverDirection::default(),
            reset_strategy: ResetStrategy::default(),
        }
    }
}

impl ThemeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the hover direction
    pub fn hover_direction(mut self, direction: HoverDirection) -> Self {
        self.hover_direction = direction;
        self
    }

    /// Set the reset strategy
    pub fn reset_strategy(mut self, strategy: ResetStrategy) -> Self {
        self.reset_strategy = strategy;
        self
    }
}
