//! Theme store: owns the theme state and drives persistence and application
//!
//! Every change funnels through [`ThemeStore`]: it validates and merges seed
//! updates, persists the full seed set, derives the palette and hands it to
//! the [`ThemeApplier`]. When a call returns, storage and the style surface
//! both reflect the new state.
//!
//! # Example
//!
//! ```rust
//! use app_theme::{
//!     SeedUpdate, SharedStyleSurface, StyleSurface, ThemeApplier, ThemeConfig, ThemeStore,
//! };
//! use std::sync::Arc;
//! use storage::{DeviceStore, KvStore};
//!
//! let kv = Arc::new(KvStore::in_memory().unwrap());
//! let surface = SharedStyleSurface::new();
//! let mut store = ThemeStore::initialize(
//!     DeviceStore::new(kv),
//!     ThemeApplier::new(surface.clone()),
//!     ThemeConfig::default(),
//! );
//!
//! let outcome = store.update(&SeedUpdate::new().primary("#123456")).unwrap();
//! assert!(outcome.state.is_customized);
//! assert_eq!(surface.property("theme-primary").as_deref(), Some("#123456"));
//! ```

use crate::applier::{StyleSurface, ThemeApplier};
use crate::config::{ResetStrategy, ThemeConfig};
use crate::error::{Result, ThemeError};
use crate::palette::{DerivedPalette, SeedColors, SeedUpdate};
use crate::persistence::{self, ThemePersistence};
use crate::presets::ThemePreset;
use serde::{Deserialize, Serialize};

/// Current theme state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    /// Active seed colors
    pub seed: SeedColors,
    /// Whether the seed differs from the built-in default
    pub is_customized: bool,
}

impl ThemeState {
    /// Build the state for a seed set
    pub fn from_seed(seed: SeedColors) -> Self {
        let is_customized = !seed.is_default();
        Self { seed, is_customized }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::from_seed(SeedColors::default())
    }
}

/// Result of a state-changing store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOutcome {
    /// The new theme state, already applied
    pub state: ThemeState,
    /// Set when storage could not be updated; the change only lasts for this session
    pub warning: Option<ThemeError>,
}

impl ThemeOutcome {
    /// Whether the change was persisted
    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }
}

/// Owner of the theme state
#[derive(Debug)]
pub struct ThemeStore<P, S> {
    persistence: P,
    applier: ThemeApplier<S>,
    config: ThemeConfig,
    state: ThemeState,
}

impl<P, S> ThemeStore<P, S>
where
    P: ThemePersistence,
    S: StyleSurface,
{
    /// Load the persisted theme (or the default) and apply it
    ///
    /// A missing or corrupt record falls back to the default theme. Nothing is
    /// written back, so a corrupt record stays in place until the user changes
    /// or resets the theme.
    pub fn initialize(persistence: P, applier: ThemeApplier<S>, config: ThemeConfig) -> Self {
        let seed = match persistence::load_seed(&persistence, &config.storage_key) {
            Ok(Some(seed)) => {
                tracing::info!(key = %config.storage_key, "restored persisted theme");
                seed
            }
            Ok(None) => SeedColors::default(),
            Err(e) => {
                tracing::warn!(key = %config.storage_key, error = %e, "ignoring persisted theme, using default");
                SeedColors::default()
            }
        };

        let store = Self { persistence, applier, config, state: ThemeState::from_seed(seed) };
        store.applier.apply(&store.palette());
        store
    }

    /// Snapshot of the current state
    pub fn current(&self) -> &ThemeState {
        &self.state
    }

    /// Palette derived from the current seed
    pub fn palette(&self) -> DerivedPalette {
        DerivedPalette::derive(&self.state.seed, self.config.hover_direction)
    }

    /// Store configuration
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The applier writing to the style surface
    pub fn applier(&self) -> &ThemeApplier<S> {
        &self.applier
    }

    /// The persistence collaborator
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Merge a partial update onto the current seed colors
    ///
    /// Fails with [`ThemeError::InvalidColorFormat`] without touching any state
    /// if a supplied color is malformed.
    pub fn update(&mut self, partial: &SeedUpdate) -> Result<ThemeOutcome> {
        let seed = self.state.seed.merge(partial).map_err(|e| {
            tracing::warn!(error = %e, "rejected theme update");
            e
        })?;
        Ok(self.commit(seed))
    }

    /// Serialize the current seed colors in the persisted record shape
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string(&self.state.seed)
            .map_err(|e| ThemeError::PersistenceWriteFailed(e.to_string()))
    }

    /// Apply seed colors from JSON produced by [`export_json`](Self::export_json)
    ///
    /// Missing fields keep their current value, as with [`update`](Self::update).
    /// Input that is not a seed object fails with
    /// [`ThemeError::InvalidColorFormat`] and changes nothing.
    pub fn import_json(&mut self, json: &str) -> Result<ThemeOutcome> {
        let partial: SeedUpdate = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected theme import");
            ThemeError::invalid_color(json)
        })?;
        self.update(&partial)
    }

    /// Switch to a built-in preset
    pub fn apply_preset(&mut self, preset: ThemePreset) -> ThemeOutcome {
        tracing::info!(preset = preset.id(), "applying theme preset");
        self.commit(preset.seed())
    }

    /// Restore the built-in default theme and delete the persisted record
    pub fn reset_to_default(&mut self) -> ThemeOutcome {
        let warning = self.persistence.delete(&self.config.storage_key).err();
        if let Some(e) = &warning {
            tracing::warn!(key = %self.config.storage_key, error = %e, "failed to delete persisted theme");
        }

        self.state = ThemeState::default();
        match self.config.reset_strategy {
            ResetStrategy::ApplyDefaults => self.applier.apply(&self.palette()),
            ResetStrategy::ClearOverrides => self.applier.clear(),
        }
        tracing::info!("theme reset to default");

        ThemeOutcome { state: self.state.clone(), warning }
    }

    fn commit(&mut self, seed: SeedColors) -> ThemeOutcome {
        let warning = persistence::save_seed(&self.persistence, &self.config.storage_key, &seed).err();
        if let Some(e) = &warning {
            tracing::warn!(key = %self.config.storage_key, error = %e, "theme applied for this session only");
        }

        self.state = ThemeState::from_seed(seed);
        self.applier.apply(&self.palette());
        tracing::debug!(customized = self.state.is_customized, "theme updated");

        ThemeOutcome { state: self.state.clone(), warning }
    }
}
