//! Copilot dashboard theming
//!
//! Wires the theme engine to the device-local key-value store. Call
//! [`open_theme`] once at startup, before themed components paint; it
//! restores any saved theme and publishes it to the returned style surface.
//!
//! ```rust,no_run
//! use copilot_dashboard::{open_theme, KvConfig, SeedUpdate, ThemeConfig};
//!
//! let (mut store, surface) = open_theme(KvConfig::new("copilot_kv.db"), ThemeConfig::default())?;
//! store.update(&SeedUpdate::new().accent("#ffb703")).unwrap();
//! println!("{}", surface.to_css());
//! # Ok::<(), copilot_dashboard::KvError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

pub use app_theme::{
    DerivedPalette, SeedColors, SeedUpdate, SharedStyleSurface, StyleSurface, ThemeApplier,
    ThemeConfig, ThemeError, ThemeOutcome, ThemePreset, ThemeState, ThemeStore, ThemeVariable,
};
pub use storage::{DeviceStore, KvConfig, KvError, KvStore};

/// The theme store as used by the dashboard
pub type DashboardThemeStore = ThemeStore<DeviceStore, SharedStyleSurface>;

/// Open device storage and initialize the theme store on it
///
/// Only failing to open the store itself is an error; a missing or corrupt
/// theme record falls back to the default theme.
pub fn open_theme(
    kv_config: KvConfig,
    theme_config: ThemeConfig,
) -> Result<(DashboardThemeStore, SharedStyleSurface), KvError> {
    let kv = Arc::new(KvStore::new(kv_config)?);
    Ok(theme_on(kv, theme_config))
}

/// Initialize the theme store on an already open key-value store
pub fn theme_on(
    kv: Arc<KvStore>,
    theme_config: ThemeConfig,
) -> (DashboardThemeStore, SharedStyleSurface) {
    let surface = SharedStyleSurface::new();
    let store = ThemeStore::initialize(
        DeviceStore::new(kv),
        ThemeApplier::new(surface.clone()),
        theme_config,
    );
    tracing::info!(customized = store.current().is_customized, "theme ready");
    (store, surface)
}
