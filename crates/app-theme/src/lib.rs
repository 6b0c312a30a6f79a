//! Theme engine for the copilot dashboard
//!
//! This crate derives a complete visual theme from four user-chosen seed
//! colors, persists the seed colors to device-local storage, and publishes
//! the derived values as named style variables.
//!
//! # Modules
//!
//! - [`color`] - Hex/RGB/HSL conversion and brightness/opacity adjustment
//! - [`palette`] - Seed colors, partial updates, and the derived palette
//! - [`presets`] - Built-in preset seed sets
//! - [`store`] - Theme store owning state, persistence, and application
//! - [`applier`] - Style surface and the applier writing to it
//! - [`persistence`] - Storage boundary for the seed record
//! - [`config`] - Store configuration
//!
//! # Style variables
//!
//! | Variable | Derived from |
//! |----------|--------------|
//! | `theme-primary` | primary seed |
//! | `theme-primary-hover` | primary ±10% brightness |
//! | `theme-primary-light` | primary +40% brightness |
//! | `theme-background` | background seed |
//! | `theme-background-light` | background +5% brightness |
//! | `theme-background-dark` | background -5% brightness |
//! | `theme-text` | text seed |
//! | `theme-text-muted` | text at 70% opacity |
//! | `theme-text-light` | text at 50% opacity |
//! | `theme-accent` | accent seed |
//! | `theme-accent-dark` | accent -10% brightness |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod applier;
pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod persistence;
pub mod presets;
pub mod store;

pub use applier::{SharedStyleSurface, StyleSurface, ThemeApplier};
pub use color::{
    adjust_brightness, adjust_opacity, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex, Color, Hsl,
    Rgb,
};
pub use config::{HoverDirection, ResetStrategy, ThemeConfig, DEFAULT_STORAGE_KEY};
pub use error::{Result, ThemeError};
pub use palette::{DerivedPalette, SeedColors, SeedUpdate, ThemeVariable};
pub use persistence::ThemePersistence;
pub use presets::ThemePreset;
pub use store::{ThemeOutcome, ThemeState, ThemeStore};
