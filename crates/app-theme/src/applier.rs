//! Pushes derived palettes onto the global style surface
//!
//! The style surface is the registry of named style variables that
//! presentational components read (the document root's CSS custom properties
//! in a browser host). [`ThemeApplier`] is the only writer of the theme
//! variables; everything else reads.

use crate::palette::{DerivedPalette, ThemeVariable};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A registry of named style variables
pub trait StyleSurface {
    /// Set a variable, replacing any previous value
    fn set_property(&self, name: &str, value: &str);

    /// Remove a variable if present
    fn remove_property(&self, name: &str);

    /// Current value of a variable
    fn property(&self, name: &str) -> Option<String>;
}

/// In-process style surface shared between the applier and its readers
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedStyleSurface {
    properties: Arc<RwLock<BTreeMap<String, String>>>,
}

impl SharedStyleSurface {
    /// Create an empty style surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every variable currently set
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.properties.read().clone()
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    /// Check if no variables are set
    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }

    /// Render the surface as a `:root` block of CSS custom properties
    pub fn to_css(&self) -> String {
        let properties = self.properties.read();
        let mut css = String::from(":root {\n");
        for (name, value) in properties.iter() {
            css.push_str(&format!("  --{}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

impl StyleSurface for SharedStyleSurface {
    fn set_property(&self, name: &str, value: &str) {
        self.properties
            .write()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_property(&self, name: &str) {
        self.properties.write().remove(name);
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.read().get(name).cloned()
    }
}

/// Writes theme variables to a style surface
#[derive(Debug, Clone)]
pub struct ThemeApplier<S> {
    surface: S,
}

impl<S: StyleSurface> ThemeApplier<S> {
    /// Create an applier for a style surface
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Write every palette variable to the surface
    ///
    /// All owned variables are overwritten on each call, so applying the same
    /// palette repeatedly leaves the surface unchanged.
    pub fn apply(&self, palette: &DerivedPalette) {
        for (variable, value) in palette.entries() {
            self.surface.set_property(variable.name(), value);
        }
        tracing::debug!(primary = %palette.primary.base, "applied theme palette");
    }

    /// Remove every theme variable from the surface
    pub fn clear(&self) {
        for variable in ThemeVariable::ALL {
            self.surface.remove_property(variable.name());
        }
        tracing::debug!("cleared theme variables");
    }

    /// The underlying style surface
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
