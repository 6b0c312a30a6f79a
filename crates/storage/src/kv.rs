//! Key-value store for device-local settings
//!
//! This module provides a small byte-oriented key-value store on top of sled
//! with scoped keys. Values are opaque bytes; callers encode and validate
//! their own records, so a corrupt record is never confused with a missing one.

use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None disables the background flusher)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "copilot_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
pub struct KvStore {
    db: Arc<Db>,
    separator: &'static str,
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore")
            .field("keys", &self.db.len())
            .field("separator", &self.separator)
            .finish()
    }
}

impl KvStore {
    /// Create a new key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms);

        let db = db_config.open()?;
        tracing::debug!(path = %config.path, recovered = db.was_recovered(), "opened kv store");

        Ok(Self { db: Arc::new(db), separator: ":" })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db), separator: ":" })
    }

    /// Join scopes into a single key (e.g., ["device", "theme"] -> "device:theme")
    pub fn scoped_key(&self, scopes: &[&str]) -> Result<String> {
        if scopes.is_empty() || scopes.iter().any(|s| s.is_empty()) {
            return Err(KvError::InvalidKey(scopes.join(self.separator)));
        }
        Ok(scopes.join(self.separator))
    }

    /// Get the raw bytes stored under a key without decoding them
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.db.get(key.as_bytes())?.map(|bytes| bytes.to_vec()))
    }

    /// Store raw bytes under a key, overwriting any previous value
    pub fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

/// Scoped key-value store for device-level settings
///
/// Every key is stored under the `device:` scope. Writes and removals are
/// flushed before returning so a caller can rely on them surviving a restart.
#[derive(Debug, Clone)]
pub struct DeviceStore {
    kv: Arc<KvStore>,
}

impl DeviceStore {
    /// Scope prefix for device-level keys
    pub const SCOPE: &'static str = "device";

    /// Create a new device store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Full key under which a device-level value is stored
    pub fn key(&self, key: &str) -> Result<String> {
        self.kv.scoped_key(&[Self::SCOPE, key])
    }

    /// Get the raw bytes of a device-level value
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.kv.get_raw(&self.key(key)?)
    }

    /// Store raw bytes as a device-level value
    pub fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.kv.set_raw(&self.key(key)?, bytes)?;
        self.kv.flush()
    }

    /// Remove a device-level value
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self.kv.remove(&self.key(key)?)?;
        self.kv.flush()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_at(path: &str) -> Arc<KvStore> {
        Arc::new(KvStore::new(KvConfig::new(path).flush_every_ms(None)).unwrap())
    }

    #[test]
    fn test_missing_key() {
        let kv = KvStore::in_memory().unwrap();
        assert_eq!(kv.get_raw("nonexistent").unwrap(), None);
        assert!(!kv.contains("nonexistent").unwrap());
    }

    #[test]
    fn test_bytes_are_stored_verbatim() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_raw("broken", b"{not json").unwrap();
        assert_eq!(kv.get_raw("broken").unwrap(), Some(b"{not json".to_vec()));

        kv.set_raw("broken", &[0xff, 0xfe]).unwrap();
        assert_eq!(kv.get_raw("broken").unwrap(), Some(vec![0xff, 0xfe]));
    }

    #[test]
    fn test_remove() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_raw("key", b"value").unwrap();
        assert!(kv.contains("key").unwrap());

        assert!(kv.remove("key").unwrap());
        assert!(!kv.contains("key").unwrap());
        assert!(!kv.remove("key").unwrap());
    }

    #[test]
    fn test_scoped_key_rejects_empty_segments() {
        let kv = KvStore::in_memory().unwrap();

        assert!(matches!(kv.scoped_key(&[]), Err(KvError::InvalidKey(_))));
        assert!(matches!(kv.scoped_key(&["device", ""]), Err(KvError::InvalidKey(_))));
        assert_eq!(kv.scoped_key(&["device", "theme"]).unwrap(), "device:theme");
    }

    #[test]
    fn test_device_store_scopes_keys() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let device = DeviceStore::new(kv.clone());

        device.set_raw("theme", br##"{"primary":"#008062"}"##).unwrap();
        assert_eq!(device.key("theme").unwrap(), "device:theme");
        assert!(kv.contains("device:theme").unwrap());
        assert!(!kv.contains("theme").unwrap());

        assert!(device.remove("theme").unwrap());
        assert!(!device.remove("theme").unwrap());
        assert_eq!(device.get_raw("theme").unwrap(), None);
        assert!(matches!(device.get_raw(""), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_device_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv").to_string_lossy().into_owned();

        {
            let device = DeviceStore::new(open_at(&path));
            device.set_raw("density", b"compact").unwrap();
            device.set_raw("stale", b"x").unwrap();
            device.remove("stale").unwrap();
        }

        let device = DeviceStore::new(open_at(&path));
        assert_eq!(device.get_raw("density").unwrap(), Some(b"compact".to_vec()));
        assert_eq!(device.get_raw("stale").unwrap(), None);
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(32 * 1024 * 1024)
            .use_compression(false)
            .flush_every_ms(Some(1000));

        assert_eq!(config.path, "test.db");
        assert_eq!(config.cache_capacity, 32 * 1024 * 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, Some(1000));
    }
}
