//! Persistence of seed colors
//!
//! The stored record is the JSON encoding of [`SeedColors`]: exactly the four
//! hex fields. Its schema version is part of the storage key.

use crate::error::{Result, ThemeError};
use crate::palette::SeedColors;
use storage::{DeviceStore, KvError};

/// Durable key-value storage for the theme record
#[cfg_attr(test, mockall::automock)]
pub trait ThemePersistence {
    /// Read the raw record stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous record
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the record under `key`; deleting a missing key is not an error
    fn delete(&self, key: &str) -> Result<()>;
}

impl ThemePersistence for DeviceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let bytes = self.get_raw(key).map_err(read_error)?;
        bytes
            .map(|bytes| {
                String::from_utf8(bytes)
                    .map_err(|e| ThemeError::PersistenceReadCorrupt(e.to_string()))
            })
            .transpose()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.set_raw(key, value.as_bytes()).map_err(write_error)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.remove(key).map(|_| ()).map_err(write_error)
    }
}

fn read_error(err: KvError) -> ThemeError {
    ThemeError::PersistenceReadCorrupt(err.to_string())
}

fn write_error(err: KvError) -> ThemeError {
    ThemeError::PersistenceWriteFailed(err.to_string())
}

/// Load the seed record, if one exists
pub fn load_seed<P>(persistence: &P, key: &str) -> Result<Option<SeedColors>>
where
    P: ThemePersistence + ?Sized,
{
    match persistence.read(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| ThemeError::PersistenceReadCorrupt(e.to_string())),
        None => Ok(None),
    }
}

/// Store the seed record
pub fn save_seed<P>(persistence: &P, key: &str, seed: &SeedColors) -> Result<()>
where
    P: ThemePersistence + ?Sized,
{
    let json =
        serde_json::to_string(seed).map_err(|e| ThemeError::PersistenceWriteFailed(e.to_string()))?;
    persistence.write(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::KvStore;

    fn device_store() -> (Arc<KvStore>, DeviceStore) {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        (kv.clone(), DeviceStore::new(kv))
    }

    #[test]
    fn test_save_and_load_seed() {
        let (kv, device) = device_store();
        let seed = SeedColors::parse("#123456", "#ffffff", "#000000", "#abcdef").unwrap();

        save_seed(&device, "theme-seed:v1", &seed).unwrap();
        assert!(kv.contains("device:theme-seed:v1").unwrap());
        assert_eq!(load_seed(&device, "theme-seed:v1").unwrap(), Some(seed));
    }

    #[test]
    fn test_saved_record_is_plain_seed_json() {
        let (_kv, device) = device_store();
        save_seed(&device, "theme-seed:v1", &SeedColors::default()).unwrap();

        let raw = device.read("theme-seed:v1").unwrap().unwrap();
        assert_eq!(
            raw,
            r##"{"primary":"#008062","background":"#e6eeef","text":"#1a1a1a","accent":"#e0fff8"}"##
        );
    }

    #[test]
    fn test_load_missing_seed() {
        let (_kv, device) = device_store();
        assert_eq!(load_seed(&device, "theme-seed:v1").unwrap(), None);
    }

    #[test]
    fn test_load_corrupt_seed() {
        let (_kv, device) = device_store();
        device.write("theme-seed:v1", "{not json").unwrap();

        assert!(matches!(
            load_seed(&device, "theme-seed:v1"),
            Err(ThemeError::PersistenceReadCorrupt(_))
        ));
    }

    #[test]
    fn test_load_non_utf8_seed() {
        let (_kv, device) = device_store();
        device.set_raw("theme-seed:v1", &[0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            device.read("theme-seed:v1"),
            Err(ThemeError::PersistenceReadCorrupt(_))
        ));
    }

    #[test]
    fn test_delete_removes_key() {
        let (kv, device) = device_store();
        save_seed(&device, "theme-seed:v1", &SeedColors::default()).unwrap();

        device.delete("theme-seed:v1").unwrap();
        assert!(!kv.contains("device:theme-seed:v1").unwrap());

        // deleting again is fine
        device.delete("theme-seed:v1").unwrap();
    }
}
