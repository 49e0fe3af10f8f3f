//! File-backed key-value store.
//!
//! The storefront, the dashboard and the CLI open the same directory from
//! separate processes, so every write holds an exclusive lock on
//! `<data_dir>/store.lock` for its whole read-modify-write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fd_lock::RwLock;
use tempfile::NamedTempFile;

use super::{KeyValueStore, StoreError, Update};

const LOCK_FILE: &str = "store.lock";

/// Stores each key as `<data_dir>/<escaped key>.json`.
///
/// Values are written to a uniquely named temporary file in the same
/// directory and renamed over the target, so readers never observe a
/// half-written value and readers take no lock.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", escape_key(key)))
    }

    /// A fresh handle on the lock file. Each call opens its own descriptor,
    /// so threads of one process exclude each other as well.
    fn lock_file(&self) -> io::Result<RwLock<File>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.root.join(LOCK_FILE))?;
        Ok(RwLock::new(file))
    }

    fn write_value(&self, target: &Path, value: &str) -> Result<(), StoreError> {
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Map a key to a file name: ASCII alphanumerics, `-` and `_` are kept and
/// every other byte is written as `%xx`, so distinct keys never share a file.
fn escape_key(key: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => out.push(char::from(byte)),
            other => {
                let _ = write!(out, "%{other:02x}");
            }
        }
    }
    out
}

fn read_value(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        read_value(&self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut lock = self.lock_file()?;
        let _guard = lock.write()?;
        self.write_value(&self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut lock = self.lock_file()?;
        let _guard = lock.write()?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn update(&self, key: &str, apply: &mut Update<'_>) -> Result<(), StoreError> {
        let target = self.path_for(key);
        let mut lock = self.lock_file()?;
        let _guard = lock.write()?;

        match apply(read_value(&target)?) {
            Some(next) => self.write_value(&target, &next),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_key() {
        assert_eq!(escape_key("farah-orders"), "farah-orders");
        assert_eq!(
            escape_key("visitor.abc.farah-cart"),
            "visitor%2eabc%2efarah-cart"
        );
        assert_eq!(escape_key("../etc"), "%2e%2e%2fetc");
        assert_ne!(escape_key("a.b"), escape_key("a_b"));
        assert_ne!(escape_key("a:b"), escape_key("a_b"));
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("farah-orders").unwrap(), None);
        store.set("farah-orders", "[]").unwrap();
        assert_eq!(store.get("farah-orders").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("farah-orders.json").exists());

        store.remove("farah-orders").unwrap();
        assert_eq!(store.get("farah-orders").unwrap(), None);
        store.remove("farah-orders").unwrap();
    }

    #[test]
    fn test_keys_with_dots_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("a.b", "1").unwrap();
        store.set("a_b", "2").unwrap();
        assert_eq!(store.get("a.b").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("a_b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_reopen_sees_previous_writes() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path())
            .unwrap()
            .set("farah-lang", "\"ar\"")
            .unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("farah-lang").unwrap().as_deref(),
            Some("\"ar\"")
        );
    }

    #[test]
    fn test_concurrent_updates_from_separate_handles() {
        let dir = tempfile::tempdir().unwrap();
        let first = FileStore::open(dir.path()).unwrap();
        let second = FileStore::open(dir.path()).unwrap();

        let bump = |store: &FileStore| {
            for _ in 0..100 {
                store
                    .update("counter", &mut |current| {
                        let n: u32 = current.as_deref().map_or(0, |v| v.parse().unwrap());
                        Some((n + 1).to_string())
                    })
                    .unwrap();
            }
        };
        std::thread::scope(|s| {
            s.spawn(|| bump(&first));
            s.spawn(|| bump(&second));
        });

        assert_eq!(first.get("counter").unwrap().as_deref(), Some("200"));
    }
}
