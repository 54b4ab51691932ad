use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;

/// How long an update waits for another process to release the directory
const LOCK_TIMEOUT: Duration = Duration::from_secs(2);

/// Error type for key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize value for key '{key}': {source}")]
    SerializeError {
        key: String,
        source: serde_json::Error,
    },
    #[error("could not lock {path}: {source}")]
    LockError { path: PathBuf, source: io::Error },
    #[error("timed out waiting for {path}: another checklists process is writing")]
    LockTimeout { path: PathBuf },
}

/// A persistent string-to-string store.
///
/// Values are JSON documents; this layer does not look inside them.
pub trait KeyValueStore {
    /// Read the raw value for `key`, or `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Replace the value for `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Take the store's exclusive update lock. Hold it across a whole
    /// read-modify-write so other processes cannot interleave.
    fn lock(&self) -> Result<StoreLock, StoreError> {
        Ok(StoreLock::unshared())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn lock(&self) -> Result<StoreLock, StoreError> {
        (**self).lock()
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadError { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.key_path(key);
        atomic_write(&path, value.as_bytes())
            .map_err(|e| StoreError::WriteError { path, source: e })
    }

    fn lock(&self) -> Result<StoreLock, StoreError> {
        self.ensure_dir()?;
        StoreLock::acquire(&self.dir, LOCK_TIMEOUT)
    }
}

impl FileStore {
    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteError {
            path: self.dir.clone(),
            source: e,
        })
    }
}

/// Exclusive flock on `<dir>/.lock`, released on drop.
///
/// The TUI and any number of `ck` invocations may share a directory. The lock
/// file itself is never removed: a waiter may already hold it open, and
/// unlinking it would let a third process lock a fresh inode alongside.
pub struct StoreLock {
    _file: Option<File>,
}

impl StoreLock {
    /// A guard for stores no other process can see (e.g. `MemoryStore`)
    pub fn unshared() -> Self {
        StoreLock { _file: None }
    }

    /// Lock `<dir>/.lock`, waiting up to `timeout`
    pub fn acquire(dir: &Path, timeout: Duration) -> Result<Self, StoreError> {
        let path = dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StoreError::LockError {
                path: path.clone(),
                source: e,
            })?;

        let deadline = Instant::now() + timeout;
        while !try_flock(&file) {
            if Instant::now() >= deadline {
                tracing::warn!(path = %path.display(), "timed out waiting for store lock");
                return Err(StoreError::LockTimeout { path });
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        Ok(StoreLock { _file: Some(file) })
    }
}

#[cfg(unix)]
fn try_flock(file: &File) -> bool {
    use std::os::unix::io::AsRawFd;
    unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) == 0 }
}

#[cfg(not(unix))]
fn try_flock(_file: &File) -> bool {
    true
}

/// Write `content` to a temp file in the same directory, then rename over `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-memory store that counts writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed a value without counting it as a write
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_missing_key_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(store.get("lists").unwrap().is_none());
    }

    #[test]
    fn file_store_set_then_get() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested"));
        store.set("muted", "true").unwrap();
        assert_eq!(store.get("muted").unwrap().as_deref(), Some("true"));
        assert!(tmp.path().join("nested/muted.json").exists());
        // Plain writes never touch the lock
        assert!(!tmp.path().join("nested/.lock").exists());
    }

    #[test]
    fn file_store_overwrites() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.set("lists", "[]").unwrap();
        store.set("lists", "[[]]").unwrap();
        assert_eq!(store.get("lists").unwrap().as_deref(), Some("[[]]"));
    }

    #[cfg(unix)]
    #[test]
    fn held_lock_times_out_second_locker() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        let _held = store.lock().unwrap();
        let second = StoreLock::acquire(tmp.path(), Duration::from_millis(50));
        assert!(matches!(second, Err(StoreError::LockTimeout { .. })));
    }

    #[test]
    fn lock_file_outlives_the_guard() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("fresh"));
        drop(store.lock().unwrap());
        // Unlinking on drop would let two processes hold different inodes
        assert!(tmp.path().join("fresh/.lock").exists());
        assert!(store.lock().is_ok());
    }

    #[test]
    fn memory_store_lock_never_blocks() {
        let store = MemoryStore::new();
        let _a = store.lock().unwrap();
        let _b = store.lock().unwrap();
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryStore::new().with_entry("muted", "false");
        assert_eq!(store.writes(), 0);
        store.set("muted", "true").unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.raw("muted"), Some("true"));
    }
}
