use std::path::Path;
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::io::persistence::{LISTS_KEY, MUTED_KEY};

/// Watches the data directory for writes made by other processes (e.g. `ck add`).
///
/// Our own writes are reported too; `ListManager::reload` ignores those because
/// the stored state already matches memory.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<&'static str>,
}

impl StoreWatcher {
    /// Start watching `data_dir`, which must exist. Call `poll()` each tick.
    pub fn start(data_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let Ok(event) = result else {
                    return;
                };
                if !matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    return;
                }
                for key in event.paths.iter().filter_map(|p| store_key(p)) {
                    let _ = tx.send(key);
                }
            },
            Config::default(),
        )?;

        watcher.watch(data_dir, RecursiveMode::NonRecursive)?;
        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain pending notifications without blocking. Returns each changed key once.
    pub fn poll(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        while let Ok(key) = self.rx.try_recv() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Map a file in the data directory to the store key it backs.
/// Lock files, temp files and config.toml map to nothing.
fn store_key(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".json")?;
    [LISTS_KEY, MUTED_KEY].into_iter().find(|key| *key == stem)
}
