use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::feedback::Sound;
use crate::feedback::testing::RecordingSink;
use crate::io::persistence::LISTS_KEY;
use crate::io::store::{KeyValueStore, MemoryStore, StoreError};
use crate::manager::ListManager;
use crate::model::{Checklist, Config, Item};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A store shared with the test so writes can be counted after handing it to the app
impl KeyValueStore for Rc<RefCell<MemoryStore>> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.borrow_mut().set(key, value)
    }
}

fn seeded_store(items: &[(&str, bool)]) -> MemoryStore {
    let list: Checklist = items
        .iter()
        .map(|(text, completed)| Item {
            text: text.to_string(),
            completed: *completed,
        })
        .collect::<Vec<_>>()
        .into();
    let json = serde_json::to_string(&vec![list]).unwrap();
    MemoryStore::new().with_entry(LISTS_KEY, &json)
}

/// Build an App whose single list holds `items`, recording every cue played.
pub fn app_with_items(items: &[(&str, bool)]) -> (App, Rc<RefCell<Vec<Sound>>>) {
    let sink = RecordingSink::default();
    let played = sink.played.clone();
    let store: Box<dyn KeyValueStore> = Box::new(seeded_store(items));
    let manager = ListManager::open(store, Box::new(sink)).unwrap();
    (App::new(manager, &Config::default()), played)
}

/// Build an App whose store the test can still inspect.
pub fn app_with_shared_store(items: &[(&str, bool)]) -> (App, Rc<RefCell<MemoryStore>>) {
    let shared = Rc::new(RefCell::new(seeded_store(items)));
    let store: Box<dyn KeyValueStore> = Box::new(shared.clone());
    let manager = ListManager::open(store, Box::new(RecordingSink::default())).unwrap();
    (App::new(manager, &Config::default()), shared)
}
