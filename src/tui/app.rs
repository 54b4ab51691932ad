use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::feedback::sink_from_config;
use crate::io::config_io::read_config;
use crate::io::logging;
use crate::io::store::{FileStore, KeyValueStore, StoreError};
use crate::io::watcher::StoreWatcher;
use crate::keepalive::{KeepAlive, NoopHost};
use crate::manager::{ListManager, Outcome};
use crate::model::Config;
use crate::view::PopupView;

use super::input;
use super::render;
use super::theme::Theme;

/// Smallest terminal that fits every region: header, input, three list rows,
/// controls and status.
pub const MIN_WIDTH: u16 = 32;
pub const MIN_HEIGHT: u16 = 7;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal is {width}x{height}; checklists needs at least {}x{}", MIN_WIDTH, MIN_HEIGHT)]
    TooSmall { width: u16, height: u16 },
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add field
    Input,
    /// Waiting for y/n on a destructive action
    Confirm,
}

/// Destructive action awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteAll,
    DeleteCompleted,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub prompt: String,
}

/// Main application state
pub struct App {
    pub manager: ListManager,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    /// Highlighted row in the current list
    pub item_cursor: usize,
    /// Contents of the add field
    pub input: String,
    pub confirm_state: Option<ConfirmState>,
    /// One-shot message shown in the status row until the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(manager: ListManager, config: &Config) -> Self {
        App {
            manager,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            item_cursor: 0,
            input: String::new(),
            confirm_state: None,
            status_message: None,
        }
    }

    pub fn view(&self) -> PopupView {
        self.manager.view()
    }

    /// Keep the row cursor inside the current list
    pub fn clamp_item_cursor(&mut self) {
        let len = self.manager.collection().current().len();
        self.item_cursor = self.item_cursor.min(len.saturating_sub(1));
    }

    /// Surface a manager result in the status row
    pub fn report(&mut self, result: Result<Outcome, StoreError>) {
        match result {
            Ok(Outcome::Applied) => {}
            Ok(Outcome::Skipped(reason)) => self.status_message = Some(reason.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "could not save checklists");
                self.status_message = Some(format!("save failed: {e}"));
            }
        }
        self.clamp_item_cursor();
    }
}

/// Refuse to start in a terminal too small for the full popup
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), TuiError> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(TuiError::TooSmall { width, height });
    }
    Ok(())
}

/// Run the TUI application against `data_dir`
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(data_dir)?;
    let _log_guard = logging::init_file(data_dir)?;

    let (width, height) = crossterm::terminal::size()?;
    check_terminal_size(width, height)?;

    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(data_dir));
    let sink = sink_from_config(&config.sound, data_dir);
    let manager = ListManager::open(store, sink)?;
    let mut app = App::new(manager, &config);

    let watcher = match StoreWatcher::start(data_dir) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "store watcher unavailable; outside edits need a restart");
            None
        }
    };
    let mut keep_alive = KeepAlive::new(
        Box::new(NoopHost),
        config.keep_alive.interval_secs,
        Instant::now(),
    );

    tracing::info!(dir = %data_dir.display(), "opening checklists");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if anything panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    app.manager.startup();
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref(), &mut keep_alive);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(keep_alive_sent = keep_alive.sent(), "closing checklists");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
    keep_alive: &mut KeepAlive,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if let Some(watcher) = watcher
            && !watcher.poll().is_empty()
        {
            match app.manager.reload() {
                Ok(true) => {
                    app.clamp_item_cursor();
                    app.status_message = Some("reloaded".to_string());
                }
                Ok(false) => {}
                Err(e) => tracing::warn!(error = %e, "reload failed"),
            }
        }

        keep_alive.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
