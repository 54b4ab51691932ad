pub mod config_io;
pub mod logging;
pub mod persistence;
pub mod store;
pub mod watcher;
