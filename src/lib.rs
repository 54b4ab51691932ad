pub mod cli;
pub mod feedback;
pub mod io;
pub mod keepalive;
pub mod manager;
pub mod model;
pub mod ops;
pub mod tui;
pub mod view;
