//! Fixed-tick grid snake engine.
//!
//! [`game::Engine`] owns one game's state and advances it a tick at a time,
//! [`input::InputBuffer`] holds the single buffered direction with the
//! anti-reversal rule, and [`loop_driver::LoopDriver`] schedules ticks on a
//! fixed cadence. The terminal modules are a thin front end over these.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod loop_driver;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
