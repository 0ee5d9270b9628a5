// ABOUTME: CLI module for the opstub application
// ABOUTME: Provides argument parsing, configuration, and command dispatch

pub mod app;
pub mod args;
pub mod commands;
pub mod config;

pub use app::App;
pub use args::{Args, Commands};
pub use config::Config;
