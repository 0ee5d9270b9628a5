// ABOUTME: Main library module for the opstub snippet generator
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod output;
pub mod parser;
pub mod snippet;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use output::{OutputDestination, OutputFormat, OutputHandler, OutputProcessor};
pub use parser::{OpDescription, OpDescriptionParser, OpValidator, QuantParams, TensorDescriptor};
pub use snippet::{SnippetContext, SnippetEngine};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
