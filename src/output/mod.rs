// ABOUTME: Output handling module for formatted snippet delivery
// ABOUTME: Provides formatting and writing of rendered stubs

pub mod error;
pub mod formatter;
pub mod writer;

pub use error::{OutputError, Result};
pub use formatter::{OutputFormat, OutputProcessor};
pub use writer::{FileWriter, OutputDestination, OutputHandler, OutputWriter, StdoutWriter};
