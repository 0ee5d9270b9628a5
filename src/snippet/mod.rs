// ABOUTME: Snippet rendering module for the opstub generator
// ABOUTME: Provides stub comment rendering for unsupported operators

pub mod context;
pub mod engine;
pub mod error;
pub mod templates;

pub use context::{OutputBinding, SnippetContext};
pub use engine::SnippetEngine;
pub use error::{Result, SnippetError};
