// ABOUTME: Error types for snippet rendering operations
// ABOUTME: Defines specific error types for context building and template rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("{outputs} output tensor(s) but {names} output variable name(s); refusing to zip-truncate")]
    BindingMismatch { outputs: usize, names: usize },

    #[error("Template registration error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnippetError>;
