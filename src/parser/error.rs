// ABOUTME: Error types for operator description parsing and validation
// ABOUTME: Defines specific error types for parser module operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to read operator description file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid operator description: {0}")]
    InvalidFormat(String),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Operator type must not be empty")]
    EmptyOpType,

    #[error("{outputs} output tensor(s) but {names} output variable name(s); each output tensor needs exactly one bound variable")]
    OutputBindingMismatch { outputs: usize, names: usize },

    #[error("Duplicate output tensor name: {name}")]
    DuplicateOutputTensor { name: String },

    #[error("Quantization parameters reference unknown output tensor: {name}")]
    UnknownQuantTensor { name: String },
}

pub type Result<T> = std::result::Result<T, ParserError>;
