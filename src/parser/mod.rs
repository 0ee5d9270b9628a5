// ABOUTME: Parser module for operator descriptions
// ABOUTME: Provides loading and validation of missing-operator input files

pub mod error;
pub mod op;
pub mod validation;

pub use error::{ParserError, Result, ValidationError};
pub use op::{OpDescription, OpDescriptionParser, QuantParams, QuantValue, TensorDescriptor};
pub use validation::{OpValidator, ValidationReport};
