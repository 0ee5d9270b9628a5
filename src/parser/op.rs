// ABOUTME: Core operator description data structures and parsing functionality
// ABOUTME: Defines the OpDescription struct and related tensor/quantization types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ParserError, Result};

/// A tensor referenced by an operator, named with its element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorDescriptor {
    pub name: String,
    pub dtype: String,
}

/// One quantization parameter: a numeric value paired with the C type it is
/// stored as in the generated code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantValue {
    pub value: serde_json::Value,
    pub type_str: String,
}

/// Per-tensor quantization parameters describing how a quantized tensor's
/// real values map to stored integer values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantParams {
    pub zero_point: QuantValue,
    pub scale: QuantValue,
    pub is_per_tensor: bool,
}

/// Description of an operator the generator has no implementation for.
///
/// `output_tensors` and `out_var_names` are paired positionally; validation
/// rejects descriptions where the lengths differ. `quant_params` is keyed by
/// output tensor name, and absence of an entry means the tensor is not
/// quantized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpDescription {
    pub op_type: String,
    #[serde(default)]
    pub input_tensors: Vec<TensorDescriptor>,
    #[serde(default)]
    pub output_tensors: Vec<TensorDescriptor>,
    #[serde(default)]
    pub out_var_names: Vec<String>,
    #[serde(default)]
    pub quant_params: IndexMap<String, QuantParams>,
}

impl OpDescription {
    /// Parse an operator description from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ParserError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Parse an operator description from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let description: OpDescription =
            serde_yaml::from_str(content).map_err(ParserError::YamlError)?;
        Ok(description)
    }

    /// Look up quantization parameters for a tensor by name
    pub fn quant_params_for(&self, tensor_name: &str) -> Option<&QuantParams> {
        self.quant_params.get(tensor_name)
    }
}

/// Parser facade combining file loading with validation
pub struct OpDescriptionParser {
    validator: super::validation::OpValidator,
}

impl OpDescriptionParser {
    pub fn new() -> Self {
        Self {
            validator: super::validation::OpValidator::new(),
        }
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.validator = self.validator.with_strict_mode(strict);
        self
    }

    /// Load an operator description and fail fast on validation errors
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<OpDescription> {
        let description = OpDescription::from_file(path)?;
        self.validator.validate_strict(&description)?;
        Ok(description)
    }

    /// Parse from a YAML string and fail fast on validation errors
    pub fn parse_yaml(&self, content: &str) -> Result<OpDescription> {
        let description = OpDescription::from_yaml(content)?;
        self.validator.validate_strict(&description)?;
        Ok(description)
    }
}

impl Default for OpDescriptionParser {
    fn default() -> Self {
        Self::new()
    }
}
