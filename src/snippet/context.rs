// ABOUTME: Snippet rendering context built from a validated operator description
// ABOUTME: Pre-zips output tensors with their bound variable names and quantization data

use serde::Serialize;

use super::error::{Result, SnippetError};
use crate::parser::{OpDescription, QuantParams, TensorDescriptor};

/// One output tensor paired with the variable name the generated code must
/// bind it to, plus its quantization parameters when present.
#[derive(Debug, Clone, Serialize)]
pub struct OutputBinding {
    pub name: String,
    pub dtype: String,
    pub var_name: String,
    pub quant: Option<QuantParams>,
}

/// Flattened view of an operator description ready for template rendering.
///
/// The zip of `output_tensors` and `out_var_names` happens here, under a
/// length check, so the template body stays pure iteration.
#[derive(Debug, Clone, Serialize)]
pub struct SnippetContext {
    pub op_type: String,
    pub input_tensors: Vec<TensorDescriptor>,
    pub outputs: Vec<OutputBinding>,
}

impl SnippetContext {
    pub fn from_description(description: &OpDescription) -> Result<Self> {
        if description.output_tensors.len() != description.out_var_names.len() {
            return Err(SnippetError::BindingMismatch {
                outputs: description.output_tensors.len(),
                names: description.out_var_names.len(),
            });
        }

        let outputs = description
            .output_tensors
            .iter()
            .zip(&description.out_var_names)
            .map(|(tensor, var_name)| OutputBinding {
                name: tensor.name.clone(),
                dtype: tensor.dtype.clone(),
                var_name: var_name.clone(),
                quant: description.quant_params_for(&tensor.name).cloned(),
            })
            .collect();

        Ok(Self {
            op_type: description.op_type.clone(),
            input_tensors: description.input_tensors.clone(),
            outputs,
        })
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(SnippetError::JsonError)
    }
}
