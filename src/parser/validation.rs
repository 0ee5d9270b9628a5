// ABOUTME: Operator description validation logic
// ABOUTME: Checks tensor/variable pairing and quantization parameter references

use std::collections::HashSet;

use tracing::debug;

use super::error::{Result, ValidationError};
use super::op::OpDescription;

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
    pub is_valid: bool,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            is_valid: true,
        }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.is_valid = false;
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

pub struct OpValidator {
    strict_mode: bool,
}

impl OpValidator {
    pub fn new() -> Self {
        Self { strict_mode: false }
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Validate a description and collect all findings into a report
    pub fn validate(&self, description: &OpDescription) -> ValidationReport {
        let mut report = ValidationReport::new();

        if description.op_type.trim().is_empty() {
            report.add_error(ValidationError::EmptyOpType);
        }

        // The output tensor / variable name pairing is positional. A length
        // mismatch must never be silently truncated.
        if description.output_tensors.len() != description.out_var_names.len() {
            report.add_error(ValidationError::OutputBindingMismatch {
                outputs: description.output_tensors.len(),
                names: description.out_var_names.len(),
            });
        }

        let mut seen = HashSet::new();
        for tensor in &description.output_tensors {
            if !seen.insert(tensor.name.as_str()) {
                report.add_error(ValidationError::DuplicateOutputTensor {
                    name: tensor.name.clone(),
                });
            }
        }

        for quant_name in description.quant_params.keys() {
            if !seen.contains(quant_name.as_str()) {
                if self.strict_mode {
                    report.add_error(ValidationError::UnknownQuantTensor {
                        name: quant_name.clone(),
                    });
                } else {
                    report.add_warning(format!(
                        "Quantization parameters for '{}' match no output tensor and will be ignored",
                        quant_name
                    ));
                }
            }
        }

        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validated operator description '{}'",
            description.op_type
        );

        report
    }

    /// Validate and fail on the first error
    pub fn validate_strict(&self, description: &OpDescription) -> Result<()> {
        let report = self.validate(description);
        if let Some(error) = report.errors.into_iter().next() {
            return Err(error.into());
        }
        Ok(())
    }
}

impl Default for OpValidator {
    fn default() -> Self {
        Self::new()
    }
}
