// ABOUTME: Command implementations for the opstub CLI
// ABOUTME: Handles execution of render, validate, and init commands

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::config::Config;
use crate::output::{OutputDestination, OutputFormat, OutputHandler, OutputProcessor};
use crate::parser::{OpDescription, OpValidator};
use crate::snippet::SnippetEngine;

/// Render the stub comment for an operator description file
pub fn render_snippet(
    description_path: &Path,
    output: Option<String>,
    format: &str,
    strict: bool,
    config: &Config,
) -> Result<()> {
    info!("Rendering stub for: {}", description_path.display());

    let description = load_validated(description_path, strict || config.strict_validation)?;

    let engine = SnippetEngine::new()?;
    let snippet = engine.render(&description)?;

    let format: OutputFormat = format.parse()?;
    let processor = OutputProcessor::new(format);
    let content = processor.process(&description.op_type, &snippet)?;

    let destination = resolve_destination(output.as_deref(), &description.op_type, config);
    OutputHandler::write(&content, &destination)?;

    info!("Stub rendered for operator '{}'", description.op_type);
    Ok(())
}

/// Validate an operator description and report findings
pub fn validate_description(description_path: &Path, strict: bool, config: &Config) -> Result<()> {
    info!("Validating: {}", description_path.display());

    let description = OpDescription::from_file(description_path)?;
    let validator = OpValidator::new().with_strict_mode(strict || config.strict_validation);
    let report = validator.validate(&description);

    for warning in &report.warnings {
        warn!("{}", warning);
    }

    if report.is_valid {
        println!(
            "Operator description '{}' is valid ({} input(s), {} output(s))",
            description.op_type,
            description.input_tensors.len(),
            description.output_tensors.len()
        );
        Ok(())
    } else {
        for error in &report.errors {
            eprintln!("error: {}", error);
        }
        Err(anyhow::anyhow!(
            "Validation failed with {} error(s)",
            report.errors.len()
        ))
    }
}

/// Write a sample operator description to get started from
pub fn init_description(name: &str, output_dir: &Path) -> Result<()> {
    let path = init_file_path(name, output_dir);

    if path.exists() {
        return Err(anyhow::anyhow!(
            "Refusing to overwrite existing file: {}",
            path.display()
        ));
    }

    let content = sample_description(name);
    std::fs::create_dir_all(output_dir)?;
    std::fs::write(&path, content)?;

    println!("Created operator description: {}", path.display());
    Ok(())
}

fn load_validated(path: &Path, strict: bool) -> Result<OpDescription> {
    let description = OpDescription::from_file(path)?;
    let validator = OpValidator::new().with_strict_mode(strict);
    let report = validator.validate(&description);

    for warning in &report.warnings {
        warn!("{}", warning);
    }

    if let Some(error) = report.errors.into_iter().next() {
        return Err(anyhow::anyhow!("Invalid operator description: {}", error));
    }

    Ok(description)
}

fn resolve_destination(output: Option<&str>, op_type: &str, config: &Config) -> OutputDestination {
    match (output, &config.default_output_dir) {
        (None, Some(dir)) => {
            OutputDestination::File(dir.join(format!("{}_stub.cpp", op_type.to_lowercase())))
        }
        _ => OutputDestination::from_arg(output),
    }
}

fn sample_description(name: &str) -> String {
    format!(
        r#"# Operator description for an unsupported operator stub
op_type: {name}

input_tensors:
  - name: input_0
    dtype: float32

output_tensors:
  - name: output_0
    dtype: float32

out_var_names:
  - output_0_var

# Optional per-tensor quantization parameters, keyed by output tensor name:
# quant_params:
#   output_0:
#     zero_point:
#       value: 128
#       type_str: uint8_t
#     scale:
#       value: 0.0039
#       type_str: float
#     is_per_tensor: true
"#
    )
}

/// Build the output path for an init'd description
pub fn init_file_path(name: &str, output_dir: &Path) -> PathBuf {
    let file_name = format!("{}.yaml", name.to_lowercase().replace([' ', '/'], "_"));
    output_dir.join(file_name)
}
