// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building operator description files

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn write_description(&self, name: &str, builder: &TestDescriptionBuilder) -> PathBuf {
        let path = self.path().join(format!("{}.yaml", name));
        std::fs::write(&path, builder.to_yaml()).expect("Failed to write description file");
        path
    }

    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

pub struct TestDescriptionBuilder {
    op_type: String,
    input_tensors: Vec<(String, String)>,
    output_tensors: Vec<(String, String)>,
    out_var_names: Vec<String>,
    quant_entries: Vec<QuantEntry>,
}

pub struct QuantEntry {
    pub tensor: String,
    pub zero_point: (String, String),
    pub scale: (String, String),
    pub is_per_tensor: bool,
}

impl TestDescriptionBuilder {
    pub fn new(op_type: &str) -> Self {
        Self {
            op_type: op_type.to_string(),
            input_tensors: Vec::new(),
            output_tensors: Vec::new(),
            out_var_names: Vec::new(),
            quant_entries: Vec::new(),
        }
    }

    pub fn add_input(mut self, name: &str, dtype: &str) -> Self {
        self.input_tensors.push((name.to_string(), dtype.to_string()));
        self
    }

    pub fn add_output(mut self, name: &str, dtype: &str, var_name: &str) -> Self {
        self.output_tensors
            .push((name.to_string(), dtype.to_string()));
        self.out_var_names.push(var_name.to_string());
        self
    }

    pub fn add_unbound_var(mut self, var_name: &str) -> Self {
        self.out_var_names.push(var_name.to_string());
        self
    }

    pub fn add_quant(
        mut self,
        tensor: &str,
        zero_point: (&str, &str),
        scale: (&str, &str),
        is_per_tensor: bool,
    ) -> Self {
        self.quant_entries.push(QuantEntry {
            tensor: tensor.to_string(),
            zero_point: (zero_point.0.to_string(), zero_point.1.to_string()),
            scale: (scale.0.to_string(), scale.1.to_string()),
            is_per_tensor,
        });
        self
    }

    pub fn to_yaml(&self) -> String {
        let mut yaml = format!("op_type: {}\n", self.op_type);

        if !self.input_tensors.is_empty() {
            yaml.push_str("input_tensors:\n");
            for (name, dtype) in &self.input_tensors {
                yaml.push_str(&format!("  - name: {}\n    dtype: {}\n", name, dtype));
            }
        }

        if !self.output_tensors.is_empty() {
            yaml.push_str("output_tensors:\n");
            for (name, dtype) in &self.output_tensors {
                yaml.push_str(&format!("  - name: {}\n    dtype: {}\n", name, dtype));
            }
        }

        if !self.out_var_names.is_empty() {
            yaml.push_str("out_var_names:\n");
            for var_name in &self.out_var_names {
                yaml.push_str(&format!("  - {}\n", var_name));
            }
        }

        if !self.quant_entries.is_empty() {
            yaml.push_str("quant_params:\n");
            for entry in &self.quant_entries {
                yaml.push_str(&format!("  {}:\n", entry.tensor));
                yaml.push_str(&format!(
                    "    zero_point: {{value: {}, type_str: {}}}\n",
                    entry.zero_point.0, entry.zero_point.1
                ));
                yaml.push_str(&format!(
                    "    scale: {{value: {}, type_str: {}}}\n",
                    entry.scale.0, entry.scale.1
                ));
                yaml.push_str(&format!(
                    "    is_per_tensor: {}\n",
                    entry.is_per_tensor
                ));
            }
        }

        yaml
    }
}
