// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for opstub

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opstub")]
#[command(about = "Renders FIXME stub comments for operators a code generator cannot emit")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the stub comment for an operator description
    Render {
        #[arg(help = "Path to operator description YAML file")]
        description: PathBuf,

        #[arg(short, long, help = "Output file, or '-' for stdout")]
        output: Option<String>,

        #[arg(long, default_value = "raw", help = "Output format (raw or json)")]
        format: String,

        #[arg(long, help = "Treat validation warnings as errors")]
        strict: bool,
    },

    /// Validate an operator description without rendering
    Validate {
        #[arg(help = "Path to operator description YAML file")]
        description: PathBuf,

        #[arg(long, help = "Treat validation warnings as errors")]
        strict: bool,
    },

    /// Initialize a sample operator description file
    Init {
        #[arg(help = "Operator type name for the new description")]
        name: String,

        #[arg(short, long, help = "Output directory", default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_parsing() {
        let args = Args::parse_from(["opstub", "render", "op.yaml", "-o", "stub.cpp"]);
        match args.command {
            Commands::Render {
                description,
                output,
                format,
                strict,
            } => {
                assert_eq!(description, PathBuf::from("op.yaml"));
                assert_eq!(output.as_deref(), Some("stub.cpp"));
                assert_eq!(format, "raw");
                assert!(!strict);
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_validate_command_parsing() {
        let args = Args::parse_from(["opstub", "validate", "op.yaml", "--strict"]);
        match args.command {
            Commands::Validate {
                description,
                strict,
            } => {
                assert_eq!(description, PathBuf::from("op.yaml"));
                assert!(strict);
            }
            _ => panic!("Expected validate command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Args::parse_from(["opstub", "--verbose", "--no-color", "validate", "op.yaml"]);
        assert!(args.verbose);
        assert!(args.no_color);
    }
}
