// ABOUTME: Output writers for different destinations (stdout, files)
// ABOUTME: Handles writing formatted snippets to their destination

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use super::error::{OutputError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    /// Interpret a CLI output argument. `-` or absence means stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => OutputDestination::Stdout,
            Some(path) => OutputDestination::File(PathBuf::from(path)),
        }
    }
}

pub trait OutputWriter {
    fn write(&self, content: &str, destination: &OutputDestination) -> Result<()>;
}

pub struct StdoutWriter;

pub struct FileWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str, _destination: &OutputDestination) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content)?;
        debug!("Wrote {} bytes to stdout", content.len());
        Ok(())
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str, destination: &OutputDestination) -> Result<()> {
        let path = match destination {
            OutputDestination::File(path) => path,
            OutputDestination::Stdout => {
                return StdoutWriter.write(content, destination);
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| OutputError::WriteError {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|source| OutputError::WriteError {
            path: path.display().to_string(),
            source,
        })?;

        info!("Snippet written to: {}", path.display());
        Ok(())
    }
}

/// Dispatch to the writer matching the destination
pub struct OutputHandler;

impl OutputHandler {
    pub fn write(content: &str, destination: &OutputDestination) -> Result<()> {
        match destination {
            OutputDestination::Stdout => StdoutWriter.write(content, destination),
            OutputDestination::File(_) => FileWriter.write(content, destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_from_arg() {
        assert_eq!(OutputDestination::from_arg(None), OutputDestination::Stdout);
        assert_eq!(
            OutputDestination::from_arg(Some("-")),
            OutputDestination::Stdout
        );
        assert_eq!(
            OutputDestination::from_arg(Some("out/stub.cpp")),
            OutputDestination::File(PathBuf::from("out/stub.cpp"))
        );
    }

    #[test]
    fn test_file_writer_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/stub.cpp");
        let destination = OutputDestination::File(path.clone());

        FileWriter.write("/* stub */", &destination).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "/* stub */");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stub.cpp");
        std::fs::write(&path, "old").unwrap();

        let destination = OutputDestination::File(path.clone());
        FileWriter.write("new", &destination).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
