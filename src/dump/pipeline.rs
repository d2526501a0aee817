//! Dump-splitting pipeline
//!
//! Orchestrates the complete run as a sequential transformation flow:
//!
//! 1. **Tool invocation** - capture the dump text from the external tool
//! 2. **Line splitting** - one pass over the raw text
//! 3. **Header extraction** - shared comment blurb, written once
//! 4. **Segmentation + naming + publishing** - declarations are named and
//!    persisted one by one, as their end markers are seen
//!
//! The run is fail-fast: the first error at any stage aborts it, and
//! files written before the failure are left in place. Every stage error
//! converts into the single top-level [`RunError`], which the binary
//! matches once to decide the exit status.
//!
//! # Usage
//!
//! ```rust
//! use dumpsplit::dump::pipeline::Pipeline;
//! use std::path::Path;
//!
//! let pipeline = Pipeline::new();
//! let report = pipeline.run(
//!     Path::new("class-dump"),
//!     Path::new("MyApp"),
//!     Path::new("headers"),
//! )?;
//! println!("{} declarations", report.declaration_paths.len());
//! ```

use crate::dump::header::extract_header;
use crate::dump::naming::{resolve_name, NameError};
use crate::dump::publish::{create_output_dir, write_artifact, PublishError};
use crate::dump::segmenting::{DeclarationBlock, DeclarationScanner};
use crate::dump::splitting::split_lines;
use crate::dump::tool::{run_dump, ToolError};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the shared comment-header artifact.
pub const VERSION_HEADER_FILE: &str = "class-dump-version.h";

/// Suffix appended to every declaration name to form its file name.
pub const HEADER_SUFFIX: &str = ".h";

/// One declaration ready to persist: its resolved name, the run's shared
/// comment blurb, and the block text.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalDeclaration {
    pub name: String,
    pub header: String,
    pub body: String,
}

impl CanonicalDeclaration {
    /// Build the output record for one block under the run's shared
    /// header. Fails only on a block with no lines.
    pub fn from_block(block: &DeclarationBlock, header: &str) -> Result<Self, NameError> {
        Ok(CanonicalDeclaration {
            name: resolve_name(block)?,
            header: header.to_string(),
            body: block.text(),
        })
    }

    /// File name of this declaration's artifact. The name is used as-is;
    /// path-special characters are not escaped.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, HEADER_SUFFIX)
    }
}

/// Top-level error for a whole run
#[derive(Debug, Clone)]
pub enum RunError {
    /// Invoking the dump tool failed
    Tool(ToolError),
    /// Writing an output artifact failed
    Publish(PublishError),
    /// A declaration block could not be named
    Name(NameError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Tool(err) => write!(f, "{}", err),
            RunError::Publish(err) => write!(f, "{}", err),
            RunError::Name(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ToolError> for RunError {
    fn from(err: ToolError) -> Self {
        RunError::Tool(err)
    }
}

impl From<PublishError> for RunError {
    fn from(err: PublishError) -> Self {
        RunError::Publish(err)
    }
}

impl From<NameError> for RunError {
    fn from(err: NameError) -> Self {
        RunError::Name(err)
    }
}

/// What a completed run wrote.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Path of the shared header artifact.
    pub header_path: PathBuf,
    /// Paths of the declaration artifacts, in emission order.
    pub declaration_paths: Vec<PathBuf>,
    /// Line count of a trailing declaration that never closed and was
    /// therefore discarded.
    pub discarded_lines: usize,
}

/// The dump-splitting pipeline.
///
/// A simple struct encoding the complete transformation sequence; see the
/// module docs for the stage order.
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Run the dump tool on `binary` and split its output into `out_dir`.
    ///
    /// Nothing is written if the tool cannot be launched or its output
    /// cannot be decoded as text.
    pub fn run(&self, tool: &Path, binary: &Path, out_dir: &Path) -> Result<RunReport, RunError> {
        let source = run_dump(tool, binary)?;
        self.split_to_dir(&source, out_dir)
    }

    /// Split already-captured dump text into one file per declaration.
    ///
    /// The shared header artifact is written first; declarations are then
    /// streamed out of the scanner and written as their end markers are
    /// seen. A trailing declaration without an end marker is discarded
    /// and reported through the log facade.
    pub fn split_to_dir(&self, source: &str, out_dir: &Path) -> Result<RunReport, RunError> {
        let lines = split_lines(source);
        let header = extract_header(&lines);

        create_output_dir(out_dir)?;
        let mut blurb = header.clone();
        blurb.push('\n');
        let header_path = write_artifact(out_dir, VERSION_HEADER_FILE, &blurb)?;

        let mut declaration_paths = Vec::new();
        let mut scanner = DeclarationScanner::new(&lines);
        for block in scanner.by_ref() {
            let declaration = CanonicalDeclaration::from_block(&block, &header)?;
            let path = write_artifact(out_dir, &declaration.file_name(), &declaration.body)?;
            declaration_paths.push(path);
        }

        let discarded_lines = scanner.discarded_lines().len();
        if discarded_lines > 0 {
            log::warn!(
                "discarded {} line(s) of a declaration with no end marker",
                discarded_lines
            );
        }

        Ok(RunReport {
            header_path,
            declaration_paths,
            discarded_lines,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
