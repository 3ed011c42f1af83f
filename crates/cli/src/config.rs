//! Run configuration.

use std::path::PathBuf;

/// Where batches are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Standard input.
    #[default]
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text report, one block per pack.
    #[default]
    Text,
    /// One pretty-printed JSON document per batch.
    Json,
}

/// Configuration for a [`Runner`](crate::Runner).
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Input source.
    pub input: InputSource,

    /// Output format.
    pub format: OutputFormat,
}

impl RunConfig {
    /// Creates a configuration reading stdin and writing text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input source.
    pub fn with_input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    /// Reads from `path` instead of stdin.
    pub fn with_input_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_input(InputSource::File(path.into()))
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
