//! Batch rendering — turns a [`BatchConfig`] into one WAV file per rhythm.
//!
//! Rhythms are rendered one after another. A failing entry is recorded in the
//! [`BatchReport`] and the rest of the collection still renders.

pub mod config;

pub use config::{default_config_path, BatchConfig, RhythmEntry};

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::export::{self, ExportError};
use crate::rhythm::{InvalidSpec, Pattern};
use crate::synth::{self, InvalidParams};

/// Errors from loading a batch config or rendering one of its entries.
#[derive(Debug)]
pub enum BatchError {
    /// Config file could not be read or written.
    Io(std::io::Error),
    /// Config file is not valid YAML for a [`BatchConfig`].
    Yaml(serde_yaml::Error),
    /// An entry's steps/pulses are out of range.
    Spec(InvalidSpec),
    /// An entry's tempo or the sample rate is zero.
    Params(InvalidParams),
    /// The WAV file could not be written.
    Export(ExportError),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(e) => write!(f, "config I/O error: {e}"),
            BatchError::Yaml(e) => write!(f, "config parse error: {e}"),
            BatchError::Spec(e) => write!(f, "{e}"),
            BatchError::Params(e) => write!(f, "invalid audio settings: {e}"),
            BatchError::Export(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> Self {
        BatchError::Io(e)
    }
}

impl From<serde_yaml::Error> for BatchError {
    fn from(e: serde_yaml::Error) -> Self {
        BatchError::Yaml(e)
    }
}

impl From<InvalidSpec> for BatchError {
    fn from(e: InvalidSpec) -> Self {
        BatchError::Spec(e)
    }
}

impl From<InvalidParams> for BatchError {
    fn from(e: InvalidParams) -> Self {
        BatchError::Params(e)
    }
}

impl From<ExportError> for BatchError {
    fn from(e: ExportError) -> Self {
        BatchError::Export(e)
    }
}

/// A rhythm that was rendered and written.
#[derive(Debug, Clone)]
pub struct RenderedRhythm {
    pub name: String,
    pub pattern: Pattern,
    pub path: PathBuf,
    pub samples: usize,
}

/// Outcome of a batch run, in config order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rendered: Vec<RenderedRhythm>,
    pub failed: Vec<(String, BatchError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render one entry and write it under `output_dir`.
pub fn render_entry(
    entry: &RhythmEntry,
    config: &BatchConfig,
    output_dir: &Path,
) -> Result<RenderedRhythm, BatchError> {
    let pattern = entry.spec()?.pattern();
    let buffer = synth::render(&pattern, &entry.audio_params(config))?;
    let path = output_dir.join(&entry.file);
    export::write_wav(&path, &buffer)?;

    Ok(RenderedRhythm {
        name: entry.name.clone(),
        pattern,
        path,
        samples: buffer.len(),
    })
}

/// Render every entry of `config` into `config.output_dir`.
pub fn run(config: &BatchConfig) -> BatchReport {
    run_into(config, &config.output_dir)
}

/// Render every entry of `config` into `output_dir`.
pub fn run_into(config: &BatchConfig, output_dir: &Path) -> BatchReport {
    let mut report = BatchReport::default();

    for entry in &config.rhythms {
        match render_entry(entry, config, output_dir) {
            Ok(rendered) => {
                info!(
                    name = %rendered.name,
                    pattern = %rendered.pattern,
                    path = %rendered.path.display(),
                    "rendered rhythm"
                );
                report.rendered.push(rendered);
            }
            Err(e) => {
                warn!(name = %entry.name, error = %e, "failed to render rhythm");
                report.failed.push((entry.name.clone(), e));
            }
        }
    }

    report
}
