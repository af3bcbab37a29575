//! Export — encodes rendered buffers as 16-bit mono PCM WAV.

pub mod wav;

pub use wav::{wav_spec, write_wav, write_wav_to};

/// Errors that can occur while writing audio files.
#[derive(Debug)]
pub enum ExportError {
    /// WAV encoding error.
    Wav(hound::Error),
    /// Filesystem error.
    Io(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Wav(e) => write!(f, "WAV error: {e}"),
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Wav(e) => Some(e),
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<hound::Error> for ExportError {
    fn from(e: hound::Error) -> Self {
        ExportError::Wav(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}
