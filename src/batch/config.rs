//! Batch configuration — the rhythm collection, loaded from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::BatchError;
use crate::rhythm::{InvalidSpec, RhythmSpec};
use crate::synth::AudioParams;

/// Default config location (`~/.euclidgen/batch.yaml`).
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".euclidgen");
    path.push("batch.yaml");
    path
}

/// One rhythm to render into its own file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhythmEntry {
    pub name: String,
    pub steps: u32,
    pub pulses: u32,
    #[serde(default = "default_bpm")]
    pub bpm: u32,
    #[serde(default = "default_drum_freq_hz")]
    pub drum_freq_hz: f64,
    /// Output file name, relative to the batch output directory.
    pub file: String,
}

impl RhythmEntry {
    pub fn spec(&self) -> Result<RhythmSpec, InvalidSpec> {
        RhythmSpec::new(self.steps, self.pulses)
    }

    /// Combine this entry with the collection-wide settings.
    pub fn audio_params(&self, config: &BatchConfig) -> AudioParams {
        AudioParams {
            sample_rate: config.sample_rate,
            bpm: self.bpm,
            drum_length_ms: config.drum_length_ms,
            drum_freq_hz: self.drum_freq_hz,
        }
    }
}

/// A collection of rhythms sharing a sample rate, drum length and output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_drum_length_ms")]
    pub drum_length_ms: u32,
    #[serde(default = "BatchConfig::default_rhythms")]
    pub rhythms: Vec<RhythmEntry>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("rhythms")
}

fn default_sample_rate() -> u32 {
    AudioParams::default().sample_rate
}

fn default_drum_length_ms() -> u32 {
    AudioParams::default().drum_length_ms
}

fn default_bpm() -> u32 {
    AudioParams::default().bpm
}

fn default_drum_freq_hz() -> f64 {
    AudioParams::default().drum_freq_hz
}

impl BatchConfig {
    /// Read a config from `path`.
    pub fn load(path: &Path) -> Result<Self, BatchError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Read a config from `path`, falling back to the defaults when the file
    /// doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, BatchError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config as YAML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), BatchError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Tresillo, aksak, West African, bossa nova and minimalist, each with its
    /// own tempo and pitch.
    fn default_rhythms() -> Vec<RhythmEntry> {
        let entry = |name: &str, steps: u32, pulses: u32, bpm: u32, drum_freq_hz: f64, file: &str| {
            RhythmEntry {
                name: name.to_string(),
                steps,
                pulses,
                bpm,
                drum_freq_hz,
                file: file.to_string(),
            }
        };
        vec![
            entry("Cuban Tresillo", 8, 3, 120, 180.0, "cuban_tresillo.wav"),
            entry("Turkish Aksak", 8, 5, 100, 200.0, "turkish_aksak.wav"),
            entry("West African", 12, 5, 110, 160.0, "west_african.wav"),
            entry("Bossa Nova", 16, 6, 120, 180.0, "bossa_nova.wav"),
            entry("Minimalist", 5, 2, 90, 220.0, "minimalist.wav"),
        ]
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            sample_rate: default_sample_rate(),
            drum_length_ms: default_drum_length_ms(),
            rhythms: Self::default_rhythms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn default_collection() {
        let config = BatchConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.drum_length_ms, 80);
        assert_eq!(config.rhythms.len(), 5);
        assert!(config.rhythms.iter().all(|r| r.spec().is_ok()));
        assert_eq!(config.rhythms[2].bpm, 110);
    }

    #[test]
    fn serialize_deserialize() {
        let config = BatchConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: BatchConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let yaml = r#"
rhythms:
  - name: "Tala"
    steps: 7
    pulses: 3
    file: "tala.wav"
"#;
        let config: BatchConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("rhythms"));
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.rhythms.len(), 1);
        let tala = &config.rhythms[0];
        assert_eq!(tala.bpm, 120);
        assert!((tala.drum_freq_hz - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_params_merge_collection_settings() {
        let config = BatchConfig {
            sample_rate: 22050,
            drum_length_ms: 40,
            ..BatchConfig::default()
        };
        let params = config.rhythms[4].audio_params(&config);
        assert_eq!(params.sample_rate, 22050);
        assert_eq!(params.drum_length_ms, 40);
        assert_eq!(params.bpm, 90);
        assert!((params.drum_freq_hz - 220.0).abs() < f64::EPSILON);
    }

    #[test]
    fn save_and_load_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let mut config = BatchConfig::default();
        config.rhythms.truncate(2);
        config.save(file.path()).unwrap();
        assert_eq!(BatchConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert_eq!(BatchConfig::load_or_default(&path).unwrap(), BatchConfig::default());
        assert!(BatchConfig::load(&path).is_err());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "rhythms: 12").unwrap();
        assert!(matches!(BatchConfig::load(file.path()), Err(BatchError::Yaml(_))));
    }

    #[test]
    fn default_path_ends_with_batch_yaml() {
        let path = default_config_path();
        assert!(path.ends_with(".euclidgen/batch.yaml"));
    }
}
