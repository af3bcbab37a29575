//! RIFF/WAVE writing through `hound`.

use std::io::{Seek, Write};
use std::path::Path;

use tracing::debug;

use super::ExportError;
use crate::synth::SampleBuffer;

/// The WAV header for `buffer`: integer PCM at its rate, depth and channel count.
pub fn wav_spec(buffer: &SampleBuffer) -> hound::WavSpec {
    hound::WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: buffer.bits_per_sample(),
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encode `buffer` into any seekable writer.
pub fn write_wav_to<W: Write + Seek>(writer: W, buffer: &SampleBuffer) -> Result<(), ExportError> {
    let mut wav = hound::WavWriter::new(writer, wav_spec(buffer))?;
    write_samples(&mut wav, buffer)?;
    wav.finalize()?;
    Ok(())
}

/// Create (or truncate) `path` and write `buffer` to it.
///
/// Parent directories are created as needed.
pub fn write_wav(path: &Path, buffer: &SampleBuffer) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut wav = hound::WavWriter::create(path, wav_spec(buffer))?;
    write_samples(&mut wav, buffer)?;
    wav.finalize()?;

    debug!(path = %path.display(), samples = buffer.len(), "wrote wav");
    Ok(())
}

fn write_samples<W: Write + Seek>(
    wav: &mut hound::WavWriter<W>,
    buffer: &SampleBuffer,
) -> Result<(), ExportError> {
    for s in buffer.to_pcm16() {
        wav.write_sample(s)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn buffer_of(samples: &[i32], sample_rate: u32) -> SampleBuffer {
        let mut buf = SampleBuffer::silent(samples.len(), sample_rate);
        buf.add_at(0, samples);
        buf
    }

    fn read_back(bytes: Vec<u8>) -> (hound::WavSpec, Vec<i16>) {
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        let samples = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        (spec, samples)
    }

    #[test]
    fn header_is_mono_16_bit() {
        let mut out = Cursor::new(Vec::new());
        write_wav_to(&mut out, &buffer_of(&[0, 1, -1], 22050)).unwrap();
        let (spec, _) = read_back(out.into_inner());
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    }

    #[test]
    fn samples_survive() {
        let mut out = Cursor::new(Vec::new());
        write_wav_to(&mut out, &buffer_of(&[0, 1000, -1000, 32767, -32768], 44100)).unwrap();
        let (_, samples) = read_back(out.into_inner());
        assert_eq!(samples, vec![0, 1000, -1000, 32767, -32768]);
    }

    #[test]
    fn overflowing_sums_wrap() {
        let mut buf = buffer_of(&[20_000], 44100);
        buf.add_at(0, &[20_000]);
        let mut out = Cursor::new(Vec::new());
        write_wav_to(&mut out, &buf).unwrap();
        let (_, samples) = read_back(out.into_inner());
        assert_eq!(samples, vec![40_000i32 as i16]);
    }

    #[test]
    fn sample_count_matches_buffer() {
        let mut out = Cursor::new(Vec::new());
        write_wav_to(&mut out, &buffer_of(&[1; 100], 8000)).unwrap();
        let reader = hound::WavReader::new(Cursor::new(out.into_inner())).unwrap();
        assert_eq!(reader.duration(), 100);
        assert_eq!(reader.len(), 100);
    }

    #[test]
    fn write_to_path_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hit.wav");
        write_wav(&path, &buffer_of(&[5, -5], 44100)).unwrap();
        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 2);
    }
}
