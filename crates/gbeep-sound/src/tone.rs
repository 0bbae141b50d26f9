//! Sine tone synthesis and WAV rendering.
//!
//! Tones are rendered as mono 16-bit PCM at 44100 Hz and written to a
//! deterministic temp path named from the frequency and duration, so two
//! concurrent invocations with different tones never collide. Two
//! processes rendering the identical tone race benignly: the bytes are
//! the same and each deletes best-effort after playback.

use std::f64::consts::PI;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{SoundError, SoundResult};

/// Sample rate of synthesized tones, in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Peak amplitude of synthesized tones, as a fraction of full scale.
pub const AMPLITUDE: f64 = 0.3;

/// Longest tone the synthesizer renders, in milliseconds. Requests
/// beyond this are clamped; it also keeps the sample count far away
/// from arithmetic overflow.
pub const MAX_TONE_MS: u64 = 60_000;

/// Renders a sine tone as f64 samples in `[-AMPLITUDE, AMPLITUDE]`.
pub fn render_sine(frequency: u32, duration_ms: u64) -> Vec<f64> {
    let duration_ms = duration_ms.min(MAX_TONE_MS);
    let num_samples = (SAMPLE_RATE as u64 * duration_ms / 1000) as usize;
    let step = 2.0 * PI * frequency as f64 / SAMPLE_RATE as f64;

    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        samples.push(AMPLITUDE * (step * i as f64).sin());
    }
    samples
}

/// Converts f64 samples to little-endian 16-bit PCM bytes.
///
/// Samples are expected in `[-1.0, 1.0]`; values outside are clipped.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }

    pcm
}

/// Writes a complete mono 16-bit WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, sample_rate: u32, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let byte_rate = sample_rate * 2; // mono, 2 bytes per sample

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Channels (mono)
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&2u16.to_le_bytes())?; // Block align
    writer.write_all(&16u16.to_le_bytes())?; // Bits per sample

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Renders a complete WAV file for a single tone to a byte vector.
pub fn render_tone_wav(frequency: u32, duration_ms: u64) -> Vec<u8> {
    let pcm = samples_to_pcm16(&render_sine(frequency, duration_ms));
    let mut buffer = Vec::with_capacity(44 + pcm.len());
    write_wav(&mut buffer, SAMPLE_RATE, &pcm).expect("writing to Vec should not fail");
    buffer
}

/// A synthesized tone file on disk, deleted best-effort on drop.
///
/// The drop guard runs even when the player errors out, so a crashed
/// player still triggers cleanup.
#[derive(Debug)]
pub(crate) struct ToneFile {
    path: PathBuf,
}

impl ToneFile {
    /// Synthesizes a tone and writes it under the OS temp directory.
    pub(crate) fn create(frequency: u32, duration_ms: u64) -> SoundResult<Self> {
        Self::create_in(&std::env::temp_dir(), frequency, duration_ms)
    }

    /// Synthesizes a tone and writes it under `dir`.
    pub(crate) fn create_in(dir: &Path, frequency: u32, duration_ms: u64) -> SoundResult<Self> {
        let path = dir.join(format!("gbeep_{frequency}_{duration_ms}.wav"));
        let wav = render_tone_wav(frequency, duration_ms);
        std::fs::write(&path, wav).map_err(|source| SoundError::WriteToneFailed {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ToneFile {
    fn drop(&mut self) {
        // Another process may have raced us on the same tone; ignore.
        let _ = std::fs::remove_file(&self.path);
    }
}
