//! Prints one tuner reading per frame of a `.wav` file.
//!
//! ```text
//! RUST_LOG=pitcher=trace cargo run --example wav_tuner -- violin-D4.wav [frame_size]
//! ```

use anyhow::{bail, Context, Result};
use log::info;

use pitcher::detector::autocorrelation::AutocorrelationDetector;
use pitcher::detector::PitchDetector;
use pitcher::DetectorConfig;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: wav_tuner <file.wav> [frame_size]"),
    };
    let frame_size = match args.next() {
        Some(size) => size.parse().context("frame size must be an integer")?,
        None => pitcher::config::DEFAULT_FRAME_SIZE,
    };

    let mut reader =
        hound::WavReader::open(&path).with_context(|| format!("opening \"{}\"", path))?;
    let spec = reader.spec();
    info!(
        "{}: {} Hz, {} channel(s), {} bit {:?}",
        path, spec.sample_rate, spec.channels, spec.bits_per_sample, spec.sample_format
    );

    // Keep the first channel only, scaled to [-1, 1].
    let channels = spec.channels as usize;
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|s| s as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };

    let sample_rate = spec.sample_rate as f32;
    let mut detector = AutocorrelationDetector::new(DetectorConfig::with_frame_size(frame_size))?;

    for (i, frame) in samples.chunks_exact(frame_size).enumerate() {
        let time = (i * frame_size) as f32 / sample_rate;
        match detector.detect(frame, sample_rate)? {
            Some(d) => println!(
                "{:8.3}s  {:>2}{:<2} {:+4} cents  {:8.2} Hz  confidence {:.3}",
                time, d.note_name, d.octave, d.detune_cents, d.pitch, d.confidence
            ),
            None => println!("{:8.3}s  --", time),
        }
    }

    Ok(())
}
