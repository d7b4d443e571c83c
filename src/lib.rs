//! # Pitcher
//! *pitcher* estimates the pitch of a short frame of audio and reads it out the
//! way a tuner does: note name plus offset in cents. It is meant to be called
//! once per captured frame; nothing is carried over between frames.
//!
//! # Pipeline
//!   * [SignalGate][detector::gate::SignalGate] rejects frames below an RMS level.
//!   * [Autocorrelator][detector::autocorrelation::Autocorrelator] finds the first
//!     strong period of the frame and refines it below one sample.
//!   * [note] maps the frequency to the nearest equal-tempered note and the
//!     floored cents offset from it.
//!
//! [AutocorrelationDetector][detector::autocorrelation::AutocorrelationDetector] ties the
//! steps together behind the [PitchDetector][detector::PitchDetector] trait.
//!
//! # Examples
//! ```
//! use pitcher::detector::autocorrelation::AutocorrelationDetector;
//! use pitcher::detector::PitchDetector;
//! use pitcher::DetectorConfig;
//!
//! fn main() -> pitcher::Result<()> {
//!     const SAMPLE_RATE: f64 = 44100.0;
//!     const SIZE: usize = 2048;
//!
//!     // Signal coming from some source (microphone, generated, etc...)
//!     let dt = 1.0 / SAMPLE_RATE;
//!     let freq = 440.0;
//!     let signal: Vec<f64> = (0..SIZE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!
//!     let mut detector = AutocorrelationDetector::new(DetectorConfig::with_frame_size(SIZE))?;
//!
//!     if let Some(detection) = detector.detect(&signal, SAMPLE_RATE)? {
//!         println!(
//!             "{}{} {:+} cents ({:.1} Hz, confidence {:.2})",
//!             detection.note_name,
//!             detection.octave,
//!             detection.detune_cents,
//!             detection.pitch,
//!             detection.confidence
//!         );
//!         assert_eq!(detection.note_name, "A");
//!     }
//!     Ok(())
//! }
//! ```

pub use config::DetectorConfig;
pub use detector::internals::{Detection, Pitch};
pub use error::{PitchError, Result};

pub mod config;
pub mod detector;
pub mod error;
pub mod float;
pub mod note;
pub mod utils;
