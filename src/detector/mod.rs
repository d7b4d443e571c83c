use crate::detector::internals::{Detection, Pitch};
use crate::error::Result;
use crate::float::Float;
use crate::note::Tuning;

pub mod autocorrelation;
pub mod gate;
pub mod internals;

pub trait PitchDetector<T>
where
    T: Float,
{
    /// Raw pitch estimate for one frame, or `None` when the frame holds no reliable pitch.
    fn get_pitch(&mut self, signal: &[T], sample_rate: T) -> Result<Option<Pitch<T>>>;

    /// Reference the detected pitches are mapped to notes with.
    fn tuning(&self) -> Tuning {
        Tuning::STANDARD
    }

    /// Pitch, nearest note and detune for one frame.
    fn detect(&mut self, signal: &[T], sample_rate: T) -> Result<Option<Detection<T>>> {
        match self.get_pitch(signal, sample_rate)? {
            Some(pitch) => Detection::from_pitch(pitch, &self.tuning()).map(Some),
            None => Ok(None),
        }
    }
}
