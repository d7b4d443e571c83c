use crate::error::{PitchError, Result};
use crate::float::{to_f64, Float};
use crate::note::{note_name, octave, Tuning};

/// Raw estimate for one frame: fundamental frequency in Hz and the
/// correlation of the chosen lag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch<T>
where
    T: Float,
{
    pub frequency: T,
    pub confidence: T,
}

/// Everything a tuner displays for one frame. Note, name, octave and detune
/// are all derived from `pitch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection<T>
where
    T: Float,
{
    pub pitch: T,
    pub note: i32,
    pub note_name: &'static str,
    pub octave: i32,
    /// Floored cents between `pitch` and the exact frequency of `note`
    pub detune_cents: i32,
    pub confidence: T,
}

impl<T: Float> Detection<T> {
    pub fn from_pitch(pitch: Pitch<T>, tuning: &Tuning) -> Result<Self> {
        let note = tuning.note_from_pitch(pitch.frequency)?;
        let detune_cents = tuning.cents_off_from_pitch(pitch.frequency, note)?;
        Ok(Detection {
            pitch: pitch.frequency,
            note,
            note_name: note_name(note),
            octave: octave(note),
            detune_cents,
            confidence: pitch.confidence,
        })
    }
}

/// Scratch space for the correlation curve. It is allocated once per detector
/// and overwritten by every call, so a detector needs `&mut self` to run.
pub struct DetectorInternals<T>
where
    T: Float,
{
    pub size: usize,
    pub correlations: Vec<T>,
}

impl<T> DetectorInternals<T>
where
    T: Float,
{
    pub fn new(size: usize) -> Self {
        DetectorInternals {
            size,
            correlations: vec![T::zero(); size / 2],
        }
    }

    /// Zero the curve, resizing it for a frame of `frame_len` samples.
    pub fn reset(&mut self, frame_len: usize) {
        self.size = frame_len;
        self.correlations.clear();
        self.correlations.resize(frame_len / 2, T::zero());
    }
}

pub fn check_sample_rate<T: Float>(sample_rate: T) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > T::zero() {
        Ok(())
    } else {
        Err(PitchError::InvalidSampleRate(to_f64(sample_rate)))
    }
}

pub fn check_frame_len(len: usize) -> Result<()> {
    if len / 2 < 1 {
        Err(PitchError::FrameTooShort { len })
    } else {
        Ok(())
    }
}
