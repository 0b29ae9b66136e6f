//! Conversions between the 16-bit sample domain and `f32`.

/// A single audio sample, as captured from or sent to the analog front end.
pub type AudioSample = i16;

/// Full scale of the sample domain, as a float.
///
/// `i16::MIN` is exactly `-FULL_SCALE`; the positive side stops one step short.
pub const FULL_SCALE: f32 = 32768.0;

/// Widens a sample to `f32` without any scaling. This is exact.
#[must_use]
pub fn to_f32(sample: AudioSample) -> f32 {
    f32::from(sample)
}

/// Widens a sample to `f64` without any scaling. This is exact.
#[must_use]
pub fn to_f64(sample: AudioSample) -> f64 {
    f64::from(sample)
}

/// Rounds `value` to the nearest sample, saturating at the ends of the range.
///
/// Halfway cases round away from zero. `NaN` maps to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn saturate(value: f32) -> AudioSample {
    // float-to-int `as` casts saturate, and map NaN to 0.
    value.round() as AudioSample
}

/// Like [`saturate`], for values accumulated in `f64`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn saturate_f64(value: f64) -> AudioSample {
    value.round() as AudioSample
}

/// Maps a sample into `[-1, 1)`.
#[must_use]
pub fn to_normalized(sample: AudioSample) -> f32 {
    to_f32(sample) / FULL_SCALE
}

/// Maps a value in `[-1, 1]` onto the sample range, saturating outside it.
#[must_use]
pub fn from_normalized(value: f32) -> AudioSample {
    saturate(value * FULL_SCALE)
}
