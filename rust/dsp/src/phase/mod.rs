//! Phase inversion of a sample buffer.

use crate::AudioSample;


/// Flips the sign of every sample in `buffer`, in place.
///
/// Negation wraps, so `i16::MIN`, which has no positive counterpart, maps to
/// itself. Inverting twice therefore always restores the original buffer.
pub fn invert_phase(buffer: &mut [AudioSample]) {
    for sample in buffer.iter_mut() {
        *sample = sample.wrapping_neg();
    }
}
