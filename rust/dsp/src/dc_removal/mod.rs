//! Removes the DC bias of a sample stream, in place.
//!
//! The filter is two cascaded first-order DC blockers, each with transfer
//! function `(1 - z^-1) / (1 - a z^-1)`, run as one second-order section:
//!
//! ```text
//! y(k) = u(k) - 2 u(k-1) + u(k-2) + 2a y(k-1) - a^2 y(k-2)
//! ```
//!
//! With `a = 0.999` both poles sit just inside the unit circle. The -3 dB
//! point lands at about `2.5e-4` times the sampling rate: 12 Hz at 48 kHz,
//! 2 Hz at 8 kHz. Everything in the voice band passes with well under 0.1 dB
//! of ripple.

use rtx_dsp_util::sample::{saturate_f64, to_f64};

use crate::filter_state::{FilterState, History};
use crate::AudioSample;


/// Pole radius of each first-order section.
const POLE: f64 = 0.999;

const A1: f64 = 2.0 * POLE;
const A2: f64 = POLE * POLE;

/// Runs one sample through the recurrence, updating `history`.
///
/// Accumulation happens in `f64`. The recurrence can't overflow, and the
/// near-unit double pole amplifies rounding error enough that `f32` leaves a
/// visible DC residual. Rounding back to the sample domain is up to the caller.
pub fn process_sample(history: &mut History, input: f64) -> f64 {
    let [u1, u2, _] = history.inputs;
    let [y1, y2, _] = history.outputs;
    let output = input - 2.0 * u1 + u2 + A1 * y1 - A2 * y2;
    history.push(input, output);
    output
}

/// Removes the DC offset from `buffer`, in place.
///
/// `state` carries history across calls, so successive buffers of one stream
/// are filtered as if they were one long buffer. If `state` is unseeded (fresh,
/// or just reset), the first sample seeds the history and comes out as zero:
/// the best estimate of the bias at that point is the sample itself.
///
/// An empty buffer leaves `state` untouched. Output samples are rounded and
/// saturated to the sample range.
pub fn dc_removal(state: &mut FilterState, buffer: &mut [AudioSample]) {
    let mut samples = buffer.iter_mut();
    let mut history = match *state {
        FilterState::Steady(history) => history,
        FilterState::Unseeded => {
            let Some(first) = samples.next() else {
                return;
            };
            let first_value = to_f64(*first);
            tracing::trace!(first = first_value, "filter state seeded");
            *first = 0;
            History::seeded(first_value)
        }
    };
    for sample in samples {
        *sample = saturate_f64(process_sample(&mut history, to_f64(*sample)));
    }
    *state = FilterState::Steady(history);
}
