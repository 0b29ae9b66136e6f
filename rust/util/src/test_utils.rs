//! Deterministic signal generators and spectral measurement for tests and
//! benchmarks.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use num::Complex;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use realfft::RealFftPlanner;

use crate::sample::{saturate, to_f32, AudioSample};

/// Fills `buffer` with uniform noise in `[-1, 1)`, always from the same seed.
pub fn fill_with_white_noise(buffer: &mut [f32]) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(420);
    for sample in buffer.iter_mut() {
        *sample = rng.gen_range(-1.0..1.0);
    }
}

/// Seeded uniform noise in `[-1, 1)`.
#[must_use]
pub fn white_noise(len: usize) -> Vec<f32> {
    let mut buffer = vec![0.0; len];
    fill_with_white_noise(&mut buffer);
    buffer
}

/// Seeded uniform noise quantized to the sample domain, peaking at `amplitude`.
#[must_use]
pub fn white_noise_samples(len: usize, amplitude: AudioSample) -> Vec<AudioSample> {
    white_noise(len)
        .into_iter()
        .map(|x| saturate(x * to_f32(amplitude)))
        .collect()
}

/// A unit sine starting at phase zero. `increment` is in cycles per sample.
#[must_use]
pub fn sine(len: usize, increment: f32) -> Vec<f32> {
    let mut buffer = vec![0f32; len];
    let mut phase = 0f64;
    let increment = f64::from(increment) * std::f64::consts::TAU;
    for sample in &mut buffer {
        *sample = phase.sin() as f32;
        phase += increment;
    }
    buffer
}

/// A sine quantized to the sample domain: `offset + amplitude * sin(...)`.
#[must_use]
pub fn sine_samples(len: usize, increment: f32, amplitude: f32, offset: f32) -> Vec<AudioSample> {
    sine(len, increment)
        .into_iter()
        .map(|x| saturate(offset + amplitude * x))
        .collect()
}

/// Widens a buffer of samples to `f32` for spectral measurement.
#[must_use]
pub fn samples_to_f32(samples: &[AudioSample]) -> Vec<f32> {
    samples.iter().copied().map(to_f32).collect()
}

fn hamming(data: &mut [f32]) {
    let increment = std::f32::consts::TAU / data.len() as f32;
    for (index, sample) in data.iter_mut().enumerate() {
        *sample *= 0.54 - 0.46 * (index as f32 * increment).cos();
    }
}

/// Hamming-windowed real FFT. Note that this will thrash `data`.
///
/// # Panics
///
/// If the FFT can't be planned for `data.len()`, for example if it is empty.
pub fn windowed_rfft(data: &mut [f32]) -> Vec<Complex<f32>> {
    hamming(data);
    let mut planner = RealFftPlanner::<f32>::new();
    let r2c = planner.plan_fft_forward(data.len());
    let mut spectrum = r2c.make_output_vec();
    r2c.process(data, &mut spectrum).unwrap();
    spectrum
}

/// Mean of a run of samples.
///
/// # Panics
///
/// If `samples` is empty.
#[must_use]
pub fn mean(samples: &[AudioSample]) -> f32 {
    assert!(!samples.is_empty());
    samples.iter().map(|x| f64::from(*x)).sum::<f64>() as f32 / samples.len() as f32
}

/// Largest absolute value in a run of samples.
#[must_use]
pub fn peak(samples: &[AudioSample]) -> u16 {
    samples.iter().map(|x| x.unsigned_abs()).max().unwrap_or(0)
}
