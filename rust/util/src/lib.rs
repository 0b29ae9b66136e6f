//! Helpers for working with 16-bit audio samples.
//!
//! These are shared between the signal-conditioning core and its tests and
//! benchmarks. Signal generators and spectral measurement live behind the
//! `test-utils` feature so firmware builds don't pull in an FFT.

pub mod sample;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
