pub extern crate rustfft;

// export rustfft to fftbench's tests and benches
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Naive O(n^2) forward DFT of a real signal.
///
/// Slow but obviously correct, to be used as the reference in tests.
pub fn reference_dft(input: &[f64]) -> Vec<Complex64> {
    let n = input.len();

    (0..n)
        .map(|k| {
            let mut acc = Complex64::new(0.0, 0.0);
            for (j, sample) in input.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * (k * j) as f64 / n as f64;
                acc += Complex64::new(sample * angle.cos(), sample * angle.sin());
            }
            acc
        })
        .collect()
}
