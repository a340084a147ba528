//! The two capabilities the benchmark consumes: uniform random sampling and
//! a forward discrete Fourier transform.

use std::sync::Arc;

use rustfft::{num_complex::Complex64, Fft, FftPlanner};

use crate::signal::gen_random_signal;

/// Sampling and transform seam for the benchmark harness.
///
/// The harness only ever touches the backend through these two methods, so
/// tests can substitute deterministic stubs for the real numeric library.
pub trait Backend {
    /// Fill `buf` with uniform random samples in `[0, 1)`.
    fn fill_random(&mut self, buf: &mut [f64]);

    /// Forward DFT of the real `input`, written into the complex `output`.
    ///
    /// # Panics
    ///
    /// Panics if `input.len() != output.len()`.
    fn forward(&mut self, input: &[f64], output: &mut [Complex64]);
}

/// Production backend: `rand` for sampling, `rustfft` for the transform.
///
/// The forward FFT is planned once, for a fixed length, at construction.
/// Repeated `forward` calls reuse the plan, so the timed loop pays only for
/// the transform itself.
pub struct RustFftBackend {
    fft: Arc<dyn Fft<f64>>,
}

impl RustFftBackend {
    /// Plan a forward FFT of `len` points.
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);

        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(len),
        }
    }
}

impl Backend for RustFftBackend {
    fn fill_random(&mut self, buf: &mut [f64]) {
        gen_random_signal(buf);
    }

    fn forward(&mut self, input: &[f64], output: &mut [Complex64]) {
        assert_eq!(input.len(), output.len());
        assert_eq!(input.len(), self.fft.len());

        // Widen the real signal into the complex buffer, then transform in place.
        for (z, sample) in output.iter_mut().zip(input.iter()) {
            *z = Complex64::new(*sample, 0.0);
        }
        self.fft.process(output);
    }
}
