//! Benchmark harness: warm the transform up, time a loop of repeated calls,
//! report the mean per-call duration.

use std::fmt;
use std::time::{Duration, Instant};

use rustfft::num_complex::Complex64;

use crate::backend::Backend;
use crate::{DEFAULT_SIGNAL_LEN, DEFAULT_TIMED_PASSES, DEFAULT_WARMUP};

/// Drives repeated transform calls over one immutable random signal.
///
/// The signal is generated once at construction and read by every call; the
/// spectrum buffer is reused across calls so the timed loop does not measure
/// allocation.
pub struct Harness<B> {
    backend: B,
    signal: Vec<f64>,
    spectrum: Vec<Complex64>,
    warmup: usize,
    timed_passes: usize,
}

impl<B: Backend> Harness<B> {
    /// Create a harness over a freshly generated `signal_len`-sample signal.
    ///
    /// # Panics
    ///
    /// Panics if `signal_len == 0` or `timed_passes == 0`. A zero timed pass
    /// count would divide by zero in the mean, so it is rejected here.
    pub fn new(mut backend: B, signal_len: usize, warmup: usize, timed_passes: usize) -> Self {
        assert!(signal_len > 0, "signal length must be positive");
        assert!(timed_passes > 0, "timed pass count must be positive");

        let mut signal = vec![0.0; signal_len];
        backend.fill_random(&mut signal);
        let spectrum = vec![Complex64::default(); signal_len];

        Self {
            backend,
            signal,
            spectrum,
            warmup,
            timed_passes,
        }
    }

    /// Harness with the stock counts: a 4096-sample signal, 3 warm-up calls
    /// and 100000 timed passes.
    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, DEFAULT_SIGNAL_LEN, DEFAULT_WARMUP, DEFAULT_TIMED_PASSES)
    }

    /// Invoke the transform `warmup` times, discarding every result, so that
    /// one-time setup inside the backend stays out of the measurement.
    pub fn warm_up(&mut self) {
        for _ in 0..self.warmup {
            self.backend.forward(&self.signal, &mut self.spectrum);
        }
    }

    /// Time `timed_passes` sequential transform calls and return the total
    /// elapsed wall-clock duration.
    pub fn timed_loop(&mut self) -> Duration {
        let now = Instant::now();
        for _ in 0..self.timed_passes {
            self.backend.forward(&self.signal, &mut self.spectrum);
        }
        now.elapsed()
    }

    /// Warm up, then run the timed loop.
    pub fn run(&mut self) -> Measurement {
        self.warm_up();
        let elapsed = self.timed_loop();
        Measurement {
            elapsed,
            calls: self.timed_passes,
        }
    }
}

/// Total elapsed wall-clock time of a timed loop and the number of transform
/// calls it made.
///
/// `calls` is always positive: [`Harness::new`] rejects a zero pass count
/// before a measurement can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Wall-clock duration of the whole timed loop.
    pub elapsed: Duration,
    /// Number of transform calls the loop made.
    pub calls: usize,
}

impl Measurement {
    /// Mean per-call duration in seconds.
    pub fn mean_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64() / self.calls as f64
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seconds", self.mean_seconds())
    }
}
