//! Wall-clock micro-benchmark of repeated forward FFT calls.
//!
//! The benchmark generates one fixed-length random real signal, warms the
//! transform up a few times, then times a long sequential loop of forward
//! FFT calls and reports the mean per-call duration in seconds. The FFT
//! itself is delegated to [rustfft]; this crate is a consumer, not an
//! implementer, of the transform.
//!
//! [rustfft]: https://docs.rs/rustfft

pub mod backend;
pub mod harness;
pub mod signal;

pub use backend::{Backend, RustFftBackend};
pub use harness::{Harness, Measurement};

/// Number of samples in the benchmarked signal.
pub const DEFAULT_SIGNAL_LEN: usize = 4096;

/// Discarded transform calls made before timing starts.
pub const DEFAULT_WARMUP: usize = 3;

/// Transform calls made inside the timed loop.
pub const DEFAULT_TIMED_PASSES: usize = 100_000;
