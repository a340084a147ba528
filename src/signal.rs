//! Random signal generation.

use num_traits::Float;
use rand::{distributions::Uniform, prelude::*};

/// Fill `buf` with independent uniform random samples in `[0, 1)`.
///
/// Generic over precision so callers can generate `f32` or `f64` signals.
pub fn gen_random_signal<T>(buf: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::zero(), T::one());
    for sample in buf.iter_mut() {
        *sample = uniform_dist.sample(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_samples_stay_in_unit_interval() {
        let mut signal = vec![0.0_f64; 4096];
        gen_random_signal(&mut signal);

        assert_eq!(signal.len(), 4096);
        for sample in &signal {
            assert!((0.0..1.0).contains(sample), "{sample} out of [0, 1)");
        }
    }

    #[test]
    fn generated_signal_is_not_constant() {
        let mut signal = vec![0.0_f64; 4096];
        gen_random_signal(&mut signal);

        let first = signal[0];
        assert!(signal.iter().any(|s| *s != first));
    }
}
