use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fftbench::signal::gen_random_signal;
use fftbench::{Backend, RustFftBackend, DEFAULT_SIGNAL_LEN};
use utilities::rustfft::num_complex::Complex64;

const LENGTHS: &[usize] = &[10, 11, 12, 13, 14];

fn benchmark_forward_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        let mut backend = RustFftBackend::new(len);
        let mut signal = vec![0.0; len];
        backend.fill_random(&mut signal);
        let mut spectrum = vec![Complex64::default(); len];

        group.bench_function(BenchmarkId::new("RustFFT Forward", len), |b| {
            b.iter(|| backend.forward(&signal, &mut spectrum));
        });
    }
    group.finish();
}

fn benchmark_signal_generation(c: &mut Criterion) {
    c.bench_function("gen_random_signal 4096", |b| {
        let mut signal = vec![0.0_f64; DEFAULT_SIGNAL_LEN];
        b.iter(|| gen_random_signal(&mut signal));
    });
}

criterion_group!(benches, benchmark_forward_f64, benchmark_signal_generation);
criterion_main!(benches);
