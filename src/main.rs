use fftbench::{Harness, RustFftBackend, DEFAULT_SIGNAL_LEN};

fn main() {
    let backend = RustFftBackend::new(DEFAULT_SIGNAL_LEN);
    let mut harness = Harness::with_defaults(backend);

    let measurement = harness.run();
    println!("{measurement}");
}
