use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use emg_synth::{EmgSynthesizer, SpikeMatrix, SynthConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UNIT_COUNTS: &[usize] = &[1, 8, 32, 128];
const HORIZONS: &[usize] = &[1_000, 5_000, 20_000];
const FIRE_PROBABILITY: f64 = 0.02;

fn random_matrix(units: usize, samples: usize, seed: u64) -> SpikeMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<u8>> = (0..units)
        .map(|_| {
            (0..samples)
                .map(|_| u8::from(rng.gen_bool(FIRE_PROBABILITY)))
                .collect()
        })
        .collect();
    SpikeMatrix::from_rows(&rows).unwrap()
}

fn benchmark_sequential_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis_sequential");
    let synthesizer = EmgSynthesizer::new(SynthConfig::default()).unwrap();

    for &units in UNIT_COUNTS {
        for &samples in HORIZONS {
            group.throughput(Throughput::Elements(samples as u64));
            group.bench_with_input(
                BenchmarkId::new("synthesize", format!("{}units_{}samples", units, samples)),
                &(units, samples),
                |b, &(units, samples)| {
                    let spikes = random_matrix(units, samples, 42);
                    b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(7);
                        synthesizer.synthesize(black_box(&spikes), &mut rng).unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_parallel_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis_parallel");
    let synthesizer = EmgSynthesizer::new(SynthConfig::default()).unwrap();

    for &units in &[32usize, 128] {
        for &samples in HORIZONS {
            group.throughput(Throughput::Elements(samples as u64));
            group.bench_with_input(
                BenchmarkId::new("synthesize_parallel", format!("{}units_{}samples", units, samples)),
                &(units, samples),
                |b, &(units, samples)| {
                    let spikes = random_matrix(units, samples, 42);
                    b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(7);
                        synthesizer
                            .synthesize_parallel(black_box(&spikes), &mut rng)
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_matrix_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("spike_matrix");

    for &units in &[8usize, 128] {
        group.bench_with_input(
            BenchmarkId::new("from_rows", format!("{}units", units)),
            &units,
            |b, &units| {
                let mut rng = StdRng::seed_from_u64(3);
                let rows: Vec<Vec<u8>> = (0..units)
                    .map(|_| (0..5_000).map(|_| u8::from(rng.gen_bool(0.02))).collect())
                    .collect();
                b.iter(|| SpikeMatrix::from_rows(black_box(&rows)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sequential_synthesis,
    benchmark_parallel_synthesis,
    benchmark_matrix_validation
);
criterion_main!(benches);
