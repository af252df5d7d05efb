use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_stream::{copy_with_buffer_size, CharReader, DEFAULT_BUFFER_SIZE};
use rand::prelude::*;

fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

fn copy_bytes_by_buffer_size(c: &mut Criterion) {
    let input_data = generate_random_data(4 * 1024 * 1024);
    let buffer_sizes = [512, 4096, DEFAULT_BUFFER_SIZE, 65536];

    let mut group = c.benchmark_group("copy_bytes_4mb");
    group.measurement_time(std::time::Duration::from_secs(5));

    for buffer_size in buffer_sizes {
        let input = input_data.clone();
        group.bench_function(format!("buffer_{buffer_size}"), move |b| {
            b.iter(|| {
                let mut source = input.as_slice();
                let mut sink: Vec<u8> = Vec::with_capacity(input.len());
                copy_with_buffer_size(
                    black_box(&mut source),
                    &mut sink,
                    buffer_size,
                )
                .expect("copy returned an error")
            });
        });
    }

    group.finish();
}

fn copy_decoded_chars(c: &mut Criterion) {
    let text: String = "grüße, 世界! ".repeat(64 * 1024);

    let mut group = c.benchmark_group("copy_chars");
    group.measurement_time(std::time::Duration::from_secs(5));

    group.bench_function("utf8_to_string", |b| {
        b.iter(|| {
            let mut source = CharReader::new(black_box(text.as_bytes()));
            let mut sink = String::with_capacity(text.len());
            copy_with_buffer_size(&mut source, &mut sink, DEFAULT_BUFFER_SIZE)
                .expect("copy returned an error")
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = copy_bytes_by_buffer_size, copy_decoded_chars
}
criterion_main!(benches);
