use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fbdict::FileBackedDictionary;
use tempfile::TempDir;

fn bench_fbdict(c: &mut Criterion) {
    let mut group = c.benchmark_group("fbdict_group");

    // Define different input sizes to test
    let input_sizes = [1024, 2048, 4096, 8192, 16384];

    group.bench_function("fbdict_new", |b| {
        b.iter(|| {
            let temp_dir = TempDir::new().unwrap();
            let result: Result<FileBackedDictionary<Vec<u8>>, _> =
                FileBackedDictionary::new(temp_dir.path());
            black_box(result)
        })
    });

    for &size in &input_sizes {
        group.bench_function(format!("fbdict_single_set_size_{}", size), |b| {
            b.iter_batched(
                || vec![0u8; size],
                |input| {
                    let temp_dir = TempDir::new().unwrap();
                    let mut dict = FileBackedDictionary::new(temp_dir.path()).unwrap();
                    let result = dict.set("key1", input);
                    black_box(result)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("fbdict_single_overwrite_size_{}", size), |b| {
            b.iter_batched(
                || (vec![0u8; size], vec![6u8; size]),
                |(data, new_data)| {
                    let temp_dir = TempDir::new().unwrap();
                    let mut dict = FileBackedDictionary::new(temp_dir.path()).unwrap();
                    dict.set("key1", data).unwrap();
                    let result = dict.set("key1", new_data);
                    black_box(result)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("fbdict_load_size_{}", size), |b| {
            b.iter_batched(
                || {
                    let temp_dir = TempDir::new().unwrap();
                    let mut dict = FileBackedDictionary::new(temp_dir.path()).unwrap();
                    for i in 0..16 {
                        dict.set(&format!("image{:03}", i), vec![0u8; size]).unwrap();
                    }
                    temp_dir
                },
                |temp_dir| {
                    let result: Result<FileBackedDictionary<Vec<u8>>, _> =
                        FileBackedDictionary::new(temp_dir.path());
                    black_box(result)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fbdict);
criterion_main!(benches);
