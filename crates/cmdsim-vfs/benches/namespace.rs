//! Benchmarks for namespace operations over the reference layout.

use cmdsim_types::config::ShellConfig;
use cmdsim_vfs::Namespace;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn seeded() -> Namespace {
    Namespace::seeded(&ShellConfig::default()).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns_resolve");
    let ns = seeded();

    for input in [
        "Documents",
        "..\\Public\\Desktop",
        "\\Windows\\System32\\drivers",
        "D:\\Games\\.\\Steam\\..\\Steam",
    ] {
        group.bench_function(BenchmarkId::new("resolve", input), |b| {
            b.iter(|| ns.resolve(input));
        });
    }

    group.finish();
}

fn bench_cd(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns_cd");

    group.bench_function("cd_round_trip", |b| {
        let mut ns = seeded();
        b.iter(|| {
            ns.change_directory("Documents\\projects\\hackathon").unwrap();
            ns.change_directory("C:\\Users\\Administrator").unwrap();
        });
    });

    group.finish();
}

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns_write_read");

    for n_files in [10, 100, 500] {
        let names: Vec<String> = (0..n_files).map(|i| format!("file_{i}.txt")).collect();

        group.bench_function(BenchmarkId::new("write", n_files), |b| {
            b.iter(|| {
                let mut ns = seeded();
                for name in &names {
                    ns.write_file(name, "payload");
                }
            });
        });

        let mut ns = seeded();
        for name in &names {
            ns.write_file(name, "payload");
        }
        group.bench_function(BenchmarkId::new("read", n_files), |b| {
            b.iter(|| {
                for name in &names {
                    black_box(ns.read_file(name).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns_render");
    let ns = seeded();

    group.bench_function("list_home", |b| {
        b.iter(|| ns.list(None).unwrap().to_string());
    });
    group.bench_function("tree_c_root", |b| {
        b.iter(|| ns.render_tree(Some("C:")).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_cd, bench_write_read, bench_render);
criterion_main!(benches);
