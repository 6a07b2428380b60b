use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glam::IVec3;
use voxsculpt::mesh::{reconstruct, synthesize_into, FlatMesh};
use voxsculpt::voxel::{FaceColor, VoxelSet};

fn solid_block(extent: i32) -> VoxelSet {
    let mut set = VoxelSet::new();
    for z in 0..extent {
        for y in 0..extent {
            for x in 0..extent {
                set.try_add(IVec3::new(x, y, z), FaceColor::WHITE);
            }
        }
    }
    set
}

fn bench_synthesize_8(c: &mut Criterion) {
    let set = solid_block(8);

    c.bench_function("synthesize_8x8x8", |b| {
        let mut mesh = FlatMesh::new();
        b.iter(|| {
            synthesize_into(black_box(&set), black_box(1.0), &mut mesh);
        });
    });
}

fn bench_synthesize_16(c: &mut Criterion) {
    let set = solid_block(16);

    c.bench_function("synthesize_16x16x16", |b| {
        let mut mesh = FlatMesh::new();
        b.iter(|| {
            synthesize_into(black_box(&set), black_box(1.0), &mut mesh);
        });
    });
}

fn bench_reconstruct_8(c: &mut Criterion) {
    let set = solid_block(8);
    let mut mesh = FlatMesh::new();
    synthesize_into(&set, 1.0, &mut mesh);

    c.bench_function("reconstruct_8x8x8", |b| {
        b.iter(|| reconstruct(black_box(&mesh), FaceColor::WHITE, 1.0).unwrap());
    });
}

criterion_group!(
    benches,
    bench_synthesize_8,
    bench_synthesize_16,
    bench_reconstruct_8
);
criterion_main!(benches);
