use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vbridge_core::vertex::codec;
use vbridge_core::{AttributeSemantic, ComponentType, VertexLayout};

const VERTEX_COUNT: usize = 10_000;

fn packed_layout() -> VertexLayout {
    VertexLayout::builder()
        .add(AttributeSemantic::Position, 3, ComponentType::Half, false)
        .and_then(|b| b.add(AttributeSemantic::Normal, 4, ComponentType::Uint8, true))
        .and_then(|b| b.add(AttributeSemantic::TexCoord0, 2, ComponentType::Int16, true))
        .map(|b| b.with_label("packed").seal())
        .expect("valid benchmark layout")
}

fn filled_pbr_buffer() -> Vec<u8> {
    let layout = VertexLayout::pbr();
    let mut data = vec![0u8; layout.size_for(VERTEX_COUNT).unwrap()];
    for i in 0..VERTEX_COUNT {
        let t = i as f32 / VERTEX_COUNT as f32;
        codec::pack([t, 1.0 - t, 0.5, 0.0], AttributeSemantic::Position, &layout, &mut data, i)
            .unwrap();
        codec::pack([0.0, 1.0, 0.0, 0.0], AttributeSemantic::Normal, &layout, &mut data, i)
            .unwrap();
        codec::pack([1.0, 0.0, 0.0, 1.0], AttributeSemantic::Tangent, &layout, &mut data, i)
            .unwrap();
        codec::pack([t, t, 0.0, 0.0], AttributeSemantic::TexCoord0, &layout, &mut data, i)
            .unwrap();
    }
    data
}

// ---------------------------------------------------------------------------
// Single attribute access
// ---------------------------------------------------------------------------

fn bench_pack_color(c: &mut Criterion) {
    let layout = VertexLayout::position_color();
    let mut data = vec![0u8; layout.size_for(VERTEX_COUNT).unwrap()];
    c.bench_function("pack_color_unorm8", |b| {
        b.iter(|| {
            for i in 0..VERTEX_COUNT {
                codec::pack(
                    black_box([0.25, 0.5, 0.75, 1.0]),
                    AttributeSemantic::Color0,
                    &layout,
                    &mut data,
                    i,
                )
                .unwrap();
            }
        });
    });
}

fn bench_unpack_position(c: &mut Criterion) {
    let layout = VertexLayout::pbr();
    let data = filled_pbr_buffer();
    c.bench_function("unpack_position_float3", |b| {
        b.iter(|| {
            for i in 0..VERTEX_COUNT {
                black_box(codec::unpack(AttributeSemantic::Position, &layout, &data, i).unwrap());
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Whole-buffer conversion
// ---------------------------------------------------------------------------

fn bench_convert_pbr_to_packed(c: &mut Criterion) {
    let src_layout = VertexLayout::pbr();
    let dst_layout = packed_layout();
    let src = filled_pbr_buffer();
    let mut dst = vec![0u8; dst_layout.size_for(VERTEX_COUNT).unwrap()];
    c.bench_function("convert_pbr_to_packed_10k", |b| {
        b.iter(|| {
            codec::convert(&dst_layout, &mut dst, &src_layout, black_box(&src), VERTEX_COUNT)
                .unwrap();
        });
    });
}

fn bench_convert_identical(c: &mut Criterion) {
    let layout = VertexLayout::pbr();
    let src = filled_pbr_buffer();
    let mut dst = vec![0u8; src.len()];
    c.bench_function("convert_pbr_to_pbr_10k", |b| {
        b.iter(|| {
            codec::convert(&layout, &mut dst, &layout, black_box(&src), VERTEX_COUNT).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_pack_color,
    bench_unpack_position,
    bench_convert_pbr_to_packed,
    bench_convert_identical,
);
criterion_main!(benches);
