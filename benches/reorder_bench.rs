use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use map_layer_editor::app::use_cases::reorder::apply_drop;
use map_layer_editor::core::sample::sample_document;
use map_layer_editor::core::tree::{build_tree, ensure_loaded, ensure_loaded_recursive};
use map_layer_editor::core::{Layer, LayerSource, StyleKind, ZoomRange};
use map_layer_editor::{AppState, MapDocument, OverlayKey, OverlayKind};
use std::hint::black_box;

fn build_synthetic_document(layer_count: usize) -> MapDocument {
    let mut doc = MapDocument::new("Benchmark");
    let key = OverlayKey::new("main");
    doc.add_overlay(key.clone(), "Main", OverlayKind::Layer);

    for index in 0..layer_count {
        let id = doc.new_layer_id();
        doc.add_layer_to_overlay(
            &key,
            Layer::feature(id, format!("Layer {index}"), LayerSource::InMemory),
        );
        doc.add_composite_style(
            id,
            "Standard",
            ZoomRange::all(),
            &[("Fläche", StyleKind::Area), ("Linie", StyleKind::Line)],
        );
    }

    doc
}

fn loaded_state(layer_count: usize) -> AppState {
    let mut state = AppState::with_document(build_synthetic_document(layer_count));
    let overlays = state.tree.children(state.tree.root()).to_vec();
    for overlay in overlays {
        ensure_loaded(&mut state.tree, &state.document, overlay);
    }
    state
}

fn bench_tree_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_loading");

    for layer_count in [100usize, 1_000] {
        let doc = build_synthetic_document(layer_count);
        group.bench_with_input(
            BenchmarkId::new("load_recursive", layer_count),
            &doc,
            |b, doc| {
                b.iter(|| {
                    let mut tree = build_tree(doc);
                    let root = tree.root();
                    ensure_loaded_recursive(&mut tree, doc, root);
                    black_box(tree.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_layer_drop(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_drop");

    for layer_count in [100usize, 1_000] {
        let mut state = loaded_state(layer_count);
        let overlay = state.tree.children(state.tree.root())[0];

        group.bench_function(BenchmarkId::new("first_to_last", layer_count), |b| {
            b.iter(|| {
                // Erster Layer ans Ende: die Reihenfolge rotiert pro Iteration
                let children = state.tree.children(overlay);
                let (first, last) = (children[0], children[children.len() - 1]);
                black_box(apply_drop(&mut state, first, last, true))
            })
        });
    }

    group.finish();
}

fn bench_sample_overlay_reorder(c: &mut Criterion) {
    let mut state = AppState::with_document(sample_document());
    let root = state.tree.root();

    c.bench_function("sample_overlay_reorder", |b| {
        b.iter(|| {
            let overlays = state.tree.children(root);
            let (second, third) = (overlays[1], overlays[2]);
            black_box(apply_drop(&mut state, third, second, false))
        })
    });
}

criterion_group!(
    benches,
    bench_tree_loading,
    bench_layer_drop,
    bench_sample_overlay_reorder
);
criterion_main!(benches);
