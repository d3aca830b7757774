// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the language switch pipeline.
//!
//! Measures:
//! - A first switch, which parses the catalogue
//! - A repeated switch, which only resolves the menu labels

use criterion::{criterion_group, criterion_main, Criterion};
use lingua_nav::i18n::{EmbeddedLoader, FluentTranslator, I18n};
use lingua_nav::navigation::NavigationController;
use std::hint::black_box;
use std::sync::Arc;

fn controller() -> NavigationController {
    let translator = FluentTranslator::new(I18n::default(), Arc::new(EmbeddedLoader));
    NavigationController::new(Arc::new(translator))
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build runtime")
}

/// Benchmark a switch into a locale whose catalogue is not loaded yet.
fn bench_cold_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_rebuild");
    let rt = runtime();

    group.bench_function("cold_switch", |b| {
        b.iter(|| {
            let mut nav = controller();
            rt.block_on(nav.change_language_and_wait("fr"))
                .expect("fr ships");
            black_box(nav.state().menu_items().map(|items| items.len()));
        });
    });

    group.finish();
}

/// Benchmark toggling between two locales that are already loaded.
fn bench_warm_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_rebuild");
    let rt = runtime();
    let mut nav = controller();
    rt.block_on(nav.change_language_and_wait("en-US"))
        .expect("en-US ships");
    rt.block_on(nav.change_language_and_wait("fr"))
        .expect("fr ships");

    group.bench_function("warm_toggle", |b| {
        b.iter(|| {
            rt.block_on(nav.change_language_and_wait("en-US"))
                .expect("en-US ships");
            rt.block_on(nav.change_language_and_wait("fr"))
                .expect("fr ships");
            black_box(nav.state().menu_items().map(|items| items.len()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cold_switch, bench_warm_toggle);
criterion_main!(benches);
