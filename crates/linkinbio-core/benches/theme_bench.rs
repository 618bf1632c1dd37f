//! Benchmarks for theme resolution and class merging
//!
//! Run with: cargo bench -p linkinbio-core
//!
//! Every card render performs a dozen cascade lookups and merges, so these
//! set the per-card baseline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkinbio_core::render::{dispatch, RenderContext};
use linkinbio_core::theme::{merge_classes, Category, Scope, Size, SubElement};
use linkinbio_core::{CardRecord, IsoCurrencyFormatter, ThemeConfig, ThemeResolver};
use serde_json::json;

fn sample_theme() -> ThemeConfig {
    ThemeConfig::from_value(json!({
        "colors": { "primary": "#0f0f0f" },
        "font": { "button": { "className": "font-mono uppercase" } },
        "container": { "className": "bg-neutral-950 text-white" },
        "links": {
            "background": { "className": "bg-white/10 border border-white/20" },
            "thumbnailImage": { "className": "rounded-md", "width": 40, "height": 40 },
            "md": {
                "background": { "className": "bg-white/5" },
                "preview": {
                    "buttonPosition": "end",
                    "thumbnailImage": { "width": 96, "height": 96 },
                    "button": { "className": "bg-white text-black" }
                }
            }
        }
    }))
    .expect("valid theme")
}

// ============================================================================
// Merge Benchmarks
// ============================================================================

fn bench_merge(c: &mut Criterion) {
    c.bench_function("merge_three_levels", |b| {
        b.iter(|| {
            black_box(merge_classes([
                "p-2 min-h-14 rounded-full h-auto w-full relative text-center flex items-center gap-4",
                "bg-white/10 border border-white/20 text-sm",
                "bg-black text-red-500 px-4 hover:bg-gray-900",
            ]))
        })
    });
}

// ============================================================================
// Resolution Benchmarks
// ============================================================================

fn bench_resolve(c: &mut Criterion) {
    let theme = sample_theme();
    let resolver = ThemeResolver::new(&theme);
    let scope = Scope::new(Category::Links)
        .size(Size::Md)
        .element(SubElement::ThumbnailImage)
        .preview(true);

    let mut group = c.benchmark_group("resolve");
    group.bench_function("scalar", |b| b.iter(|| black_box(resolver.width(&scope))));
    group.bench_function("class_name", |b| {
        b.iter(|| black_box(resolver.class_name(&scope)))
    });
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let theme = sample_theme();
    let ctx = RenderContext::new(&theme, &IsoCurrencyFormatter);
    let card: CardRecord = serde_json::from_value(json!({
        "size": "md",
        "title": "Preset pack",
        "description": "Twelve presets",
        "price": 19.99,
        "currency": "USD",
        "polarCheckoutLink": "https://buy.polar.sh/x"
    }))
    .expect("valid card");

    c.bench_function("dispatch_medium_card", |b| {
        b.iter(|| black_box(dispatch(&card, &ctx)))
    });
}

criterion_group!(merge_benches, bench_merge);
criterion_group!(resolve_benches, bench_resolve, bench_dispatch);
criterion_main!(merge_benches, resolve_benches);
