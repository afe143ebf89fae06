use criterion::{criterion_group, criterion_main, Criterion};

// Placeholder rendering at each stock size; the bench is a no-op without `draw`.
fn bench_placeholder(c: &mut Criterion) {
    #[cfg(feature = "draw")]
    {
        use iconsmith::placeholder::render_placeholder;
        use iconsmith::{IconConfig, ICON_SIZES};

        let cfg = IconConfig::default();
        for size in ICON_SIZES {
            c.bench_function(&format!("render_placeholder_{}", size), |b| {
                b.iter(|| render_placeholder(size, &cfg))
            });
        }
    }
    #[cfg(not(feature = "draw"))]
    let _ = c;
}

criterion_group!(benches, bench_placeholder);
criterion_main!(benches);
