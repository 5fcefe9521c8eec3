//! Search cycle benchmarks.
//!
//! Measures the cost of one full per-keystroke cycle — clear, reset, match,
//! highlight, visibility passes — as the catalog grows and as the hit rate
//! changes. The cycle runs synchronously on every input notification, so it
//! has to stay comfortably inside a keystroke budget.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `cycle` | Full search cycle at 50% / 1% / 0% hit rates on a fixed catalog |
//! | `scaling` | Full-cycle cost as the catalog grows from 10 to 1000 controls |
//! | `clear` | Cost of the reset half alone (empty-query cycle) |
//! | `segments` | Raw text-splitting throughput on a long matched line |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench filter_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use scn_core::config::SearchConfig;
use scn_core::segments::segments;
use scn_core::{Catalog, Level, Role, SearchOverlay, SearchQuery};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Catalog construction
// ---------------------------------------------------------------------------

/// Build a catalog with `controls` controls spread over `controls / 10`
/// subdomains, each control carrying three subcontrols. Every tenth control
/// mentions "rotation" so a fixed query has a predictable hit rate.
fn build_catalog(controls: usize) -> (Catalog, SearchOverlay) {
    let mut catalog = Catalog::new();
    catalog.append_search_scaffold(&SearchConfig::default().input_id);
    let root = catalog.root();

    let per_domain = 10;
    let mut domain = None;
    let mut subdomain = None;
    for i in 0..controls {
        if i % (per_domain * 5) == 0 {
            let d = catalog.append_element(root, Role::Tier(Level::MainDomain));
            catalog.append_text(d, &format!("Domain {}", i / (per_domain * 5)));
            domain = Some(d);
        }
        if i % per_domain == 0 {
            let s = catalog
                .append_element(domain.unwrap(), Role::Tier(Level::SubDomain));
            catalog.append_text(s, &format!("Subdomain {}", i / per_domain));
            subdomain = Some(s);
        }
        let ctl = catalog.append_element(subdomain.unwrap(), Role::Tier(Level::Control));
        let name = if i % 10 == 0 {
            format!("Control {i} key rotation")
        } else {
            format!("Control {i} baseline")
        };
        catalog.append_text(ctl, &name);
        catalog.append_text(ctl, "Keep the configuration reviewed and enforced.");
        for j in 0..3 {
            let sc = catalog.append_element(ctl, Role::Tier(Level::SubControl));
            let sub_name = if i % 2 == 0 && j == 0 {
                format!("Item {i}.{j} storage")
            } else {
                format!("Item {i}.{j} process")
            };
            catalog.append_text(sc, &sub_name);
        }
    }

    let overlay = SearchOverlay::attach(&mut catalog, &SearchConfig::default())
        .expect("bench catalog carries the search scaffold");
    (catalog, overlay)
}

// ---------------------------------------------------------------------------
// Full cycle at fixed size, varying hit rate
// ---------------------------------------------------------------------------

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");

    // ~50% of subcontrols match "storage".
    group.bench_function("50pct_hit_rate_200_controls", |b| {
        let (mut catalog, overlay) = build_catalog(200);
        b.iter(|| black_box(overlay.on_input(&mut catalog, "storage")))
    });

    // ~10% of controls match "rotation"; no subcontrol does.
    group.bench_function("control_level_hits_200_controls", |b| {
        let (mut catalog, overlay) = build_catalog(200);
        b.iter(|| black_box(overlay.on_input(&mut catalog, "rotation")))
    });

    // Nothing matches: the full scan still runs, then the banner shows.
    group.bench_function("no_match_200_controls", |b| {
        let (mut catalog, overlay) = build_catalog(200);
        b.iter(|| black_box(overlay.on_input(&mut catalog, "zzzznotfound")))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling: catalog size axis
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for controls in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(controls as u64));
        group.bench_with_input(
            BenchmarkId::new("storage_query", controls),
            &controls,
            |b, &n| {
                let (mut catalog, overlay) = build_catalog(n);
                b.iter(|| black_box(overlay.on_input(&mut catalog, "storage")))
            },
        );
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Clear / reset half only
// ---------------------------------------------------------------------------

fn clear_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");

    // Each iteration starts from a freshly highlighted catalog cloned in
    // setup, so only the empty-query cycle itself is timed.
    group.bench_function("empty_query_after_search_200_controls", |b| {
        let (mut catalog, overlay) = build_catalog(200);
        overlay.on_input(&mut catalog, "storage");
        b.iter_batched_ref(
            || catalog.clone(),
            |catalog| black_box(overlay.on_input(catalog, "")),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Raw segment splitting
// ---------------------------------------------------------------------------

fn segments_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");

    let line = "storage and STORAGE plus storageBox ".repeat(64);
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("dense_matches_long_line", |b| {
        let query = SearchQuery::new("storage");
        b.iter(|| black_box(segments(&line, &query).len()))
    });

    group.finish();
}

criterion_group!(benches, cycle_bench, scaling_bench, clear_bench, segments_bench);
criterion_main!(benches);
