use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netlog::capture::{CaptureStore, StaticBody};
use netlog::curl::synthesize;
use netlog::export::export_log;
use netlog::filter::UrlFilter;
use netlog::har::{ExchangeRecord, PostData};
use std::sync::Arc;

fn browser_record() -> ExchangeRecord {
    ExchangeRecord::new("POST", "https://en.wikipedia.org/w/api.php?action=query&format=json")
        .with_header(":authority", "en.wikipedia.org")
        .with_header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        )
        .with_header("Accept-Encoding", "gzip, deflate, br")
        .with_header("Accept-Language", "en-GB,en;q=0.9")
        .with_header(
            "Cookie",
            "WMF-Last-Access=xxxxxxxxxxx; GeoIP=xxxxxxxxxxxxxxxxxxxxxxxxxxx; NetworkProbeLimit=0.001",
        )
        .with_header("Content-Length", "64")
        .with_header("Sec-Fetch-Mode", "cors")
        .with_header(
            "User-Agent",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36",
        )
        .with_post_data(PostData::text("{\n  \"titles\": \"Rust (programming language)\",\n  \"it's\": true\n}"))
}

fn benchmark_synthesize(c: &mut Criterion) {
    let record = browser_record();
    c.bench_function("curl_synthesize", |b| b.iter(|| synthesize(black_box(&record))));
}

fn benchmark_filter(c: &mut Criterion) {
    let urls: Vec<String> = (0..200)
        .map(|i| format!("https://cdn{}.example.com/assets/{}/bundle.{}.js", i % 7, i, i))
        .collect();

    c.bench_function("filter_compile_and_match", |b| {
        b.iter(|| {
            let filter = UrlFilter::compile(black_box("*/assets/*.js"));
            urls.iter().filter(|u| filter.is_match(u)).count()
        })
    });
}

fn benchmark_export(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut store = CaptureStore::new();
    for _ in 0..50 {
        store.append(browser_record(), Arc::new(StaticBody::new("{\"batchcomplete\":\"\"}")));
    }

    c.bench_function("export_50_entries", |b| {
        b.to_async(&runtime)
            .iter(|| async { export_log(&store, "").await.unwrap() })
    });
}

criterion_group!(benches, benchmark_synthesize, benchmark_filter, benchmark_export);
criterion_main!(benches);
