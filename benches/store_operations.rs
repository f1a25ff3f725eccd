//! Benchmarks for the document load and list paths

use std::sync::Arc;

use blogstore::core::config::StorageConfig;
use blogstore::core::types::Blog;
use blogstore::service::BlogService;
use blogstore::storage::FileStore;
use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

fn seed(count: u64) -> Vec<Blog> {
    (1..=count)
        .map(|id| Blog {
            id,
            username: format!("author{}", id),
            date_created: Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap(),
            text: format!("entry number {} about nothing in particular", id),
        })
        .collect()
}

fn bench_store_operations(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        data_file: dir.path().join("blogs.json"),
    };
    let store = Arc::new(FileStore::new(&config));
    rt.block_on(async {
        store.initialize().await.unwrap();
        store.replace(&seed(1000)).await.unwrap();
    });
    let service = BlogService::new(store.clone());

    c.bench_function("load_1000_records", |b| {
        b.iter(|| rt.block_on(store.load()).unwrap())
    });

    c.bench_function("list_search_1000_records", |b| {
        b.iter(|| {
            rt.block_on(service.list(Some("entry number 9"), Some(1), Some(10)))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_store_operations);
criterion_main!(benches);
