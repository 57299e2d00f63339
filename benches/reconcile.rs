use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use syncplan::{reconcile, Record, SyncStatus};

/// Builds a local/remote pair with a realistic mix of fates: most records
/// unchanged, some edited on one side, a few conflicting, plus deletions
/// and server-side inserts.
fn make_datasets(n: u64) -> (Vec<Record>, Vec<Record>) {
    let t = Utc::now();

    let local: Vec<Record> = (0..n)
        .map(|i| {
            let (status, offset) = match i % 10 {
                0 => (SyncStatus::Edited, 60),  // newer local edit -> push
                1 => (SyncStatus::Edited, -60), // conflict -> pull
                2 => (SyncStatus::Synced, -60), // stale -> pull
                _ => (SyncStatus::Synced, 0),   // unchanged
            };
            Record::local(
                format!("rec-{i}"),
                t + Duration::seconds(offset),
                status,
                serde_json::json!({ "seq": i }),
            )
        })
        .collect();

    // Remote drops every 20th record (deletions) and appends 5% new ones.
    let mut remote: Vec<Record> = (0..n)
        .filter(|i| i % 20 != 3)
        .map(|i| Record::remote(format!("rec-{i}"), t, serde_json::json!({ "seq": i })))
        .collect();
    for i in 0..n / 20 {
        remote.push(Record::remote(
            format!("srv-{i}"),
            t,
            serde_json::json!({ "fresh": true }),
        ));
    }

    (local, remote)
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for n in [1_000u64, 10_000, 100_000] {
        let (local, remote) = make_datasets(n);
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| reconcile(&local, &remote).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
