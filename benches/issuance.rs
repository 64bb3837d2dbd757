//! Registration and issuance micro-benchmarks.

use boxoffice::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn listing(total: u64, price: u64) -> EventListing {
    EventListing {
        name: "RustConf".to_string(),
        date: "2026-09-12".to_string(),
        location: "Portland".to_string(),
        image_uri: "ipfs://QmTicketArt".to_string(),
        total_tickets: total,
        ticket_price: price,
    }
}

fn bench_register(c: &mut Criterion) {
    let organizer = AccountId::from("organizer");
    c.bench_function("register_event", |b| {
        b.iter_batched(
            || BoxOffice::new("admin"),
            |office| {
                office
                    .events
                    .register("E1", &organizer, listing(1_000, 50))
                    .unwrap();
                office
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_issue(c: &mut Criterion) {
    let organizer = AccountId::from("organizer");
    let buyer = AccountId::from("buyer");
    c.bench_function("issue_ticket", |b| {
        b.iter_batched(
            || {
                let office = BoxOffice::new("admin");
                office
                    .events
                    .register("E1", &organizer, listing(1_000, 50))
                    .unwrap();
                office
            },
            |office| {
                office.tickets.issue("E1", &buyer, 50).unwrap();
                office
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_stats_read(c: &mut Criterion) {
    let organizer = AccountId::from("organizer");
    let office = BoxOffice::new("admin");
    office
        .events
        .register("E1", &organizer, listing(1_000, 50))
        .unwrap();
    office.tickets.issue("E1", &AccountId::from("a"), 50).unwrap();

    c.bench_function("stats_read", |b| {
        b.iter(|| office.events.stats("E1").unwrap())
    });
}

criterion_group!(benches, bench_register, bench_issue, bench_stats_read);
criterion_main!(benches);
