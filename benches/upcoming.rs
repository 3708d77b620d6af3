use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rolodex_assistant::prelude::{ContactStore, NaiveDate, Record};

// Store with `n` contacts, birthdays spread over the whole year.
fn make_store_with_n(n: usize) -> ContactStore {
    (0..n)
        .map(|i| {
            let mut record = Record::new(&format!("User{i}")).expect("valid name");
            record
                .add_phone(&format!("{:010}", i))
                .expect("valid phone");
            let day = (i % 28) + 1;
            let month = (i % 12) + 1;
            record
                .set_birthday(&format!("{day:02}.{month:02}.1990"))
                .expect("valid date");
            record
        })
        .collect()
}

fn bench_upcoming(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date");

    for n in [1_000, 10_000] {
        let store = make_store_with_n(n);
        c.bench_function(&format!("upcoming_birthdays_{n}"), |b| {
            b.iter(|| black_box(store.upcoming_birthdays(black_box(7), black_box(today))))
        });
    }
}

fn bench_add_record(c: &mut Criterion) {
    c.bench_function("add_record_1000", |b| {
        b.iter_batched(
            ContactStore::new,
            |mut store| {
                for i in 0..1_000 {
                    store.add_record(Record::new(&format!("User{i}")).expect("valid name"));
                }
                black_box(store)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_upcoming, bench_add_record);
criterion_main!(benches);
