use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use birthday_rolodex::prelude::{
    Birthday, Contact, ContactManager, ContactStore, storage::stores::SnapshotStorage,
};
use chrono::NaiveDate;
use tempfile::tempdir;

// Book with `n` contacts, every one with a phone and a birthday spread over the year.
fn make_book_with_n(n: usize) -> ContactManager {
    let mut book = ContactManager::new();
    for i in 0..n {
        let mut contact = Contact::new(format!("User{i}"));
        contact
            .add_phone(&format!("{:010}", i))
            .expect("generated phone is 10 digits");

        let birthday = format!("{:02}.{:02}.1990", i % 28 + 1, i % 12 + 1);
        contact.add_birthday(Birthday::parse(&birthday).expect("generated date is valid"));

        book.add_contact(contact);
    }
    book
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts (single add)", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                book.add_contact(Contact::new("Zoe"));
                black_box(&book);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_find(c: &mut Criterion) {
    c.bench_function("Finding in 5k contacts (last name)", |b| {
        let book = make_book_with_n(5_000);
        b.iter(|| black_box(book.find("User4999")));
    });
}

fn bench_upcoming(c: &mut Criterion) {
    c.bench_function("Upcoming birthdays over 5k contacts", |b| {
        let book = make_book_with_n(5_000);
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date");
        b.iter(|| black_box(book.upcoming_birthdays(black_box(today))));
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let dir = tempdir().expect("temp dir");
    let storage = SnapshotStorage::new(dir.path().join("addressbook.bin"));
    let book = make_book_with_n(5_000);

    c.bench_function("Saving 5k contacts snapshot", |b| {
        b.iter(|| storage.save(black_box(&book)).expect("save failed"));
    });

    c.bench_function("Loading 5k contacts snapshot", |b| {
        b.iter(|| black_box(storage.load().expect("load failed")));
    });
}

criterion_group!(benches, bench_add, bench_find, bench_upcoming, bench_snapshot);
criterion_main!(benches);
