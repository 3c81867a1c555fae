use authlist_processor::{Author, Database, Processor, TierList};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const FIRST: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald"];
const LAST: &[&str] = &["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth"];

/// A collaboration-sized database: 300 authors, 20 institutions and 40
/// acknowledgements, split over three tiers.
fn build_database() -> (Database, TierList) {
    let mut db = Database::default();
    for i in 0..20 {
        db.institutions
            .insert(format!("inst{i}"), format!("Institute number {i}"));
    }
    for i in 0..40 {
        db.acknowledgements
            .insert(format!("ackn{i}"), format!("{{author}} {{ackn}} grant {i}"));
    }

    let mut tiers = vec![Vec::new(), Vec::new(), Vec::new()];
    for i in 0..300 {
        let id = format!("author{i}");
        let name = format!("{} {}{}", FIRST[i % FIRST.len()], LAST[i % LAST.len()], i);
        let author = Author::new(name)
            .with_affiliations([format!("inst{}", i % 20), format!("inst{}", (i * 7) % 20)])
            .with_acknowledgements([format!("ackn{}", i % 40), format!("ackn{}", (i * 3) % 40)]);
        db.authors.insert(id.clone(), author);
        tiers[if i < 5 { 0 } else if i < 50 { 1 } else { 2 }].push(id);
    }
    (db, TierList::new(tiers))
}

fn bench_rendering(c: &mut Criterion) {
    let (db, tiers) = build_database();
    let processor = Processor::new(db, tiers);

    c.bench_function("Author block (300 authors)", |b| {
        b.iter(|| black_box(processor.author_block().unwrap()))
    });

    c.bench_function("Acknowledgement block (300 authors)", |b| {
        b.iter(|| black_box(processor.acknowledgement_block().unwrap()))
    });
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
