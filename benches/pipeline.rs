// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use staff_search::{
    attributes::ATTRIBUTES,
    export::parse_export,
    normalize::normalize,
    rank::top_n,
    scoring::{score, Scheme},
};

/// A synthetic export shaped like the game's: banner, bordered rows, rules.
fn synthetic_export(rows: usize) -> String {
    let mut out = String::from("Staff Search\n\nPage 1 of 1\n\n");

    let mut header = String::from("| | Name |");
    for a in ATTRIBUTES {
        header.push_str(&format!(" {a} |"));
    }
    header.push_str(" Personality |\n");
    out.push_str(&header);
    out.push_str("| ------------------------------------------------ |\n");

    for r in 0..rows {
        let mut line = format!("| | Coach {r} |");
        for (i, _) in ATTRIBUTES.iter().enumerate() {
            line.push_str(&format!(" {} |", (r * 7 + i * 3) % 20 + 1));
        }
        line.push_str(" Balanced |\n");
        out.push_str(&line);
        out.push_str("| ------------------------------------------------ |\n");
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let text = synthetic_export(2_000);

    c.bench_function("parse_export", |b| {
        b.iter(|| {
            let raw = parse_export(black_box(&text)).unwrap();
            black_box(raw.row_count())
        })
    });

    c.bench_function("parse_normalize", |b| {
        b.iter(|| {
            let table = normalize(parse_export(black_box(&text)).unwrap()).unwrap();
            black_box(table.len())
        })
    });

    let base = normalize(parse_export(&text).unwrap()).unwrap();

    c.bench_function("score_rank_coaching", |b| {
        b.iter(|| {
            let mut table = base.clone();
            score(&mut table, Scheme::Coaching).unwrap();
            let cols = Scheme::Coaching.display_columns(&table);
            let report = top_n(&table, Scheme::Coaching.default_sort(), 10, &cols).unwrap();
            black_box(report.nrows())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
