use criterion::{Criterion, criterion_group, criterion_main};
use wikitext_common::{PlaceholderTable, escape_nowiki_text};

fn generate_nowiki_body(lines: usize) -> String {
    let mut body = String::new();
    for i in 0..lines {
        body.push_str(&format!(
            "* item {i} with [[link|text]] and {{{{tmpl|a={i}}}}} __NOTOC__ café\n"
        ));
        body.push_str("plain prose without any markup at all, repeated for weight\n");
    }
    body
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    let content = generate_nowiki_body(500);
    group.bench_function("escape_nowiki_text", |b| {
        b.iter(|| escape_nowiki_text(std::hint::black_box(&content)));
    });

    let plain = "no markup ".repeat(5_000);
    group.bench_function("escape_nowiki_text_plain", |b| {
        b.iter(|| escape_nowiki_text(std::hint::black_box(&plain)));
    });

    group.finish();
}

fn bench_substitute(c: &mut Criterion) {
    let mut table = PlaceholderTable::new();
    let mut page = String::new();
    for i in 0..1_000 {
        let marker = table.insert(format!("expanded {i}")).unwrap();
        page.push_str("text between ");
        page.push(marker);
    }

    c.bench_function("substitute_1000", |b| {
        b.iter(|| table.substitute(std::hint::black_box(&page), |v| v.clone()));
    });
}

criterion_group!(benches, bench_escape, bench_substitute);
criterion_main!(benches);
