//! This bench measures validation throughput over a mix of accepted and
//! rejected class names.

#![allow(missing_docs)]

use chcss::{ConfigLayer, Segment, Vocabulary, VocabularySet, is_valid};
use criterion::{Criterion, criterion_group, criterion_main};

fn vocabulary() -> Vocabulary {
    let set = |tokens: &[&str]| VocabularySet::new(tokens.iter().copied()).unwrap();
    let overrides = ConfigLayer::unset()
        .with(
            Segment::Namespace,
            set(&["gf_accounts", "gf_blog", "gf_content", "gf_news"]),
        )
        .with(Segment::Function, set(&["c", "l"]))
        .with(Segment::Component, set(&["navbar", "footer", "list"]))
        .with(Segment::Modifier, set(&["reverse", "active"]));
    Vocabulary::resolve(&ConfigLayer::defaults(), None, Some(&overrides))
}

fn validate_mixed(c: &mut Criterion) {
    let vocabulary = vocabulary();
    let names = [
        "gf_news-c",
        "gf_news-c-navbar-list-ul-reverse-active",
        "gfnews-c-navbar",
        "gf_news-c-navbar-ul-li",
        "gf_news--c",
    ];

    c.bench_function("validate mixed", |b| {
        b.iter(|| {
            names
                .iter()
                .filter(|name| is_valid(std::hint::black_box(name), &vocabulary))
                .count()
        });
    });
}

criterion_group!(benches, validate_mixed);
criterion_main!(benches);
