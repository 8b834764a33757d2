use criterion::{Criterion, criterion_group, criterion_main};
use markdown_subscript_engine::{Extender, Markdown, StrikethroughExtension, SubscriptExtension};
use pulldown_cmark::{Options, Parser, html};
mod common;

fn markdown() -> Markdown {
    Markdown::new().with_extensions([&SubscriptExtension as &dyn Extender, &StrikethroughExtension])
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new_ext(std::hint::black_box(&content), Options::ENABLE_STRIKETHROUGH);
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    let md = markdown();
    group.bench_function("markdown_subscript", |b| {
        b.iter(|| std::hint::black_box(md.convert(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_tilde_heavy_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilde_heavy_line");
    group.sample_size(10);

    let md = markdown();
    for size in [10, 100, 1000] {
        let line = common::generate_tilde_heavy_line(size);
        group.bench_function(format!("{size}"), |b| {
            b.iter(|| std::hint::black_box(md.convert(std::hint::black_box(&line))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_tilde_heavy_line);
criterion_main!(benches);
