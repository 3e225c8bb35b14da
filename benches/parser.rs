//! Parser benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mochi_text::{MarkupParser, PassthroughParser, TerminalParser, TextParser};

fn bench_passthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("passthrough");

    // Plain text with scattered control characters
    let text = "Hello,\tWorld!\x07\r\n".repeat(100);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("controls", |b| {
        let mut parser = PassthroughParser::new();
        b.iter(|| {
            parser.reset(black_box(&text), None);
            black_box(parser.records().len())
        })
    });

    group.finish();
}

fn bench_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup");

    let markup = "${1}Error: ${7,2,0}file not found ${3,1}(retry)".repeat(50);
    group.throughput(Throughput::Bytes(markup.len() as u64));

    group.bench_function("directives", |b| {
        let mut parser = MarkupParser::new();
        b.iter(|| {
            parser.reset(black_box(&markup), None);
            black_box(parser.records().len())
        })
    });

    group.finish();
}

fn bench_terminal(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    // SGR heavy output
    let sgr = "\x1b[1;31mRed\x1b[0m \x1b[38;5;208mOrange\x1b[0m ".repeat(50);
    group.throughput(Throughput::Bytes(sgr.len() as u64));
    group.bench_function("sgr", |b| {
        let mut parser = TerminalParser::new();
        b.iter(|| {
            parser.reset(black_box(&sgr), None);
            black_box(parser.records().len())
        })
    });

    // Progress line redrawn in place
    let redraw: String = (0..100)
        .map(|i| format!("\rDownloading... {i:>3}%\x1b[K"))
        .collect();
    group.throughput(Throughput::Bytes(redraw.len() as u64));
    group.bench_function("redraw", |b| {
        let mut parser = TerminalParser::new();
        b.iter(|| {
            parser.reset(black_box(&redraw), None);
            black_box(parser.records().len())
        })
    });

    // Re-serialization
    group.bench_function("normalize", |b| {
        let mut parser = TerminalParser::new();
        b.iter(|| {
            parser.reset(black_box(&sgr), None);
            black_box(parser.normalize())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_passthrough, bench_markup, bench_terminal);

criterion_main!(benches);
