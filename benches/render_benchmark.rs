//! Benchmarks for rtfdoc rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks build synthetic documents and measure RTF output.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rtfdoc::presets::color;
use rtfdoc::Document;

/// Creates a document with the given number of paragraphs and a table of
/// `rows` rows by four columns.
fn create_test_document(paragraphs: usize, rows: usize) -> Document {
    let mut doc = Document::new();

    for i in 0..paragraphs {
        let para = doc.add_paragraph();
        para.add_text(format!("Paragraph {} with some body text. ", i));
        para.add_text("Bold part").set_bold(true).set_color(color::NAVY);
        para.add_line_break();
        para.add_text("Übergrößenträger 中文 😀");
    }

    let table = doc.add_table();
    table.set_border_color(color::GRAY);
    let widths = table.cell_widths_by_ratio(&[1.0, 2.0, 2.0, 1.0]);
    for r in 0..rows {
        let row = table.add_row();
        for (c, width) in widths.iter().enumerate() {
            row.add_cell(*width)
                .add_paragraph()
                .add_text(format!("r{}c{}", r, c));
        }
    }

    doc
}

/// Benchmark the Unicode escaper on mixed text.
fn bench_escape(c: &mut Criterion) {
    let ascii = "The quick brown fox jumps over the lazy dog. ".repeat(100);
    let mixed = "Größe, 中文字符, 한국어, 😀🎉 ".repeat(100);

    c.bench_function("escape_ascii", |b| {
        b.iter(|| rtfdoc::escape_unicode(black_box(&ascii)));
    });

    c.bench_function("escape_mixed", |b| {
        b.iter(|| rtfdoc::escape_unicode(black_box(&mixed)));
    });
}

/// Benchmark rendering at various document sizes.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000].iter() {
        let doc = create_test_document(*size, *size);

        group.bench_function(format!("{}_blocks", size), |b| {
            b.iter(|| black_box(&doc).render());
        });
    }

    group.finish();
}

/// Benchmark a border cascade across a large table.
fn bench_cascade(c: &mut Criterion) {
    let mut doc = Document::new();
    let table = doc.add_table();
    for _ in 0..200 {
        let row = table.add_row();
        for _ in 0..8 {
            row.add_cell(1000);
        }
    }

    c.bench_function("cascade_200x8", |b| {
        b.iter(|| {
            table.set_border_width(black_box(25));
        });
    });
}

criterion_group!(benches, bench_escape, bench_render, bench_cascade);
criterion_main!(benches);
