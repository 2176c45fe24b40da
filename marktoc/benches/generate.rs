#![allow(clippy::unwrap_used, reason = "Fine in benchmarks")]
use std::{fmt::Write, hint::black_box};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use marktoc_core::{TocGenerator, TocOptions};

const DOC_SMALL: &str = r"# Project

Some introduction text.

## Installation

```sh
cargo install project
```

## Usage

Run it with `--help`.

### Options

| Flag | Meaning |
|------|---------|
| `-v` | verbose |

## License <small>MPL-2.0</small>
";

/// A long document with repeated, nested and decorated headings.
fn doc_large() -> String {
  let mut doc = String::from("---\ntitle: Large\n---\n\n# Reference\n\n");
  for section in 0..200 {
    let _ = write!(
      doc,
      "## Section {section}\n\nParagraph with *emphasis* and a [link](https://example.com).\n\n### \
       `api::call_{section}()`\n\n#### Details\n\nMore text.\n\n"
    );
  }
  doc
}

fn bench_generate(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate");
  let generator = TocGenerator::new(TocOptions::default());
  let large = doc_large();

  group.bench_with_input(BenchmarkId::new("default", "small"), &DOC_SMALL, |b, doc| {
    b.iter(|| generator.generate(black_box(doc)).unwrap());
  });

  group.bench_with_input(
    BenchmarkId::new("default", "large"),
    &large.as_str(),
    |b, doc| {
      b.iter(|| generator.generate(black_box(doc)).unwrap());
    },
  );

  group.finish();
}

fn bench_insert(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert");
  let generator = TocGenerator::new(TocOptions::default());
  let fresh = format!("<!-- toc -->\n\n{}", doc_large());
  let existing = generator.insert(&fresh).unwrap();

  group.bench_with_input(BenchmarkId::new("marker", "large"), &fresh.as_str(), |b, doc| {
    b.iter(|| generator.insert(black_box(doc)).unwrap());
  });

  group.bench_with_input(
    BenchmarkId::new("replace", "large"),
    &existing.as_str(),
    |b, doc| {
      b.iter(|| generator.insert(black_box(doc)).unwrap());
    },
  );

  group.finish();
}

criterion_group!(benches, bench_generate, bench_insert);
criterion_main!(benches);
