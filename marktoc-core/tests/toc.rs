#![allow(clippy::expect_used, reason = "Fine in tests")]

use marktoc_core::{
  TocError,
  TocGenerator,
  TocOptions,
  TocOptionsBuilder,
  front_matter,
};

fn generator() -> TocGenerator {
  TocGenerator::new(TocOptions::default())
}

#[test]
fn test_document_with_title() {
  let toc = generator()
    .generate("# Title\n\n## Section A\n\n## Section B\n")
    .expect("generate");
  assert_eq!(
    toc.content,
    "- [Title](#title)\n  * [Section A](#section-a)\n  * [Section \
     B](#section-b)"
  );
  assert_eq!(toc.highest, 1);
}

#[test]
fn test_document_without_first_heading() {
  let generator = TocGenerator::new(TocOptionsBuilder::new().firsth1(false).build());
  let toc = generator
    .generate("# Title\n\n## Section A\n\n## Section B\n")
    .expect("generate");
  assert_eq!(toc.content, "* [Section A](#section-a)\n* [Section B](#section-b)");
  assert_eq!(toc.highest, 2);
}

#[test]
fn test_json_output_shape() {
  let toc = generator().generate("## A\n## A\n").expect("generate");
  let json = serde_json::to_value(&toc.json).expect("serialize");
  assert_eq!(
    json,
    serde_json::json!([
      {"content": "A", "slug": "a", "level": 2, "index": 0, "duplicateOrdinal": 0},
      {"content": "A", "slug": "a-1", "level": 2, "index": 1, "duplicateOrdinal": 1}
    ])
  );
}

#[test]
fn test_structured_output_fields() {
  let toc = generator().generate("# Hi\n\ntext\n").expect("generate");
  let value = serde_json::to_value(&toc).expect("serialize");
  assert_eq!(value["content"], "- [Hi](#hi)");
  assert_eq!(value["highest"], 1);
  assert_eq!(value["tokens"][0]["type"], "heading");
  assert_eq!(value["tokens"][1]["type"], "other");
  assert_eq!(value["tokens"][1]["kind"], "paragraph");
}

#[test]
fn test_empty_document() {
  let toc = generator().generate("").expect("generate");
  assert_eq!(toc.content, "");
  assert!(toc.json.is_empty());
  assert_eq!(toc.highest, 0);
}

#[test]
fn test_deterministic_output() {
  let md = "# A\n## B *c*\n### D\n## B *c*\n";
  let first = generator().generate(md).expect("generate");
  for _ in 0..5 {
    assert_eq!(generator().generate(md).expect("generate"), first);
  }
}

#[test]
fn test_front_matter_is_not_scanned() {
  let md = "---\ntitle: Page\n---\n# Real\n";
  let toc = generator().generate(md).expect("generate");
  assert_eq!(toc.content, "- [Real](#real)");
}

#[test]
fn test_gfm_can_be_disabled() {
  let md = "# ~~gone~~ here\n";
  let gfm = generator().generate(md).expect("generate");
  assert_eq!(gfm.json[0].content, "gone here");

  let plain = TocGenerator::new(TocOptionsBuilder::new().gfm(false).build())
    .generate(md)
    .expect("generate");
  assert_eq!(plain.json[0].content, "~~gone~~ here");
}

#[test]
fn test_insert_example() {
  let result = generator()
    .insert("<!-- toc -->\n\n<!-- tocstop -->\n\n## A\n## B\n")
    .expect("insert");
  assert_eq!(
    result,
    "<!-- toc -->\n\n* [A](#a)\n* [B](#b)\n\n<!-- tocstop -->\n\n## A\n## B\n"
  );
}

#[test]
fn test_insert_round_trip() {
  let doc = "# Project\n\nSome intro.\n\n<!-- toc -->\n\n## Install\n\nRun \
             it.\n\n## Usage\n\n### CLI\n\n### Library\n";
  let once = generator().insert(doc).expect("insert");
  let twice = generator().insert(&once).expect("insert");
  assert_eq!(once, twice);
}

#[test]
fn test_insert_rejects_three_open_markers() {
  let doc = "<!-- toc -->\n# A\n<!-- toc -->\n# B\n<!-- toc -->\n# C\n";
  let err = generator().insert(doc).expect_err("three markers");
  assert!(matches!(err, TocError::MultipleTocs { .. }));
  assert!(err.to_string().contains("one table of contents"));
}

#[test]
fn test_insert_preserves_front_matter_bytes() {
  let front = "---\ntitle:   \"Spaced  out\"\nlist:\n  - a\n  - b\n---\n";
  let doc = format!("{front}<!-- toc -->\n\n# One\n## Two\n");
  let result = generator().insert(&doc).expect("insert");
  assert!(result.starts_with(front));

  let (meta, _) = front_matter::split(&result);
  assert_eq!(meta.expect("front-matter").raw, front);
}

#[test]
fn test_insert_preserves_trailing_newlines() {
  let result = generator().insert("<!-- toc -->\n# A\n\n\n").expect("insert");
  assert!(result.ends_with("# A\n\n\n"));

  let result = generator().insert("<!-- toc -->\n# A").expect("insert");
  assert!(result.ends_with("# A"));
}

#[test]
fn test_anchors_are_unique_per_document() {
  let toc = generator()
    .generate("# Foo\n# foo\n# A\n# A\n# A 1\n")
    .expect("generate");
  let slugs: Vec<_> = toc.json.iter().map(|h| h.slug.as_str()).collect();
  assert_eq!(slugs, vec!["foo", "foo-1", "a", "a-1", "a-1-1"]);
  assert_eq!(
    toc.content,
    "- [Foo](#foo)\n- [foo](#foo-1)\n- [A](#a)\n- [A](#a-1)\n- [A \
     1](#a-1-1)"
  );
}
