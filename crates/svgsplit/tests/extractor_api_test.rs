//! Integration tests for the Extractor API

use std::{collections::BTreeMap, fs, path::Path};

use tempfile::tempdir;

use svgsplit::{
    Extractor, Outcome, SvgSplitError,
    config::{AppConfig, FallbackBox, GeometryConfig, OutputConfig},
};

const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="500" height="500">
  <g id="electrical">
    <g id="resistor">
      <rect x="10" y="10" width="20" height="30"/>
    </g>
    <g id="lamp" transform="translate(5,5)">
      <circle cx="0" cy="0" r="10"/>
    </g>
  </g>
  <g id="wires">
    <g>
      <g id="nested-wire">
        <path d="M 0 0 L 100 0"/>
      </g>
    </g>
    <path d="M 0 0 L 50 50"/>
  </g>
  <g id="label">
    <text x="0" y="0">Hello</text>
  </g>
  <g>
    <rect id="not-a-group" width="1" height="1"/>
  </g>
</svg>
"#;

fn read_outputs(dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            let contents = fs::read_to_string(entry.path()).unwrap();
            (name, contents)
        })
        .collect()
}

fn view_box(svg: &str) -> String {
    let doc = roxmltree::Document::parse(svg).expect("output should be well-formed");
    doc.root_element().attribute("viewBox").unwrap().to_string()
}

#[test]
fn test_extract_sprite_sheet() {
    let out = tempdir().unwrap();
    let extractor = Extractor::default();
    let document = extractor.parse(SHEET).unwrap();

    let report = extractor.extract(&document, out.path()).unwrap();

    assert_eq!(
        report.extracted_ids().collect::<Vec<_>>(),
        vec!["resistor", "lamp", "wires", "nested-wire", "label"]
    );
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.fallback_boxes(), 1);
    assert!(report.output_dir().is_absolute());

    let outputs = read_outputs(out.path());
    assert_eq!(outputs.len(), 5);
    assert!(!outputs.contains_key("electrical.svg"));
}

#[test]
fn test_counts_cover_every_identified_group() {
    let out = tempdir().unwrap();
    let extractor = Extractor::default();
    let document = extractor.parse(SHEET).unwrap();

    let report = extractor.extract(&document, out.path()).unwrap();

    let identified_groups = document
        .root()
        .descendants()
        .filter(|n| n.has_tag_name("g") && n.attribute("id").is_some_and(|id| !id.is_empty()))
        .count();
    assert_eq!(report.extracted() + report.skipped(), identified_groups);
    assert_eq!(report.outcomes().len(), identified_groups);
}

#[test]
fn test_worked_example_boxes() {
    let out = tempdir().unwrap();
    let extractor = Extractor::default();
    let document = extractor.parse(SHEET).unwrap();
    extractor.extract(&document, out.path()).unwrap();

    let outputs = read_outputs(out.path());
    assert_eq!(view_box(&outputs["resistor.svg"]), "5 5 30 40");
    assert_eq!(view_box(&outputs["lamp.svg"]), "-10 -10 30 30");
    assert_eq!(view_box(&outputs["label.svg"]), "0 0 100 100");

    // The deep wire is reached through an unidentified group, so `wires`
    // stays a component and its box covers both paths.
    assert_eq!(view_box(&outputs["wires.svg"]), "-5 -5 110 60");
}

#[test]
fn test_output_document_shape() {
    let out = tempdir().unwrap();
    let extractor = Extractor::default();
    let document = extractor.parse(SHEET).unwrap();
    extractor.extract(&document, out.path()).unwrap();

    let resistor = &read_outputs(out.path())["resistor.svg"];
    assert!(resistor.starts_with("<?xml"));

    let doc = roxmltree::Document::parse(resistor).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("width"), Some("30"));
    assert_eq!(root.attribute("height"), Some("40"));
    assert_eq!(root.attribute("version"), Some("1.1"));

    let group = root.first_element_child().unwrap();
    assert_eq!(group.attribute("id"), Some("resistor"));
    assert!(group.children().any(|n| n.has_tag_name("rect")));
}

#[test]
fn test_rerun_is_idempotent() {
    let out = tempdir().unwrap();
    let extractor = Extractor::default();
    let document = extractor.parse(SHEET).unwrap();

    extractor.extract(&document, out.path()).unwrap();
    let first = read_outputs(out.path());
    extractor.extract(&document, out.path()).unwrap();
    let second = read_outputs(out.path());

    assert_eq!(first, second);
}

#[test]
fn test_output_directory_is_created() {
    let out = tempdir().unwrap();
    let nested = out.path().join("a").join("b");
    let extractor = Extractor::default();
    let document = extractor.parse(SHEET).unwrap();

    let report = extractor.extract(&document, &nested).unwrap();

    assert!(nested.is_dir());
    assert_eq!(report.extracted(), 5);
}

#[test]
fn test_write_failure_does_not_stop_siblings() {
    let out = tempdir().unwrap();
    let source = r#"<svg><g id="a/b"><rect width="1"/></g><g id="ok"><rect width="1"/></g></svg>"#;
    let extractor = Extractor::default();
    let document = extractor.parse(source).unwrap();

    let report = extractor.extract(&document, out.path()).unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.extracted_ids().collect::<Vec<_>>(), vec!["ok"]);
    assert!(matches!(&report.outcomes()[0], Outcome::Failed { id, .. } if id == "a/b"));
}

#[test]
fn test_malformed_input_is_rejected_before_output() {
    let extractor = Extractor::default();
    let err = extractor.parse("<svg><g id=\"a\"></svg>").unwrap_err();

    assert!(matches!(err, SvgSplitError::Parse { .. }));
}

#[test]
fn test_missing_input() {
    let dir = tempdir().unwrap();
    let err = Extractor::read_source(&dir.path().join("missing.svg")).unwrap_err();

    assert!(matches!(err, SvgSplitError::NotFound(_)));
}

#[test]
fn test_custom_geometry_and_output_config() {
    let out = tempdir().unwrap();
    let config = AppConfig::new(
        GeometryConfig::new(0.0, FallbackBox::new(1.0, 2.0, 3.0, 4.0)),
        OutputConfig::new("unused", 4, ""),
    );
    let source = r#"<svg><g id="box"><rect x="10" y="10" width="20" height="30"/></g><g id="empty"/></svg>"#;
    let extractor = Extractor::new(config);
    let document = extractor.parse(source).unwrap();
    extractor.extract(&document, out.path()).unwrap();

    let outputs = read_outputs(out.path());
    assert_eq!(view_box(&outputs["box.svg"]), "10 10 20 30");
    assert_eq!(view_box(&outputs["empty.svg"]), "1 2 3 4");
    assert!(!outputs["box.svg"].contains("xlink"));
    assert!(outputs["box.svg"].contains("\n    <g id=\"box\">"));
}

#[test]
fn test_internal_entities_do_not_leak_into_output() {
    let out = tempdir().unwrap();
    let source = concat!(
        r#"<!DOCTYPE svg [<!ENTITY st "fill:red">]>"#,
        r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
        r#"<g id="a" style="&st;"><rect width="10" height="10"/></g></svg>"#
    );
    let extractor = Extractor::default();
    let document = extractor.parse(source).unwrap();

    let report = extractor.extract(&document, out.path()).unwrap();
    assert_eq!(report.extracted(), 1);

    let written = &read_outputs(out.path())["a.svg"];
    let doc = roxmltree::Document::parse(written).expect("output should be well-formed");
    let group = doc.root_element().first_element_child().unwrap();
    assert_eq!(group.attribute("style"), Some("fill:red"));
    assert_eq!(view_box(written), "-5 -5 20 20");
}
