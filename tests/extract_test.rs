//! Integration tests for extraction through the public API.

use std::collections::BTreeSet;
use std::io::Write;

use scrapedoc::render::{render, to_json, JsonFormat, RenderOptions};
use scrapedoc::{
    extract, extract_file, extract_file_auto, Error, ExtractOptions, Format, Heading, Link,
    Warning,
};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_object_values_become_text() {
    let extraction = extract(r#"{"a": "1", "b": 2}"#, Format::Json).unwrap();

    assert!(extraction.warnings.is_empty());
    assert_eq!(
        to_json(&extraction.document, JsonFormat::Compact).unwrap(),
        r#"{"a":"1","b":"2"}"#
    );
}

#[test]
fn test_object_count_mismatch_keeps_zipped_prefix() {
    let extraction = extract(r#"{"a": "1", "b": , "c": 3}"#, Format::Json).unwrap();
    let doc = extraction.document.as_object().unwrap();

    assert_eq!(doc.len(), 2);
    assert_eq!(
        extraction.warnings,
        vec![Warning::KeyValueMismatch { keys: 3, values: 2 }]
    );
}

#[test]
fn test_markup_element() {
    let extraction = extract(r#"<x attr="1">hi</x>"#, Format::Xml).unwrap();

    assert!(extraction.warnings.is_empty());
    assert_eq!(
        to_json(&extraction.document, JsonFormat::Compact).unwrap(),
        r#"{"x":{"attributes":{"attr":"1"},"content":"hi"}}"#
    );
}

#[test]
fn test_tabular_quoted_field() {
    let extraction = extract(r#"a,"b,c",d"#, Format::Csv).unwrap();
    let rows = &extraction.document.as_tabular().unwrap().rows;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["a", "b,c", "d"]);
}

#[test]
fn test_tabular_inconsistent_rows() {
    let extraction = extract("a,b\na,b,c", Format::Csv).unwrap();

    assert_eq!(
        extraction.warnings,
        vec![Warning::InconsistentColumns(BTreeSet::from([2, 3]))]
    );
    assert_eq!(extraction.document.len(), 2);
}

#[test]
fn test_bibliographic_entry() {
    let extraction = extract("@article{key1, author = {Ana}, title = {T}}", Format::Bib).unwrap();

    assert!(extraction.warnings.is_empty());
    assert_eq!(
        to_json(&extraction.document, JsonFormat::Compact).unwrap(),
        r#"{"key1":{"type":"article","fields":{"author":"Ana","title":"T"}}}"#
    );
}

#[test]
fn test_markdown_headers_and_links() {
    let extraction = extract("# Title\n[text](url)", Format::Md).unwrap();
    let doc = extraction.document.as_markdown().unwrap();

    assert_eq!(doc.headers, vec![Heading::new(1, "Title")]);
    assert_eq!(doc.links, vec![Link::new("text", "url")]);
}

#[test]
fn test_empty_input_boundary() {
    for text in ["", "   \n\t"] {
        assert!(matches!(
            extract(text, Format::Json),
            Err(Error::EmptyInput(Format::Json))
        ));
        assert!(matches!(
            extract(text, Format::Csv),
            Err(Error::EmptyInput(Format::Csv))
        ));

        let markup = extract(text, Format::Xml).unwrap();
        assert!(markup.document.is_empty());
        assert!(markup.warnings.is_empty());

        let markdown = extract(text, Format::Md).unwrap();
        assert!(markdown.document.is_empty());
        assert!(markdown.warnings.is_empty());
    }
}

#[test]
fn test_extraction_is_repeatable() {
    let inputs = [
        (Format::Json, r#"{"a": {"b": 1}, "c": [2, 3]}"#),
        (Format::Xml, "<a x=\"1\">t</a><b>"),
        (Format::Csv, "a,b\n\"c\"\"\",d,e"),
        (Format::Bib, "@a{k, f = {v}}\n@b{j, g = {"),
        (Format::Md, "## h\n[l](t)"),
    ];

    for (format, text) in inputs {
        let first = extract(text, format).unwrap();
        let second = extract(text, format).unwrap();
        assert_eq!(first, second, "{} extraction differs between runs", format);
    }
}

#[test]
fn test_render_table_and_forced_json() {
    let extraction = extract("a,b\nc,d", Format::Csv).unwrap();

    let table = render(&extraction.document, &RenderOptions::default()).unwrap();
    assert_eq!(table, "a | b\nc | d");

    let options = RenderOptions::new().with_force_json(true);
    let json = render(&extraction.document, &options).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains('\n'));
}

#[test]
fn test_render_non_tabular_is_json() {
    let extraction = extract("# T", Format::Md).unwrap();
    let output = render(
        &extraction.document,
        &RenderOptions::new().with_json_format(JsonFormat::Compact),
    )
    .unwrap();
    assert_eq!(output, r#"{"headers":[{"level":1,"title":"T"}],"links":[]}"#);
}

#[test]
fn test_extract_file_with_format() {
    let file = write_temp(".txt", "x;y\n1;2\n");
    let options = ExtractOptions::new().with_delimiter(';');

    let extraction = extract_file(file.path(), Format::Csv, &options).unwrap();
    assert_eq!(extraction.document.len(), 2);
}

#[test]
fn test_extract_file_auto_detects_format() {
    let file = write_temp(".md", "# Notes\nsee [home](/)\n");

    let extraction = extract_file_auto(file.path(), &ExtractOptions::default()).unwrap();
    assert_eq!(extraction.document.format(), Format::Md);
}

#[test]
fn test_extract_file_missing() {
    let result = extract_file("no/such/file.json", Format::Json, &ExtractOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_strict_options_fail_on_incomplete_entry() {
    let options = ExtractOptions::new().strict();
    let file = write_temp(".bib", "@book{k, title = \n");

    let result = extract_file_auto(file.path(), &options);
    assert!(matches!(result, Err(Error::Malformed(Warning::IncompleteEntry))));
}
