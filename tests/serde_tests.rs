use portable_document::element::DocumentType;
use portable_document::{BinaryString, EndOfLine, WriterOptions};

#[test]
fn test_binary_string_keeps_null_and_empty_apart() {
    let null = serde_json::to_string(&BinaryString::NULL).unwrap();
    let empty = serde_json::to_string(&BinaryString::new(Vec::new())).unwrap();

    assert_eq!(null, "null");
    assert_eq!(empty, "[]");

    let null_back: BinaryString = serde_json::from_str(&null).unwrap();
    let empty_back: BinaryString = serde_json::from_str(&empty).unwrap();
    assert!(null_back.is_null());
    assert_eq!(empty_back, BinaryString::new(Vec::new()));
}

#[test]
fn test_binary_string_bytes() {
    let value = BinaryString::from(b"\r\n");
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "[13,10]");

    let back: BinaryString = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_enums_use_snake_case() {
    assert_eq!(
        serde_json::to_string(&EndOfLine::CarriageReturn).unwrap(),
        "\"carriage_return\""
    );
    assert_eq!(
        serde_json::from_str::<DocumentType>("\"binary\"").unwrap(),
        DocumentType::Binary
    );
}

#[test]
fn test_writer_options_from_config() {
    let options: WriterOptions =
        serde_json::from_str(r#"{"end_of_line":"line_feed","max_line_length":128}"#).unwrap();
    assert_eq!(
        options,
        WriterOptions::new()
            .with_end_of_line(EndOfLine::LineFeed)
            .with_max_line_length(128)
    );

    let defaults: WriterOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, WriterOptions::default());
}
