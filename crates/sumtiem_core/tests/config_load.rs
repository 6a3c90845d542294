use std::io::Write;
use sumtiem_core::config::{CanvasSize, ConfigError};
use sumtiem_core::TimelineConfig;

#[test]
fn partial_json_keeps_defaults() {
    let config = TimelineConfig::from_json_str(
        r##"{
            "canvas": { "width": 600, "height": 900 },
            "font_size": 20,
            "palette": ["#000000"]
        }"##,
    )
    .expect("valid config");

    assert_eq!(
        config.canvas,
        CanvasSize {
            width: 600,
            height: 900
        }
    );
    assert_eq!(config.font_size, 20);
    assert_eq!(config.line_pitch(), 22);
    assert_eq!(config.column_color(2), "#000000");
    assert_eq!(config.label_width_chars, 14);
    assert_eq!(config.properties.predicate("label"), Some("rdfs:label"));
}

#[test]
fn custom_vocabulary_is_loaded() {
    let config = TimelineConfig::from_json_str(
        r#"{
            "namespaces": { "ex": "urn:ex:" },
            "properties": { "label": "ex:name" }
        }"#,
    )
    .expect("valid config");

    assert_eq!(config.namespaces.expand("ex:thing"), "urn:ex:thing");
    assert_eq!(config.properties.predicate("label"), Some("ex:name"));
    assert_eq!(config.properties.predicate("date"), None);
}

#[test]
fn load_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "bar_width": 24 }}"#).expect("write config");

    let config = TimelineConfig::load(file.path()).expect("load");

    assert_eq!(config.bar_width, 24);
    assert_eq!(config.column_x(1), 10 + 24 + 10 + 190 + 10);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    let err = TimelineConfig::load(&path).unwrap_err();

    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{ "font_size": 0 }"#,
        r#"{ "line_height": 0.0 }"#,
        r#"{ "label_width_chars": 0 }"#,
        r#"{ "palette": [] }"#,
    ] {
        let err = TimelineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "accepted `{json}`");
    }
}

#[test]
fn malformed_json_is_reported() {
    let err = TimelineConfig::from_json_str("{ font_size: 1 }").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
