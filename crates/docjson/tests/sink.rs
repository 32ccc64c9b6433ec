//! Integration tests for writing documents to file sinks.

use docjson::{
    load_model_from_json, to_vec, write_model, Model, OpenMode, Options, OutputSink, SinkError,
};
use tempfile::TempDir;

fn model() -> Model {
    load_model_from_json(
        r#"{ "types": [ {
            "name": "com.example.Greeter",
            "doc": "/**\n * Says hello.\n * @since 2.0\n */",
            "methods": [ {
                "name": "greet",
                "returns": "java.lang.String",
                "parameters": [ { "name": "who", "type": "java.lang.String" } ],
                "modifiers": ["public"],
                "doc": "/**\n * Greets.\n * @param who the addressee\n * @return the greeting\n */"
            } ]
        } ] }"#,
    )
    .expect("model should load")
}

#[test]
fn truncate_replaces_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api.json");
    std::fs::write(&path, "stale content that is longer than nothing").unwrap();

    let options = Options::default();
    write_model(&model(), &options, &OutputSink::file(&path, &options)).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, to_vec(&model(), &options).unwrap());
    let value: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(value["classes"][0]["since"], "2.0");
}

#[test]
fn append_keeps_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api.json");
    std::fs::write(&path, "prefix\n").unwrap();

    let options = Options::default().append(true);
    let sink = OutputSink::file(&path, &options);
    assert!(matches!(sink, OutputSink::File { mode: OpenMode::Append, .. }));
    write_model(&model(), &options, &sink).unwrap();
    write_model(&model(), &options, &sink).unwrap();

    let doc = String::from_utf8(to_vec(&model(), &options).unwrap()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("prefix\n{doc}{doc}"));
}

#[test]
fn missing_file_is_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.json");

    let options = Options::default().pretty(true).append(true);
    write_model(&model(), &options, &OutputSink::file(&path, &options)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("{\n  \"classes\": ["));
}

#[test]
fn unopenable_path_reports_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("api.json");

    let options = Options::default();
    let err = write_model(&model(), &options, &OutputSink::file(&path, &options)).unwrap_err();
    match err {
        SinkError::Open { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected open error, got {other}"),
    }
}

#[test]
fn reruns_into_fresh_files_are_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    let options = Options::default().pretty(true);
    write_model(&model(), &options, &OutputSink::file(&first, &options)).unwrap();
    write_model(&model(), &options, &OutputSink::file(&second, &options)).unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}
