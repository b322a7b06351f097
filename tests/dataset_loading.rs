use std::fs;

use quizr::quiz::dataset::{Dataset, DatasetError};

#[test]
fn loads_bank_from_disk_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    fs::write(
        &path,
        r#"{
            "Networking": [
                {"question": "Port for HTTPS?", "options": ["443", "80", "22"], "answer": "443"}
            ],
            "Algorithms": [
                {"question": "Quicksort average?", "options": ["n log n", "n^2"], "answer": "n log n"},
                {"question": "Binary search?", "options": ["log n", "n"], "answer": "log n"}
            ]
        }"#,
    )
    .unwrap();

    let ds = Dataset::load(&path).unwrap();
    let names: Vec<&str> = ds.chapter_names().collect();
    assert_eq!(names, vec!["Networking", "Algorithms"]);
    let algorithms = ds.chapter(1);
    assert_eq!(algorithms.len(), 2);
    assert_eq!(algorithms.questions[1].original_index, 1);
    assert_eq!(algorithms.questions[1].prompt, "Binary search?");
}

#[test]
fn invalid_bank_on_disk_reports_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{"Ch": [{"question": "q", "options": ["a", "b"], "answer": "c"}]}"#,
    )
    .unwrap();

    let err = Dataset::load(&path).unwrap_err();
    assert!(matches!(err, DatasetError::AnswerNotInOptions { .. }));
    assert!(err.to_string().contains("'c'"));
}

#[test]
fn truncated_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.json");
    fs::write(&path, r#"{"Ch": [{"question": "q", "opt"#).unwrap();
    assert!(matches!(Dataset::load(&path), Err(DatasetError::Parse(_))));
}
