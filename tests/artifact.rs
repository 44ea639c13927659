//! Tests for saving and loading compiled form artifacts.
mod common;
use common::*;
use hyoka::prelude::*;
use hyoka::settings::ARTIFACT_VERSION;
use std::fs;

fn sample_submission() -> Submission {
    Submission::default()
        .with_answer("notice_period", "3 weeks")
        .with_answer("relocate", AnswerValue::choices(["yes"]))
}

#[test]
fn test_loaded_artifact_evaluates_identically() {
    let compiled = compile(create_sample_form());
    let bytes = FormArtifact::new(compiled.clone()).to_bytes().unwrap();
    let loaded = FormArtifact::from_bytes(&bytes).unwrap().into_form();
    assert_eq!(loaded, compiled);

    let submission = sample_submission();
    let original = Evaluator::new(compiled).evaluate_submission(&submission);
    let reloaded = Evaluator::new(loaded).evaluate_submission(&submission);
    assert_eq!(original, reloaded);
}

#[test]
fn test_artifact_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("hyoka-artifact-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("form.bin");
    let path = path.to_str().unwrap();

    FormArtifact::new(compile(create_sample_form()))
        .save(path)
        .unwrap();
    let evaluator = Evaluator::new(FormArtifact::from_file(path).unwrap().into_form());
    let result = evaluator
        .evaluate("notice_period", &AnswerValue::text("soon"))
        .unwrap();
    assert!(result.disqualified);
    assert_eq!(result.disqualify_reason, Some(DisqualifyReason::PatternMismatch));
    assert_eq!(result.triggered_action, stage_triggers().on_fail);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    let result = FormArtifact::from_bytes(&[0xff, 0xff, 0xff]);
    assert!(result.is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let err = FormArtifact::from_file("/definitely/not/here.bin").err().unwrap();
    assert!(matches!(err, ArtifactError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.bin"));
}

#[test]
fn test_version_mismatch_is_rejected() {
    let stale = (ARTIFACT_VERSION + 1, compile(create_sample_form()));
    let bytes = bincode::serde::encode_to_vec(&stale, bincode::config::standard()).unwrap();
    match FormArtifact::from_bytes(&bytes) {
        Err(ArtifactError::VersionMismatch { found, expected }) => {
            assert_eq!(found, ARTIFACT_VERSION + 1);
            assert_eq!(expected, ARTIFACT_VERSION);
        }
        Err(e) => panic!("Expected VersionMismatch, got {}", e),
        Ok(_) => panic!("Expected VersionMismatch, got a loaded artifact"),
    }
}
