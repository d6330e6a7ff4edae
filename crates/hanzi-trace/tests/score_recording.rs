use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use hanzi_trace::recording::Recording;
use hanzi_trace_render::backends::MockRenderer;
use hanzi_trace_render::{Backend, Configuration};
use hanzi_trace_score::StrokeScorer;

fn write_recording(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("attempt.json");
    let mut file = std::fs::File::create(&path).expect("create recording");
    file.write_all(contents.as_bytes()).expect("write recording");
    (dir, path)
}

#[test]
fn recorded_square_trace_passes_the_threshold() {
    let (_dir, path) = write_recording(
        r#"{"glyph": "口", "points": [[10, 10], [90, 10], [90, 90], [10, 90], [10, 10]]}"#,
    );
    let recording = Recording::load(&path).expect("load recording");
    let scorer = StrokeScorer::new(Arc::new(MockRenderer));
    let glyph = recording.glyph.clone().expect("glyph present");
    let score = scorer.score(&recording.to_path(), &glyph);
    assert!(score >= 80, "recorded trace scored {score}");
}

#[test]
fn recording_without_points_scores_zero() {
    let (_dir, path) = write_recording(r#"{"glyph": "口", "points": []}"#);
    let recording = Recording::load(&path).expect("load recording");
    let scorer = StrokeScorer::new(Arc::new(MockRenderer));
    let report = scorer.score_report(&recording.to_path(), "口");
    assert_eq!(report.score, 0);
    assert!(!report.has_strokes);
}

#[test]
fn mock_backend_is_constructible_through_the_registry() {
    let config = Configuration {
        backend: Backend::from_str("mock").expect("known backend"),
        font: None,
    };
    let renderer = config.create_renderer().expect("mock renderer");
    assert_eq!(renderer.name(), "mock");
}
