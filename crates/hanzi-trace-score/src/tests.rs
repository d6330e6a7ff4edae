use std::sync::Arc;

use hanzi_trace_render::backends::MockRenderer;
use hanzi_trace_types::{PenPoint, StrokePath};

use crate::StrokeScorer;

// Stroke order, direction, and stroke count are out of scope by design;
// everything below asserts coverage behavior only.

fn scorer() -> StrokeScorer {
    StrokeScorer::new(Arc::new(MockRenderer))
}

fn square_path(min: f32, max: f32) -> StrokePath {
    StrokePath::from_points(vec![
        PenPoint::new(min, min),
        PenPoint::new(max, min),
        PenPoint::new(max, max),
        PenPoint::new(min, max),
        PenPoint::new(min, min),
    ])
}

/// A square outline of the given half-size, with its bounding box pinned to
/// 0..200 by two anchor samples on the diagonal. Pinning the box means the
/// fit transform is identical for every radius, so the square's distance to
/// the glyph ink is controlled by `radius` alone.
fn anchored_square(radius: f32) -> StrokePath {
    let lo = 100.0 - radius;
    let hi = 100.0 + radius;
    StrokePath::from_points(vec![
        PenPoint::new(0.0, 0.0),
        PenPoint::new(lo, lo),
        PenPoint::new(hi, lo),
        PenPoint::new(hi, hi),
        PenPoint::new(lo, hi),
        PenPoint::new(lo, lo),
        PenPoint::new(200.0, 200.0),
    ])
}

fn metric(report: &hanzi_trace_types::ScoreReport, name: &str) -> f32 {
    report
        .details
        .iter()
        .find(|metric| metric.name == name)
        .map(|metric| metric.value)
        .unwrap_or_else(|| panic!("metric {name} missing"))
}

#[test]
fn empty_path_scores_zero() {
    let report = scorer().score_report(&StrokePath::new(), "口");
    assert_eq!(report.score, 0);
    assert!(!report.has_strokes);
}

#[test]
fn empty_glyph_scores_zero() {
    let report = scorer().score_report(&square_path(10.0, 90.0), "");
    assert_eq!(report.score, 0);
    assert!(report.has_strokes);
}

#[test]
fn glyph_without_ink_scores_zero() {
    // The mock renderer advances over whitespace without drawing.
    let report = scorer().score_report(&square_path(10.0, 90.0), " ");
    assert_eq!(report.score, 0);
    assert_eq!(metric(&report, "target_samples"), 0.0);
}

#[test]
fn traced_outline_reaches_the_reward_threshold() {
    // The mock em square fits to the same interior rect as the user path,
    // so tracing a square is a faithful tracing of the glyph outline.
    let score = scorer().score(&square_path(10.0, 90.0), "口");
    assert!(score >= 80, "traced outline scored {score}");
}

#[test]
fn saturating_coverage_caps_at_100() {
    // A dense serpentine covers the whole interior, so every glyph sample
    // has nearby ink and the 220 multiplier must clamp.
    let mut path = StrokePath::new();
    let mut leftward = false;
    let mut y = 0.0f32;
    while y <= 100.0 {
        let (from, to) = if leftward { (100.0, 0.0) } else { (0.0, 100.0) };
        path.push(from, y);
        path.push(to, y);
        leftward = !leftward;
        y += 5.0;
    }
    let score = scorer().score(&path, "口");
    assert_eq!(score, 100);
}

#[test]
fn single_dot_scores_low() {
    let path = StrokePath::from_points(vec![PenPoint::new(5.0, 5.0)]);
    let score = scorer().score(&path, "口");
    assert!(score <= 10, "single dot scored {score}");
}

#[test]
fn score_is_deterministic() {
    let scorer = scorer();
    let path = square_path(10.0, 90.0);
    assert_eq!(scorer.score(&path, "口"), scorer.score(&path, "口"));
}

#[test]
fn score_is_invariant_under_uniform_scale_and_translation() {
    let scorer = scorer();
    let base = square_path(10.0, 90.0);
    // Same square scaled by 3 and shifted by 280.
    let transformed = square_path(10.0 * 3.0 + 280.0, 90.0 * 3.0 + 280.0);
    assert_eq!(scorer.score(&base, "口"), scorer.score(&transformed, "口"));
}

#[test]
fn nearby_tracing_beats_distant_tracing() {
    let scorer = scorer();
    // 98 maps a hair inside the glyph outline, within the tolerance radius;
    // 60 maps well into the hollow interior.
    let near = scorer.score(&anchored_square(98.0), "口");
    let far = scorer.score(&anchored_square(60.0), "口");
    assert!(
        near > far,
        "near tracing ({near}) should beat distant tracing ({far})"
    );
    assert!(near >= 80, "near tracing scored {near}");
}

#[test]
fn degenerate_paths_stay_finite_and_bounded() {
    let scorer = scorer();
    let single = StrokePath::from_points(vec![PenPoint::new(42.0, 17.0)]);
    let horizontal = StrokePath::from_points(vec![
        PenPoint::new(10.0, 50.0),
        PenPoint::new(90.0, 50.0),
    ]);
    let vertical = StrokePath::from_points(vec![
        PenPoint::new(50.0, 10.0),
        PenPoint::new(50.0, 90.0),
    ]);
    for path in [&single, &horizontal, &vertical] {
        let score = scorer.score(path, "口");
        assert!(score <= 100);
    }
}

#[test]
fn wide_string_auto_fit_terminates_with_ink() {
    // Eight full-width characters cannot fit at the starting size; the
    // search must walk down and still produce visible ink.
    let report = scorer().score_report(&square_path(10.0, 90.0), "口口口口口口口口");
    assert!(metric(&report, "target_samples") > 0.0);
    assert!(metric(&report, "font_px") < 180.0);
    assert!(report.score <= 100);
}

#[test]
fn two_characters_fit_smaller_than_one() {
    let scorer = scorer();
    let one = scorer.score_report(&square_path(10.0, 90.0), "口");
    let two = scorer.score_report(&square_path(10.0, 90.0), "口口");
    assert!(metric(&two, "font_px") < metric(&one, "font_px"));
    assert!(metric(&two, "target_samples") > 0.0);
}
