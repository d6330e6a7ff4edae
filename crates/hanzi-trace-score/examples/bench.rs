use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use hanzi_trace_render::backends::MockRenderer;
use hanzi_trace_score::StrokeScorer;
use hanzi_trace_types::{PenPoint, StrokePath};

const ITERATIONS: usize = 2_000;

fn square(min: f32, max: f32) -> StrokePath {
    StrokePath::from_points(vec![
        PenPoint::new(min, min),
        PenPoint::new(max, min),
        PenPoint::new(max, max),
        PenPoint::new(min, max),
        PenPoint::new(min, min),
    ])
}

fn main() {
    let scorer = StrokeScorer::new(Arc::new(MockRenderer));
    let bar = ProgressBar::new(ITERATIONS as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("progress template"),
    );

    let start = Instant::now();
    let mut checksum = 0u64;
    for index in 0..ITERATIONS {
        let inset = (index % 40) as f32;
        let path = square(10.0 + inset, 190.0 - inset);
        checksum += scorer.score(&path, "口") as u64;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let elapsed = start.elapsed();
    println!(
        "{ITERATIONS} scores in {elapsed:?} ({:.0}/s, checksum {checksum})",
        ITERATIONS as f64 / elapsed.as_secs_f64()
    );
}
