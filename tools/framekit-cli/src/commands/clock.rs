//! Measure a live frame clock.

use std::time::Duration;

use framekit_common::clock::FrameClock;
use framekit_common::FrameKitError;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ClockReport {
    started_at: String,
    target_fps: u32,
    frames: u32,
    elapsed_secs: f64,
    mean_delta_secs: f64,
    min_delta_secs: f64,
    max_delta_secs: f64,
    estimated_fps: f64,
}

pub async fn run(target_fps: u32, frames: u32, json: bool) -> anyhow::Result<()> {
    let period = super::frame_period(target_fps)?;
    if frames == 0 {
        return Err(FrameKitError::invalid_argument("--frames must be positive").into());
    }

    let started_at = chrono::Utc::now().to_rfc3339();
    let report = measure(target_fps, period, frames, started_at).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Frame clock measurement started {}", report.started_at);
        println!("  Target:        {} fps", report.target_fps);
        println!("  Frames:        {}", report.frames);
        println!("  Elapsed:       {:.4} s", report.elapsed_secs);
        println!(
            "  Delta (mean):  {:.3} ms",
            report.mean_delta_secs * 1000.0
        );
        println!(
            "  Delta (range): {:.3} .. {:.3} ms",
            report.min_delta_secs * 1000.0,
            report.max_delta_secs * 1000.0
        );
        println!("  Estimated:     {} fps", report.estimated_fps);
    }
    Ok(())
}

async fn measure(
    target_fps: u32,
    period: Duration,
    frames: u32,
    started_at: String,
) -> ClockReport {
    let mut interval = tokio::time::interval(period);
    // The first tick of a tokio interval fires immediately; start the clock
    // after it so the first delta covers a whole frame.
    interval.tick().await;
    let mut clock = FrameClock::new();

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for frame in 0..frames {
        interval.tick().await;
        let delta = clock.delta_secs();
        tracing::trace!(frame, delta, "frame");
        sum += delta;
        min = min.min(delta);
        max = max.max(delta);
    }

    ClockReport {
        started_at,
        target_fps,
        frames,
        elapsed_secs: clock.elapsed_secs(),
        mean_delta_secs: sum / f64::from(frames),
        min_delta_secs: min,
        max_delta_secs: max,
        estimated_fps: clock.estimated_frame_rate(),
    }
}
