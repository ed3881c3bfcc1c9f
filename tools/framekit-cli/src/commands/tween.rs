//! Sample a tween frame by frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use framekit_common::clock::{ManualTimeSource, MonotonicTimeSource, TimeSource};
use framekit_common::FrameKitError;
use framekit_motion::{Easing, FrameAnimator, FrameQueue, Tween};
use serde::Serialize;

/// Upper bound on sampled frames, whatever the duration and rate.
const MAX_FRAMES: usize = 100_000;

pub struct TweenArgs {
    pub from: f64,
    pub to: f64,
    pub duration_secs: f64,
    pub easing: String,
    pub fps: u32,
    pub realtime: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct Sample {
    frame: usize,
    time_secs: f64,
    value: f64,
}

#[derive(Debug, Serialize)]
struct TweenReport {
    from: f64,
    to: f64,
    duration_secs: f64,
    easing: String,
    fps: u32,
    realtime: bool,
    completed: bool,
    samples: Vec<Sample>,
}

pub async fn run(args: TweenArgs) -> anyhow::Result<()> {
    let period = super::frame_period(args.fps)?;
    if !args.duration_secs.is_finite() {
        return Err(FrameKitError::invalid_argument(format!(
            "--duration must be finite (got {})",
            args.duration_secs
        ))
        .into());
    }
    let easing: Easing = args.easing.parse()?;
    let easing_name = easing.to_string();
    let tween = Tween::new(args.from, args.to, args.duration_secs).with_easing(easing);

    tracing::info!(
        from = args.from,
        to = args.to,
        duration_secs = args.duration_secs,
        easing = %easing_name,
        fps = args.fps,
        realtime = args.realtime,
        "sampling tween"
    );

    let (samples, completed) = if args.realtime {
        sample_realtime(tween, period).await
    } else {
        sample_simulated(tween, args.fps)
    };

    let report = TweenReport {
        from: args.from,
        to: args.to,
        duration_secs: args.duration_secs,
        easing: easing_name,
        fps: args.fps,
        realtime: args.realtime,
        completed,
        samples,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }
    Ok(())
}

/// Step simulated time by exactly one frame interval per frame.
fn sample_simulated(tween: Tween, fps: u32) -> (Vec<Sample>, bool) {
    let time = ManualTimeSource::new(0.0);
    let frames = FrameQueue::new();
    let animator = FrameAnimator::new(time.clone(), frames.clone());
    let frame_ms = 1000.0 / f64::from(fps);

    let (samples, completed) = record(&animator, tween);
    let mut frame = 0;
    while !frames.is_idle() && frame < MAX_FRAMES {
        frames.run_frame();
        time.advance_ms(frame_ms);
        frame += 1;
    }

    let samples = samples.take();
    let completed = *completed.borrow();
    (samples, completed)
}

/// Drain the frame queue from a real timer.
async fn sample_realtime(tween: Tween, period: Duration) -> (Vec<Sample>, bool) {
    let time = MonotonicTimeSource::new();
    let frames = FrameQueue::new();
    let animator = FrameAnimator::new(time, frames.clone());

    let (samples, completed) = record(&animator, tween);
    let mut interval = tokio::time::interval(period);
    let mut frame = 0;
    while !frames.is_idle() && frame < MAX_FRAMES {
        interval.tick().await;
        frames.run_frame();
        frame += 1;
    }

    let samples = samples.take();
    let completed = *completed.borrow();
    (samples, completed)
}

type Recorded = (Rc<RefCell<Vec<Sample>>>, Rc<RefCell<bool>>);

fn record<T>(animator: &FrameAnimator<T, FrameQueue>, tween: Tween) -> Recorded
where
    T: TimeSource + Clone + 'static,
{
    let samples = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(RefCell::new(false));

    let sink = Rc::clone(&samples);
    let time = animator.time_source().clone();
    let started_ms = time.now_ms();
    let done = Rc::clone(&completed);

    animator.animate_then(
        tween,
        move |value| {
            let mut samples = sink.borrow_mut();
            let frame = samples.len();
            samples.push(Sample {
                frame,
                time_secs: (time.now_ms() - started_ms) / 1000.0,
                value,
            });
        },
        move |end| {
            tracing::debug!(end, "tween complete");
            *done.borrow_mut() = true;
        },
    );

    (samples, completed)
}

fn print_table(report: &TweenReport) {
    println!(
        "Tween {} -> {} over {}s ({}, {} fps{})",
        report.from,
        report.to,
        report.duration_secs,
        report.easing,
        report.fps,
        if report.realtime { ", realtime" } else { "" }
    );
    println!("{:>6}  {:>9}  {:>14}", "frame", "time (s)", "value");
    for sample in &report.samples {
        println!(
            "{:>6}  {:>9.4}  {:>14.6}",
            sample.frame, sample.time_secs, sample.value
        );
    }
    if report.completed {
        println!("Completed after {} frames.", report.samples.len());
    } else {
        println!("Stopped after {} frames without completing.", report.samples.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_linear_samples() {
        let (samples, completed) = sample_simulated(Tween::new(0.0, 10.0, 0.5), 4);
        assert!(completed);
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0]);
        assert_eq!(samples[2].time_secs, 0.5);
    }

    #[test]
    fn test_simulated_zero_duration_has_single_sample() {
        let (samples, completed) = sample_simulated(Tween::new(1.0, 2.0, 0.0), 60);
        assert!(completed);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value, 2.0);
    }

    #[tokio::test]
    async fn test_rejects_zero_fps() {
        let args = TweenArgs {
            from: 0.0,
            to: 1.0,
            duration_secs: 1.0,
            easing: "linear".to_string(),
            fps: 0,
            realtime: false,
            json: true,
        };
        assert!(run(args).await.is_err());
    }

    #[tokio::test]
    async fn test_rejects_unbounded_fps() {
        let args = TweenArgs {
            from: 0.0,
            to: 1.0,
            duration_secs: 1.0,
            easing: "linear".to_string(),
            fps: u32::MAX,
            realtime: true,
            json: true,
        };
        let err = run(args).await.unwrap_err();
        assert!(err.to_string().contains("--fps must be between"));
    }

    #[tokio::test]
    async fn test_rejects_unknown_easing() {
        let args = TweenArgs {
            from: 0.0,
            to: 1.0,
            duration_secs: 1.0,
            easing: "wobble".to_string(),
            fps: 30,
            realtime: false,
            json: true,
        };
        let err = run(args).await.unwrap_err();
        assert!(err.to_string().contains("unknown easing"));
    }

    #[tokio::test]
    async fn test_realtime_completes() {
        let (samples, completed) =
            sample_realtime(Tween::new(0.0, 1.0, 0.05), Duration::from_millis(5)).await;
        assert!(completed);
        assert_eq!(samples.last().map(|s| s.value), Some(1.0));
    }
}
