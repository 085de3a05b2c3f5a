//! End-to-end pipeline tests: wiring, degraded paths, and teardown.


use head_parallax::config::Config;
use head_parallax::pipeline::TrackingPipeline;
use head_parallax::signal::HeadSignal;
use std::time::Duration;
use test_helpers::{face, FailingDetector, RecordingSink, ScriptedDetector, TickingSource};

const FRAME: Duration = Duration::from_millis(16);

/// Drive the pipeline for `frames` steps at a constant delta
fn run_frames(pipeline: &mut TrackingPipeline, sink: &mut RecordingSink, frames: u32) {
    for i in 0..frames {
        pipeline.step(FRAME * (i + 1), FRAME, sink);
    }
}

#[test]
fn test_tracked_camera_converges_on_head_position() {
    let mut config = Config::default();
    config.pipeline.depth_tracking = true;

    // Constant head pose: x = 0.3, y = -0.2, z = 0.5
    let script = vec![Some(face(0.35, 0.6, 0.1)); 700];
    let detector = ScriptedDetector::new(script);

    let mut pipeline = TrackingPipeline::new(config);
    pipeline.attach_tracker(Box::new(detector), Box::new(TickingSource::new(30)));

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 600);

    // Target: (0.3 * 8, -0.2 * 4 + 2, clamp(8 + 0.5 * 4)) = (2.4, 1.2, 10)
    let last = sink.poses.last().unwrap();
    assert!((last.position.x - 2.4).abs() < 1e-2, "x was {}", last.position.x);
    assert!((last.position.y - 1.2).abs() < 1e-2, "y was {}", last.position.y);
    assert!((last.position.z - 10.0).abs() < 1e-2, "z was {}", last.position.z);

    let status = pipeline.status();
    assert!(status.is_ready);
    assert!(status.is_detecting);
    assert!(status.error.is_none());
}

#[test]
fn test_signal_handle_reflects_latest_sample() {
    let detector = ScriptedDetector::new(vec![Some(face(0.35, 0.6, 0.1)); 10]);
    let mut pipeline = TrackingPipeline::new(Config::default());
    pipeline.attach_tracker(Box::new(detector), Box::new(TickingSource::new(30)));
    let signal = pipeline.signal();

    assert_eq!(signal.get(), HeadSignal::default());

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 5);

    let sample = signal.get();
    assert!((sample.x - 0.3).abs() < 1e-6);
    assert!((sample.y - -0.2).abs() < 1e-6);
    assert!((sample.z - 0.5).abs() < 1e-6);
}

#[test]
fn test_untracked_pipeline_commits_resting_pose() {
    let mut pipeline = TrackingPipeline::new(Config::default());
    pipeline.fail_tracker("Camera access denied: permission dismissed by user");

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 600);

    // Depth tracking on by default: origin signal targets (0, 2, 8)
    let last = sink.poses.last().unwrap();
    assert!(last.position.x.abs() < 1e-2);
    assert!((last.position.y - 2.0).abs() < 1e-2);
    assert!((last.position.z - 8.0).abs() < 1e-2);

    let status = pipeline.status();
    assert!(!status.is_ready);
    assert!(status.error.is_some());
}

#[test]
fn test_detector_failure_is_terminal_but_rendering_continues() {
    let mut pipeline = TrackingPipeline::new(Config::default());
    pipeline.attach_tracker(Box::new(FailingDetector), Box::new(TickingSource::new(30)));
    assert!(pipeline.tracker_attached());

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 10);

    // The failing tracker was detached after its first error, but every
    // frame still committed a pose
    assert!(!pipeline.tracker_attached());
    assert_eq!(sink.poses.len(), 10);
    assert!(pipeline.status().error.is_some());
    assert!(!pipeline.status().is_detecting);
}

#[test]
fn test_shutdown_stops_capture_tracks() {
    let source = TickingSource::new(30);
    let stopped = source.stop_flag();
    let detector = ScriptedDetector::new(vec![Some(face(0.5, 0.5, 0.1)); 10]);

    let mut pipeline = TrackingPipeline::new(Config::default());
    pipeline.attach_tracker(Box::new(detector), Box::new(source));

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 5);
    assert!(!stopped.get());

    pipeline.shutdown();
    assert!(stopped.get(), "shutdown must stop the capture stream");
    assert!(!pipeline.tracker_attached());

    // Shutdown is idempotent and the loop may keep rendering afterwards
    pipeline.shutdown();
    run_frames(&mut pipeline, &mut sink, 5);
    assert_eq!(sink.poses.len(), 10);
}

#[test]
fn test_depth_toggle_changes_target_distance() {
    let mut config = Config::default();
    config.pipeline.depth_tracking = false;

    // Close head: z = 0.15/0.05 - 1 = 2.0
    let detector = ScriptedDetector::new(vec![Some(face(0.5, 0.5, 0.05)); 1400]);
    let mut pipeline = TrackingPipeline::new(config);
    pipeline.attach_tracker(Box::new(detector), Box::new(TickingSource::new(120)));
    assert!(!pipeline.depth_tracking());

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 600);

    // Depth off: fixed default distance
    assert!((sink.poses.last().unwrap().position.z - 12.0).abs() < 1e-2);

    pipeline.set_depth_tracking(true);
    run_frames(&mut pipeline, &mut sink, 600);

    // Depth on: 8 + 2 * 4 = 16
    assert!((sink.poses.last().unwrap().position.z - 16.0).abs() < 1e-2);
}

#[test]
fn test_miss_frames_keep_camera_on_last_known_pose() {
    let mut script = vec![Some(face(0.35, 0.6, 0.1)); 300];
    script.extend(std::iter::repeat_with(|| None).take(300));
    let detector = ScriptedDetector::new(script);

    let mut pipeline = TrackingPipeline::new(Config::default());
    pipeline.attach_tracker(Box::new(detector), Box::new(TickingSource::new(120)));

    let mut sink = RecordingSink::default();
    run_frames(&mut pipeline, &mut sink, 300);
    let tracked = *sink.poses.last().unwrap();

    run_frames(&mut pipeline, &mut sink, 300);
    let after_misses = *sink.poses.last().unwrap();

    // The retained signal keeps the camera where the head last was
    assert!((tracked.position - after_misses.position).length() < 1e-2);
    assert!(!pipeline.status().is_detecting);
}
