//! Headless demo driving the head parallax pipeline from a scripted head path.

use anyhow::Result;
use clap::Parser;
use head_parallax::config::Config;
use head_parallax::pipeline::TrackingPipeline;
use head_parallax::rig::{CameraPose, CameraSink};
use head_parallax::simulate::{SyntheticDetector, SyntheticSource};
use log::info;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Target render frame rate
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Simulated camera frame rate
    #[arg(long, default_value = "30")]
    camera_fps: u32,

    /// How long to run, in seconds
    #[arg(short, long, default_value = "10")]
    seconds: u64,

    /// Disable depth tracking (fixed camera distance)
    #[arg(long)]
    no_depth: bool,

    /// Simulate a denied camera permission (degraded, untracked run)
    #[arg(long)]
    fail_camera: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Sink that logs the committed pose once per second of frames
struct LoggingSink {
    frame: u64,
    log_every: u64,
}

impl CameraSink for LoggingSink {
    fn set_camera(&mut self, pose: &CameraPose) {
        if self.frame % self.log_every == 0 {
            info!(
                "camera ({:7.3}, {:7.3}, {:7.3}) -> ({:.1}, {:.1}, {:.1})",
                pose.position.x, pose.position.y, pose.position.z, pose.look_at.x, pose.look_at.y, pose.look_at.z
            );
        }
        self.frame += 1;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Head Parallax demo");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    config.pipeline.target_fps = args.fps;
    if args.no_depth {
        config.pipeline.depth_tracking = false;
    }
    config.validate()?;

    let mut pipeline = TrackingPipeline::new(config);

    if args.fail_camera {
        // Exercise the degraded path: the scene still renders, the camera
        // rests at the idle pose, and the status record carries the error
        let denied = head_parallax::Error::CameraAccess("permission dismissed by user".to_string());
        pipeline.fail_tracker(denied.to_string());
    } else {
        pipeline.attach_tracker(
            Box::new(SyntheticDetector::new()),
            Box::new(SyntheticSource::new(args.camera_fps)),
        );
    }

    let mut sink = LoggingSink {
        frame: 0,
        log_every: u64::from(args.fps.max(1)),
    };
    pipeline.run(&mut sink, Duration::from_secs(args.seconds));

    let status = pipeline.status();
    match status.error {
        Some(error) => info!("Finished untracked: {error}"),
        None => info!("Finished, tracker ready={} detecting={}", status.is_ready, status.is_detecting),
    }

    Ok(())
}
