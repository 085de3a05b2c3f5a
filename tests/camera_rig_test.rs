//! Integration tests for camera rig smoothing, clamping, and idle behavior.

use glam::Vec3;
use head_parallax::config::RigConfig;
use head_parallax::rig::{CameraRig, RigMode};
use head_parallax::signal::HeadSignal;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn test_smoothing_is_frame_rate_independent() {
    let target = HeadSignal::new(1.0, -0.5, 1.5);

    // Same total elapsed time, partitioned differently
    let mut fine = CameraRig::new(RigConfig::default());
    let mut coarse = CameraRig::new(RigConfig::default());
    fine.note_detection();
    coarse.note_detection();

    for _ in 0..100 {
        fine.update(target, 0.01, 0.0, true);
    }
    coarse.update(target, 1.0, 0.0, true);

    let difference = (fine.smoothed_position() - coarse.smoothed_position()).length();
    assert!(
        difference < 1e-3,
        "many small steps and one large step diverged by {difference}"
    );
}

#[test]
fn test_step_toward_target_never_overshoots() {
    // Signal jumps from origin to full right; depth tracking off
    let mut rig = CameraRig::new(RigConfig::default());
    rig.note_detection();
    let signal = HeadSignal::new(1.0, 0.0, 0.0);

    let mut previous_x = rig.smoothed_position().x;
    for _ in 0..600 {
        rig.update(signal, FRAME, 0.0, false);
        let x = rig.smoothed_position().x;
        assert!(x >= previous_x, "approach must be monotonic, {x} < {previous_x}");
        assert!(x <= 8.0 + 1e-4, "smoothed x {x} overshot the 8.0 target");
        previous_x = x;
    }

    // 10 seconds at rate 4.0 is far past convergence
    assert!(
        (previous_x - 8.0).abs() < 1e-3,
        "smoothed x {previous_x} should have converged to 8.0"
    );
}

#[test]
fn test_depth_scenario_lands_inside_safety_window() {
    // z = 2 with base 8 and scale 4 targets exactly 16, no clamp engaged
    let mut rig = CameraRig::new(RigConfig::default());
    rig.note_detection();
    let signal = HeadSignal::new(0.0, 0.0, 2.0);

    assert_eq!(rig.target_position(signal, true).z, 16.0);

    for _ in 0..600 {
        rig.update(signal, FRAME, 0.0, true);
    }
    assert!((rig.smoothed_position().z - 16.0).abs() < 1e-3);
}

#[test]
fn test_out_of_contract_proximity_is_clamped() {
    let mut rig = CameraRig::new(RigConfig::default());
    rig.note_detection();

    // Injected value outside the signal contract: 8 + 5*4 = 28 clamps to 18
    let rogue = HeadSignal::new(0.0, 0.0, 5.0);
    assert_eq!(rig.target_position(rogue, true).z, 18.0);

    for _ in 0..600 {
        let pose = rig.update(rogue, FRAME, 0.0, true);
        assert!(
            (5.0..=18.0).contains(&pose.position.z),
            "committed z {} escaped the safety window",
            pose.position.z
        );
    }
}

#[test]
fn test_idle_rig_settles_then_drifts() {
    // Never-tracked rig, depth off: the camera settles at the default
    // pose and oscillates slowly so the scene is not frozen
    let mut rig = CameraRig::new(RigConfig::default());
    assert_eq!(rig.mode(), RigMode::Idle);

    let origin = HeadSignal::default();
    for _ in 0..600 {
        rig.update(origin, FRAME, 0.0, false);
    }

    // Settled at the resting pose: x 0, y at the vertical offset, z at
    // the default distance
    let settled = rig.smoothed_position();
    assert!(settled.x.abs() < 1e-3);
    assert!((settled.y - 2.0).abs() < 1e-3);
    assert!((settled.z - 12.0).abs() < 1e-3);

    // Drift peaks a quarter period into the sine: elapsed * 0.3 = pi/2
    let quarter = std::f32::consts::FRAC_PI_2 / 0.3;
    let peak = rig.update(origin, FRAME, quarter, false);
    assert!(
        (peak.position.x - 0.5).abs() < 1e-2,
        "drift at the sine peak should offset x by the 0.5 amplitude, got {}",
        peak.position.x
    );

    let zero_crossing = rig.update(origin, FRAME, 2.0 * quarter, false);
    assert!(zero_crossing.position.x.abs() < 1e-2);

    // Every drifted pose still looks at the focal point
    assert_eq!(peak.look_at, Vec3::ZERO);
}

#[test]
fn test_idle_drift_suppressed_while_depth_tracking() {
    let mut rig = CameraRig::new(RigConfig::default());
    for _ in 0..600 {
        rig.update(HeadSignal::default(), FRAME, 0.0, true);
    }

    let quarter = std::f32::consts::FRAC_PI_2 / 0.3;
    let pose = rig.update(HeadSignal::default(), FRAME, quarter, true);
    assert!(
        pose.position.x.abs() < 1e-3,
        "idle drift must not apply while depth tracking is enabled"
    );
}

#[test]
fn test_centered_head_after_tracking_does_not_drift() {
    // A head legitimately returned to center is not the same as an
    // absent user; tracking mode stays latched and the drift stays off
    let mut rig = CameraRig::new(RigConfig::default());
    rig.note_detection();

    for _ in 0..600 {
        rig.update(HeadSignal::default(), FRAME, 0.0, false);
    }

    let quarter = std::f32::consts::FRAC_PI_2 / 0.3;
    let pose = rig.update(HeadSignal::default(), FRAME, quarter, false);
    assert!(
        pose.position.x.abs() < 1e-3,
        "latched tracking mode must suppress the idle drift, got x {}",
        pose.position.x
    );
}

#[test]
fn test_every_pose_looks_at_the_origin() {
    let mut rig = CameraRig::new(RigConfig::default());
    rig.note_detection();

    let samples = [
        HeadSignal::new(1.0, 1.0, 2.0),
        HeadSignal::new(-1.0, -1.0, 0.0),
        HeadSignal::new(0.2, -0.7, 1.3),
    ];
    for (i, signal) in samples.iter().enumerate() {
        let pose = rig.update(*signal, FRAME, i as f32, true);
        assert_eq!(pose.look_at, Vec3::ZERO);
    }
}
