//! Integration tests for the frame loop
//!
//! These pin down the loop's externally observable contract:
//! - a quit event (or the quit key) halts the loop with a clean state
//! - the stopping iteration never renders
//! - zero-sized surfaces suppress presentation for that iteration only
//! - the end-of-iteration pause follows the two-branch pacing policy
//! - reserved event kinds are observably inert

use frameshell::{FrameLoop, FramePacer, InputEvent, Key, LoopState, MouseButton};
use frameshell_integration_tests::synthetic::{
    ManualClock, RecordingRenderer, RecordingSleeper, ScriptedEvents,
};
use std::time::Duration;

fn frozen_loop(
    events: ScriptedEvents,
    renderer: RecordingRenderer,
) -> FrameLoop<ScriptedEvents, RecordingRenderer, ManualClock, RecordingSleeper> {
    FrameLoop::new(events, renderer, FramePacer::default())
        .with_clock(ManualClock::frozen())
        .with_sleeper(RecordingSleeper::default())
}

#[test]
fn quit_event_halts_the_loop_cleanly() {
    let mut frame_loop = frozen_loop(
        ScriptedEvents::quit_after(3),
        RecordingRenderer::fixed((1280, 720)),
    );

    let summary = frame_loop.run();

    assert_eq!(summary.iterations, 4);
    assert_eq!(summary.frames_presented, 3);
    assert_eq!(frame_loop.state(), LoopState::Stopped);
    // The stopping iteration rendered nothing and slept for nothing.
    assert_eq!(frame_loop.renderer().presents.len(), 3);
    assert_eq!(frame_loop.sleeper().naps.len(), 3);
}

#[test]
fn quit_key_down_matches_quit_event_behavior() {
    let events = ScriptedEvents::new(vec![
        vec![],
        vec![],
        vec![],
        vec![InputEvent::KeyDown { key: Key::Q }],
    ]);
    let mut frame_loop = frozen_loop(events, RecordingRenderer::fixed((1280, 720)));

    let summary = frame_loop.run();

    assert_eq!(summary.iterations, 4);
    assert_eq!(summary.frames_presented, 3);
    assert_eq!(frame_loop.state(), LoopState::Stopped);
}

#[test]
fn zero_sized_surface_suppresses_presentation_for_that_iteration() {
    let events = ScriptedEvents::quit_after(4);
    let renderer =
        RecordingRenderer::scripted(vec![(1280, 720), (0, 720), (1280, 0), (800, 600)]);
    let mut frame_loop = frozen_loop(events, renderer);

    let summary = frame_loop.run();

    // Iterations with a zero dimension rendered nothing, without error,
    // and the loop carried on to the next iteration.
    assert_eq!(summary.iterations, 5);
    assert_eq!(summary.frames_presented, 2);
    assert_eq!(
        frame_loop.renderer().presents,
        vec![(1280, 720), (800, 600)]
    );
}

#[test]
fn pacing_sleeps_the_budget_remainder_or_the_fixed_yield() {
    // Clock reads alternate iteration-start / elapsed-measurement:
    // iteration 1 takes 5 ms, iteration 2 takes 16 ms, iteration 3
    // takes 40 ms, iteration 4 observes the quit and never sleeps.
    let clock = ManualClock::new(vec![
        Duration::from_millis(5),
        Duration::ZERO,
        Duration::from_millis(16),
        Duration::ZERO,
        Duration::from_millis(40),
        Duration::ZERO,
    ]);
    let mut frame_loop = FrameLoop::new(
        ScriptedEvents::quit_after(3),
        RecordingRenderer::fixed((1280, 720)),
        FramePacer::default(),
    )
    .with_clock(clock)
    .with_sleeper(RecordingSleeper::default());

    frame_loop.run();

    assert_eq!(
        frame_loop.sleeper().naps,
        vec![
            Duration::from_millis(11),
            Duration::from_millis(2),
            Duration::from_millis(2),
        ]
    );
}

#[test]
fn sub_budget_elapsed_truncates_to_whole_milliseconds() {
    // 15.2 ms of elapsed time counts as 15 ms, leaving a 1 ms remainder.
    let clock = ManualClock::new(vec![Duration::from_micros(15_200), Duration::ZERO]);
    let mut frame_loop = FrameLoop::new(
        ScriptedEvents::quit_after(1),
        RecordingRenderer::fixed((1280, 720)),
        FramePacer::default(),
    )
    .with_clock(clock)
    .with_sleeper(RecordingSleeper::default());

    frame_loop.run();

    assert_eq!(frame_loop.sleeper().naps, vec![Duration::from_millis(1)]);
}

#[test]
fn reserved_event_kinds_are_observably_inert() {
    let events = ScriptedEvents::new(vec![
        vec![
            InputEvent::KeyDown {
                key: Key::Other("KeyW".to_string()),
            },
            InputEvent::KeyUp { key: Key::Q },
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                x: 100.0,
                y: 50.0,
            },
            InputEvent::MouseButtonUp {
                button: MouseButton::Left,
                x: 100.0,
                y: 50.0,
            },
            InputEvent::MouseMotion { x: 101.0, y: 51.0 },
        ],
        vec![InputEvent::Quit],
    ]);
    let mut frame_loop = frozen_loop(events, RecordingRenderer::fixed((1280, 720)));

    let summary = frame_loop.run();

    assert_eq!(summary.iterations, 2);
    assert_eq!(summary.frames_presented, 1);
    assert_eq!(frame_loop.state(), LoopState::Stopped);
}

#[test]
fn presentation_fault_is_tolerated_and_the_loop_continues() {
    let mut renderer = RecordingRenderer::fixed((1280, 720));
    renderer.fail_on_call = Some(2);
    let mut frame_loop = frozen_loop(ScriptedEvents::quit_after(3), renderer);

    let summary = frame_loop.run();

    assert_eq!(summary.iterations, 4);
    assert_eq!(summary.frames_presented, 2);
    assert_eq!(frame_loop.state(), LoopState::Stopped);
}
