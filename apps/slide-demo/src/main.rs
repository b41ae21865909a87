use std::time::Duration;

use anyhow::{ensure, Context};
use slideverify_core::gesture_constants::{DEFAULT_PIECE_WIDTH, DEFAULT_PUZZLE_HEIGHT};
use slideverify_core::prelude::*;
use web_time::Instant;

/// A scripted attempt: press x, the x of every move, and how it ends.
struct Attempt {
    name: &'static str,
    press_x: f32,
    moves: &'static [f32],
    ending: Ending,
}

#[derive(Clone, Copy)]
enum Ending {
    Lift,
    SystemCancel,
    AppSuspended,
}

const ATTEMPTS: &[Attempt] = &[
    Attempt {
        name: "overshoot",
        press_x: 10.0,
        moves: &[30.0, 90.0, 160.0, 240.0],
        ending: Ending::Lift,
    },
    Attempt {
        name: "interrupted",
        press_x: 10.0,
        moves: &[40.0, 80.0],
        ending: Ending::SystemCancel,
    },
    Attempt {
        name: "backgrounded",
        press_x: 10.0,
        moves: &[50.0],
        ending: Ending::AppSuspended,
    },
    Attempt {
        name: "on target",
        press_x: 10.0,
        moves: &[25.0, 60.0, 92.0, 96.0],
        ending: Ending::Lift,
    },
];

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = SlideVerifyConfig::default().with_stall_timeout(Duration::from_secs(5));
    let mut widget = SlideVerify::new(config).context("invalid slide configuration")?;
    widget.set_outcome_listener(|outcome| match outcome {
        VerificationOutcome::Pass => println!("  -> verification passed"),
        VerificationOutcome::Fail => println!("  -> verification failed, piece reset"),
    });

    println!("=== SlideVerify Demo ===");
    println!(
        "Puzzle {}x{}, piece {} wide, target {} ± {}, travel 0..={}",
        config.track_length,
        DEFAULT_PUZZLE_HEIGHT,
        DEFAULT_PIECE_WIDTH,
        config.target,
        config.tolerance,
        config.max_travel()
    );

    let started = Instant::now();
    let mut outcomes = Vec::new();
    for (index, attempt) in ATTEMPTS.iter().enumerate() {
        println!("Attempt {} ({})", index + 1, attempt.name);
        let outcome = run_attempt(&mut widget, attempt, started);
        log::info!("attempt {:?} finished with {:?}", attempt.name, outcome);
        outcomes.push(outcome);
    }

    ensure!(
        outcomes.last() == Some(&Some(VerificationOutcome::Pass)),
        "scripted on-target attempt did not pass: {outcomes:?}"
    );
    println!("Final piece offset: {}", widget.frame().piece_x);
    Ok(())
}

fn run_attempt(
    widget: &mut SlideVerify,
    attempt: &Attempt,
    started: Instant,
) -> Option<VerificationOutcome> {
    let mut drag = DragGesture::new();
    let mut dispatcher = SampleDispatcher::new();
    let pointer: PointerId = 1;

    let mut events = vec![PointerEvent::down(pointer, attempt.press_x)];
    events.extend(attempt.moves.iter().map(|&x| PointerEvent::moved(pointer, x)));
    let last_x = attempt.moves.last().copied().unwrap_or(attempt.press_x);
    match attempt.ending {
        Ending::Lift => events.push(PointerEvent::up(pointer, last_x)),
        Ending::SystemCancel => events.push(PointerEvent::cancel(pointer, last_x)),
        Ending::AppSuspended => {}
    }

    let mut outcome = None;
    for event in events {
        if let Some(sample) = drag.on_pointer_event(event) {
            dispatcher.push(sample);
        }
        outcome = outcome.or(dispatcher.dispatch_to(widget));
        let frame_time = started.elapsed().as_nanos() as u64;
        outcome = outcome.or(widget.on_frame(frame_time));
        let frame = widget.frame();
        println!("  handle {:>6.1}  piece {:>6.1}", frame.handle_x, frame.piece_x);
    }

    if let Ending::AppSuspended = attempt.ending {
        outcome = outcome.or(widget.suspend());
    }
    outcome
}
