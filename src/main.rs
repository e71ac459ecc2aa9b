//! Duel Pong headless runner
//!
//! Plays a match with the autopilot on the human paddle and logs the result.
//!
//! ```text
//! duel-pong [SETTINGS.json] [--seconds N] [--seed N] [--realtime]
//! ```
//!
//! Without `--realtime` frame times are drawn from a seeded RNG, so runs are
//! reproducible and finish as fast as the CPU allows.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use duel_pong::audio::{AudioManager, RecordingAudio, dispatch};
use duel_pong::consts::SIM_DT;
use duel_pong::flow::{FlowOutcome, MatchFlow};
use duel_pong::platform::Stopwatch;
use duel_pong::settings::Settings;
use duel_pong::sim::{FixedStepClock, GameEvent, TickInput, run_frame};

/// Target frame period for realtime runs
const FRAME_PERIOD: Duration = Duration::from_millis(16);

struct Options {
    settings_path: Option<String>,
    seconds: f64,
    seed: u64,
    realtime: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            settings_path: None,
            seconds: 120.0,
            seed: 0x5EED,
            realtime: false,
        }
    }
}

fn parse_args() -> Options {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--realtime" => options.realtime = true,
            "--seconds" => match args.next().and_then(|v| v.parse().ok()) {
                Some(seconds) => options.seconds = seconds,
                None => log::warn!("--seconds needs a number, keeping {}", options.seconds),
            },
            "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                Some(seed) => options.seed = seed,
                None => log::warn!("--seed needs an integer, keeping {}", options.seed),
            },
            other if other.starts_with("--") => log::warn!("Unknown option {}", other),
            path => options.settings_path = Some(path.to_string()),
        }
    }
    options
}

fn main() {
    env_logger::init();
    let options = parse_args();
    log::info!("Duel Pong (headless) starting...");

    let settings = match &options.settings_path {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut flow = MatchFlow::new(settings.match_mode());
    let mut state = flow.new_state();
    let mut clock = FixedStepClock::new(SIM_DT, settings.max_catch_up_steps);

    let mut speaker = AudioManager::new();
    speaker.set_master_volume(settings.master_volume);
    speaker.set_sfx_volume(settings.sfx_volume);
    speaker.set_muted(settings.muted);
    let mut tally = RecordingAudio::default();

    let input = TickInput {
        demo: true,
        ..Default::default()
    };

    let mut rng = Pcg32::seed_from_u64(options.seed);
    let stopwatch = Stopwatch::new();
    let mut wall = 0.0;
    let mut goals = 0u32;

    while wall < options.seconds {
        let elapsed = if options.realtime {
            std::thread::sleep(FRAME_PERIOD);
            let now = stopwatch.elapsed_secs();
            let elapsed = now - wall;
            wall = now;
            elapsed
        } else {
            // Mostly 60 Hz with the odd slow frame
            let ms: f64 = if rng.random_bool(0.05) {
                rng.random_range(40.0..120.0)
            } else {
                rng.random_range(14.0..19.0)
            };
            wall += ms / 1000.0;
            ms / 1000.0
        };

        let frame = run_frame(&mut state, &mut clock, &input, elapsed);
        if frame.clamped {
            log::debug!("frame at {:.2}s hit the catch-up cap", wall);
        }

        let events = state.drain_events();
        dispatch(&events, &mut speaker);
        dispatch(&events, &mut tally);
        goals += events
            .iter()
            .filter(|e| matches!(e, GameEvent::Goal { .. }))
            .count() as u32;

        match flow.evaluate(&mut state) {
            FlowOutcome::Continue => {}
            FlowOutcome::RoundWon { next_round } => {
                log::info!("Advancing to round {}", next_round + 1)
            }
            FlowOutcome::RoundLost { round } => log::info!("Replaying round {}", round + 1),
            FlowOutcome::TournamentWon => break,
        }

        let snapshot = state.snapshot(frame.alpha);
        log::trace!(
            "t={:.3} ball=({:.3}, {:.3}) alpha={:.2}",
            wall,
            snapshot.ball.x,
            snapshot.ball.y,
            frame.alpha
        );
    }

    log::info!(
        "Finished after {:.1}s wall / {:.1}s sim ({} steps), {} goals, round {}, score {} - {}",
        wall,
        state.ctx.now(),
        clock.total_steps(),
        goals,
        flow.round() + 1,
        state.score.left,
        state.score.right
    );
    log::info!("Sound cues: {:?}", tally.histogram());
}
