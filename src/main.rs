//! Barrage headless match runner
//!
//! Stands in for a real presentation layer: plays both sides with the
//! computer's estimator and logs every shot, which makes the whole match
//! flow observable from a terminal. Optionally dumps the final frame
//! snapshot as JSON for a frontend to consume.
//!
//! Usage: `barrage [MODE] [DIFFICULTY] [SEED] [--json]`

use rand::SeedableRng;
use rand_pcg::Pcg32;

use barrage::settings::{Difficulty, GameMode};
use barrage::sim::{self, MatchPhase, MatchState, TickEvent, Verdict};
use barrage::snapshot::Snapshot;

/// Seconds the runner advances the clock per loop pass
const STEP_SECONDS: f32 = 1.0;
/// Hard stop so a pathological match cannot spin forever
const MAX_PASSES: u32 = 10_000;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dump_json = args.iter().any(|a| a == "--json");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));
    let mode = positional
        .next()
        .map(|s| GameMode::parse_or_default(s))
        .unwrap_or_default();
    let difficulty = positional
        .next()
        .map(|s| Difficulty::parse_or_default(s))
        .unwrap_or_default();
    let seed = positional.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut state = MatchState::new(mode, difficulty, seed);
    // The runner aims the human seats with its own RNG stream so the
    // match RNG stays reserved for the simulation itself.
    let mut aim_rng = Pcg32::seed_from_u64(seed ^ 0xA1);

    let mut passes = 0;
    while !matches!(state.phase, MatchPhase::Over(_)) {
        passes += 1;
        if passes > MAX_PASSES {
            log::error!("match did not finish within {MAX_PASSES} passes, giving up");
            break;
        }

        if let Some(event) = sim::tick(&mut state, STEP_SECONDS) {
            match event {
                TickEvent::ComputerShot(report) => print_shot(&report),
                TickEvent::TimeUp(verdict) => println!("time up: {}", describe(&verdict)),
            }
            continue;
        }

        if matches!(state.phase, MatchPhase::AwaitingInput) {
            let shooter = state.turn;
            let origin = state.position_of(shooter) as f32;
            let target = state.position_of(shooter.opponent()) as f32;
            let aim = sim::estimate_shot(
                origin,
                target,
                state.round.wind,
                state.difficulty.gravity(),
                state.difficulty,
                state.difficulty.max_power(),
                &mut aim_rng,
            );
            match sim::fire(&mut state, aim.angle, aim.power) {
                Ok(report) => print_shot(&report),
                Err(err) => {
                    log::error!("runner produced a rejected shot: {err}");
                    break;
                }
            }
        }
    }

    println!(
        "final score {}:{} after {} round(s)",
        state.score.player1, state.score.player2, state.round_number
    );
    if dump_json {
        match serde_json::to_string_pretty(&Snapshot::of(&state)) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }
    }
}

fn print_shot(report: &sim::ShotReport) {
    println!(
        "player {} fired, landed at x {:.1}: {}",
        report.shooter.index(),
        report.landing.x(),
        describe(&report.verdict)
    );
}

fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Miss { next_turn } => format!("miss, player {} up", next_turn.index()),
        Verdict::RoundWon { winner } => format!("round to player {}", winner.index()),
        Verdict::MatchWon { winner } => format!("match to player {}", winner.index()),
        Verdict::MatchDrawn => "match drawn".to_string(),
    }
}
