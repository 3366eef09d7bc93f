//! Air Puck demo loop
//!
//! Runs one session in real time at roughly 60 Hz: sample input, tick the
//! simulation, present a frame. The paddle is driven by a recorded replay
//! file when one is given, otherwise by a deterministic sweep.
//!
//!     air-puck [--seed N] [--config FILE.json] [--replay FILE.json]

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use air_puck::config::Config;
use air_puck::input::{InputSource, ReplaySource, SweepSource};
use air_puck::render::{Frame, HudLog, RenderSink};
use air_puck::sim::Session;

const TICK_INTERVAL: Duration = Duration::from_millis(16);

struct Args {
    seed: Option<u64>,
    config: Option<PathBuf>,
    replay: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: None,
        config: None,
        replay: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| format!("{name} expects a value"))
        };
        match flag.as_str() {
            "--seed" => args.seed = Some(value("--seed")?.parse().map_err(|e| format!("--seed: {e}"))?),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--replay" => args.replay = Some(PathBuf::from(value("--replay")?)),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config {
        Some(path) => match Config::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let mut source: Box<dyn InputSource> = match &args.replay {
        Some(path) => match ReplaySource::from_path(path) {
            Ok(source) => Box::new(source),
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(SweepSource::new(config.field())),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!(
        "starting session: seed {seed}, {}x{} field, {} targets, {:.0}s on the clock",
        config.field_width,
        config.field_height,
        config.target_count,
        config.game_duration,
    );

    let end_grace = config.end_grace;
    let started = Instant::now();
    let mut session = Session::new(config, seed, 0.0);
    let mut sink = HudLog::new(1.0);
    let mut over_since: Option<f64> = None;

    loop {
        let now = started.elapsed().as_secs_f64();
        let input = source.sample();
        let events = session.tick(input, now);

        if events.paddle_hit {
            log::debug!("paddle hit, puck velocity {}", session.puck.velocity);
        }
        for index in &events.newly_hit {
            log::debug!("target {index} down, score {}", session.state.score);
        }

        sink.present(&Frame::of(&session, now));

        if session.state.game_over {
            let since = *over_since.get_or_insert(now);
            if now - since >= end_grace {
                break;
            }
        }

        thread::sleep(TICK_INTERVAL);
    }

    log::info!("session closed");
    ExitCode::SUCCESS
}
