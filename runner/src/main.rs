mod broadcaster;
mod frame;

use std::time::Duration;
use clap::{Parser, ValueEnum};
use tokio::time::{interval, Instant};
use common::{log, logger};
use common::config::Validate;
use common::games::SessionRng;
use common::games::snake::{BotController, BotType, SnakeSession, SnakeSessionSettings};
use broadcaster::LogBroadcaster;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Efficient,
    Random,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Efficient => BotType::Efficient,
            BotArg::Random => BotType::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML session settings; defaults are used when the file is missing.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = BotArg::Efficient)]
    bot: BotArg,
    /// Games to play back to back; the session is reset between them.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Stop a game after this many ticks even if it is still running.
    #[arg(long, default_value_t = 2000)]
    max_ticks: u64,
    /// Host frame interval fed into the move-rate timer.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    #[arg(long)]
    render: bool,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut settings = match args.config.as_deref() {
        Some(path) => SnakeSessionSettings::config_manager(path).get_config()?,
        None => SnakeSessionSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    settings.validate()?;

    let mut session = SnakeSession::create(settings)?;
    let grid = session.state().grid();
    let mut broadcaster = LogBroadcaster::new(grid.width(), grid.height(), args.render);
    session.publish_scene(&mut broadcaster);

    let bot_type = BotType::from(args.bot);
    let mut bot_rng = SessionRng::new(session.seed().wrapping_add(1));
    let mut frame_timer = interval(Duration::from_millis(args.frame_ms.max(1)));
    let mut last_frame = Instant::now();
    let mut games_played = 0u32;

    let shutdown_signal = tokio::signal::ctrl_c();
    tokio::pin!(shutdown_signal);

    loop {
        tokio::select! {
            _ = frame_timer.tick() => {}
            _ = &mut shutdown_signal => {
                log!("Interrupted after {} ticks, score {}", session.tick_count(), session.score());
                break;
            }
        }

        let now = Instant::now();
        let elapsed = now - last_frame;
        last_frame = now;

        let outcome = session.advance_with(elapsed, &mut broadcaster, |state| {
            BotController::calculate_input(bot_type, state, &mut bot_rng)
        });

        let budget_spent = session.tick_count() >= args.max_ticks;
        if !outcome.is_terminal() && !budget_spent {
            continue;
        }

        games_played += 1;
        log!(
            "Game {} finished: {:?}, score {}, length {}, ticks {}",
            games_played,
            outcome,
            session.score(),
            session.state().snake().len(),
            session.tick_count()
        );

        if games_played >= args.games {
            break;
        }
        session.reset(&mut broadcaster)?;
    }

    Ok(())
}
