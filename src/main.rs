//! Console entry point: one game of Vulcan Murder Mystery.

use std::error::Error;
use std::io;

use tracing_subscriber::EnvFilter;

use vulcan_mystery::console::{ConsolePlayer, ConsoleSettings};
use vulcan_mystery::{GameConfig, GameRng, RoundEngine};

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they never interleave with the narration.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env()?;
    let settings = ConsoleSettings::from_env()?;
    let rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    let mut engine = RoundEngine::new(config, rng)?;
    tracing::info!(seed = engine.seed(), "replay this game with VULCAN_SEED");

    let mut player = ConsolePlayer::new(io::stdin().lock(), io::stdout(), settings.delay);
    player.intro(config.antagonist_count)?;
    let summary = engine.play_to_end(&mut player)?;
    player.epilogue(&summary)?;

    Ok(())
}
