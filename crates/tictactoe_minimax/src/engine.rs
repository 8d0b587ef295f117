//! Search engine with its own configuration and random source.

use crate::Board;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::search::{Decision, Randomness, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// A move picker bound to one configuration and one seeded RNG.
///
/// Successive calls advance the same RNG, so an engine built with a fixed
/// seed replays the same sequence of decisions.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    randomness: Randomness,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configured randomness is outside `[0, 1]`.
    #[instrument(skip(config), fields(randomness = config.randomness(), seed = ?config.seed()))]
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let randomness = config.validated_randomness()?;
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        debug!("Engine ready");
        Ok(Self {
            config,
            randomness,
            rng,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the validated randomness threshold.
    pub fn randomness(&self) -> Randomness {
        self.randomness
    }

    /// Picks a move for the player to move, or `None` on a terminal board.
    pub fn choose_move(&mut self, board: &Board) -> Option<Decision> {
        choose_move(board, self.randomness, &mut self.rng)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            randomness: Randomness::DEFAULT,
            rng: StdRng::from_os_rng(),
        }
    }
}
