use rand::rngs::StdRng;

use crate::error::EvalError;
use crate::game::GameState;

use super::evaluator::{select_move, EvaluatorConfig};

/// Universal interface for all move-selecting agents.
pub trait Agent {
    /// Select a column for the player to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, EvalError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by flat Monte-Carlo evaluation.
pub struct MonteCarloAgent {
    config: EvaluatorConfig,
    rng: StdRng,
}

impl MonteCarloAgent {
    pub fn new(config: EvaluatorConfig) -> Self {
        let rng = config.rng();
        MonteCarloAgent { config, rng }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }
}

impl Agent for MonteCarloAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EvalError> {
        select_move(state, &self.config, &mut self.rng)
    }

    fn name(&self) -> &str {
        "MonteCarlo"
    }
}
