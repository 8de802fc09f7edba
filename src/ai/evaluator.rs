//! Flat Monte-Carlo move evaluation.
//!
//! Every legal column is scored by the mean result of independent random
//! playouts from the position after that move, seen from the side that made
//! it. No tree is kept between calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::EvalError;
use crate::game::{GameState, GameStatus, Outcome, Player};

use super::playout::playout;

/// Move evaluator configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Random playouts run after each candidate move.
    pub rollouts_per_move: usize,
    /// Score contribution of a drawn playout, in [-1, 1].
    pub draw_value: f64,
    /// Evaluate candidate columns on the rayon pool.
    pub parallel: bool,
    /// Fixed seed for reproducible selection. `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            rollouts_per_move: 10_000,
            draw_value: 0.0,
            parallel: true,
            seed: None,
        }
    }
}

impl EvaluatorConfig {
    /// Random source for one selection request.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Playout results for one candidate, from the mover's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome, mover: Player) {
        match outcome {
            Outcome::Winner(p) if p == mover => self.wins += 1,
            Outcome::Winner(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// `(wins - losses + draw_value * draws) / total`, 0 for an empty tally.
    pub fn score(&self, draw_value: f64) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let net = self.wins as f64 - self.losses as f64 + draw_value * self.draws as f64;
        net / total as f64
    }
}

/// Score of a single candidate column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvaluation {
    pub column: usize,
    pub tally: Tally,
    pub score: f64,
}

/// Run `rollouts` playouts after `column` and tally them for the player to
/// move in `state`.
pub fn evaluate_column<R: Rng + ?Sized>(
    state: &GameState,
    column: usize,
    rollouts: usize,
    rng: &mut R,
) -> Result<Tally, EvalError> {
    let mover = state.to_move();
    let after = state.apply_move(column)?;
    let mut tally = Tally::default();
    for _ in 0..rollouts {
        tally.record(playout(after, rng), mover);
    }
    Ok(tally)
}

/// Score every legal column, ascending by column.
///
/// One value is drawn from `rng` and expanded into an independent stream per
/// candidate, so the result for a given seed is the same serially or in
/// parallel.
pub fn evaluate_moves<R: Rng + ?Sized>(
    state: &GameState,
    config: &EvaluatorConfig,
    rng: &mut R,
) -> Result<Vec<MoveEvaluation>, EvalError> {
    if config.rollouts_per_move == 0 {
        return Err(EvalError::ZeroRollouts);
    }
    let legal = state.legal_columns();
    if legal.is_empty() {
        return Err(EvalError::NoLegalMove);
    }
    if let GameStatus::Won(p) = state.status() {
        return Err(EvalError::GameOver(Outcome::Winner(p)));
    }

    let base_seed: u64 = rng.random();
    let score_column = |(index, &column): (usize, &usize)| -> Result<MoveEvaluation, EvalError> {
        let mut stream = StdRng::seed_from_u64(stream_seed(base_seed, index));
        let tally = evaluate_column(state, column, config.rollouts_per_move, &mut stream)?;
        let score = tally.score(config.draw_value);
        tracing::debug!(
            column,
            wins = tally.wins,
            losses = tally.losses,
            draws = tally.draws,
            score,
            "evaluated column"
        );
        Ok(MoveEvaluation {
            column,
            tally,
            score,
        })
    };

    if config.parallel {
        legal
            .as_slice()
            .par_iter()
            .enumerate()
            .map(score_column)
            .collect()
    } else {
        legal.iter().enumerate().map(score_column).collect()
    }
}

/// First evaluation with the strictly greatest score.
pub fn best_move(evaluations: &[MoveEvaluation]) -> Option<&MoveEvaluation> {
    let mut best: Option<&MoveEvaluation> = None;
    for eval in evaluations {
        if best.map_or(true, |b| eval.score > b.score) {
            best = Some(eval);
        }
    }
    best
}

/// Pick the column with the best Monte-Carlo score for the player to move.
pub fn select_move<R: Rng + ?Sized>(
    state: &GameState,
    config: &EvaluatorConfig,
    rng: &mut R,
) -> Result<usize, EvalError> {
    let evaluations = evaluate_moves(state, config, rng)?;
    let best = best_move(&evaluations).ok_or(EvalError::NoLegalMove)?;
    tracing::info!(
        column = best.column,
        score = best.score,
        candidates = evaluations.len(),
        rollouts = config.rollouts_per_move,
        "selected move"
    );
    Ok(best.column)
}

/// Derive a deterministic seed for the `index`-th random stream.
pub fn stream_seed(base_seed: u64, index: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
