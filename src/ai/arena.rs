//! Head-to-head matches between agents.

use crate::error::EvalError;
use crate::game::{GameState, Outcome, Player};

use super::agent::Agent;

/// Aggregate result of a series of games, from the evaluated agent's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaReport {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins as f32 / games as f32
    }
}

/// Play one game from `start`. `first` moves for whoever is to move in
/// `start`, `second` for the other side.
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    start: GameState,
) -> Result<Outcome, EvalError> {
    let first_player = start.to_move();
    let mut state = start;

    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(outcome);
        }
        let action = if state.to_move() == first_player {
            first.select_action(&state)?
        } else {
            second.select_action(&state)?
        };
        state.apply_move_mut(action)?;
    }
}

/// Play `games` games of `agent` against `opponent` from the empty board,
/// alternating who moves first.
pub fn evaluate_against(
    agent: &mut dyn Agent,
    opponent: &mut dyn Agent,
    games: usize,
) -> Result<ArenaReport, EvalError> {
    let mut report = ArenaReport::default();

    for game_idx in 0..games {
        let agent_first = game_idx % 2 == 0;
        let agent_player = if agent_first {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        };
        let outcome = if agent_first {
            play_game(agent, opponent, GameState::initial())?
        } else {
            play_game(opponent, agent, GameState::initial())?
        };

        match outcome {
            Outcome::Winner(p) if p == agent_player => report.wins += 1,
            Outcome::Winner(_) => report.losses += 1,
            Outcome::Draw => report.draws += 1,
        }
        tracing::debug!(
            game = game_idx + 1,
            agent = agent.name(),
            opponent = opponent.name(),
            ?outcome,
            "arena game finished"
        );
    }

    tracing::info!(
        agent = agent.name(),
        opponent = opponent.name(),
        wins = report.wins,
        losses = report.losses,
        draws = report.draws,
        "arena finished"
    );
    Ok(report)
}
