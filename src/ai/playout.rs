use rand::Rng;

use crate::game::{GameState, GameStatus, Outcome};

/// Play uniformly random legal moves from `state` until the game ends.
///
/// Takes the state by value: the caller's copy is never touched.
pub fn playout<R: Rng + ?Sized>(state: GameState, rng: &mut R) -> Outcome {
    simulate(state, rng).0
}

/// Random playout that also reports how many moves were applied.
pub fn simulate<R: Rng + ?Sized>(mut state: GameState, rng: &mut R) -> (Outcome, usize) {
    let mut plies = 0;
    loop {
        match state.status() {
            GameStatus::Won(p) => return (Outcome::Winner(p), plies),
            GameStatus::Draw => return (Outcome::Draw, plies),
            GameStatus::InProgress => {
                // In progress implies at least one open column.
                let legal = state.legal_columns();
                let column = legal[rng.random_range(0..legal.len())];
                state.play_legal(column);
                plies += 1;
            }
        }
    }
}
