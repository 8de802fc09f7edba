mod agent;
pub mod arena;
pub mod evaluator;
pub mod playout;
mod random;

pub use agent::{Agent, MonteCarloAgent};
pub use evaluator::{
    best_move, evaluate_column, evaluate_moves, select_move, EvaluatorConfig, MoveEvaluation,
    Tally,
};
pub use playout::playout;
pub use random::RandomAgent;
