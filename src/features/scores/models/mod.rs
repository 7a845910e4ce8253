mod score;

pub use score::{Score, ScoreWithTeam};
