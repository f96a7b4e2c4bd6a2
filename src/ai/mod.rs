//! CPU opponents: the `Agent` trait, a uniform random mover for Easy and a
//! one-ply material-greedy mover for Hard.

mod agent;
mod greedy;
mod random;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDifficultyError;

pub use agent::Agent;
pub use greedy::{GreedyAgent, Heuristic, MaterialHeuristic};
pub use random::RandomAgent;

/// CPU strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move.
    #[default]
    Easy,
    /// Best material after one ply.
    Hard,
}

impl Difficulty {
    /// Build the agent for this difficulty. `seed` fixes the random agent.
    pub fn agent(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            Difficulty::Easy => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
            Difficulty::Hard => Box::new(GreedyAgent::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
