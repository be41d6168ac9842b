use clap::{Parser, ValueEnum};

use crate::search::Strategy;

/// Frames between controlled-token moves.
pub(crate) const TOKEN_MOVE_INTERVAL: u32 = 9;
/// Frames between pursuer moves. Keeps a 3:5 pace against the token.
pub(crate) const PURSUER_MOVE_INTERVAL: u32 = 15;

/// How secondary pursuers project the controlled token's next cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PredictionMode {
    /// Headings shift the swapped axis and the wall check reads the transposed cell.
    #[default]
    Parity,
    /// Headings shift their own axis and the wall check reads the projected cell.
    Corrected,
}

/// Move cadence in frame ticks. Both intervals are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cadence {
    pub(crate) token_interval: u32,
    pub(crate) pursuer_interval: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            token_interval: TOKEN_MOVE_INTERVAL,
            pursuer_interval: PURSUER_MOVE_INTERVAL,
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Collect every pickup while the pursuers hunt you down")]
pub struct Config {
    /// Frames between controlled-token moves.
    #[arg(long, default_value_t = TOKEN_MOVE_INTERVAL, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) token_interval: u32,
    /// Frames between pursuer moves.
    #[arg(long, default_value_t = PURSUER_MOVE_INTERVAL, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) pursuer_interval: u32,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) prediction: PredictionMode,
    /// Search used by pursuers to route toward their target.
    #[arg(long, value_enum, default_value_t = Strategy::BreadthFirst)]
    pub(crate) search: Strategy,
    /// Seed for pursuer spawn placement. Random when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

impl Config {
    pub(crate) fn cadence(&self) -> Cadence {
        Cadence {
            token_interval: self.token_interval,
            pursuer_interval: self.pursuer_interval,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_interval: TOKEN_MOVE_INTERVAL,
            pursuer_interval: PURSUER_MOVE_INTERVAL,
            prediction: PredictionMode::default(),
            search: Strategy::BreadthFirst,
            seed: None,
        }
    }
}
