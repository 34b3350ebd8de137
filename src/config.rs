// ===== keysmith/src/config.rs =====
use crate::error::KsResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Number of random layouts in the initial cohort.
    #[arg(long, default_value_t = 1000)]
    pub population: usize,
}

/// The six cost coefficients plus the trigram sample size. Read-only for
/// the duration of a search run.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    #[arg(long, default_value_t = 1.0)]
    pub fspeed: f64,

    #[arg(long, default_value_t = 1.0)]
    pub roll: f64,

    #[arg(long, default_value_t = 0.4)]
    pub alternate: f64,

    #[arg(long, default_value_t = 0.4)]
    pub onehand: f64,

    #[arg(long, default_value_t = 1.2)]
    pub redirect: f64,

    #[arg(long, default_value_t = 0.1)]
    pub index_balance: f64,

    /// Trigrams sampled per evaluation; 0 = all, -1 disables the term.
    #[arg(long, default_value_t = 500)]
    pub trigram_precision: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            fspeed: 1.0,
            roll: 1.0,
            alternate: 0.4,
            onehand: 0.4,
            redirect: 1.2,
            index_balance: 0.1,
            trigram_precision: 500,
        }
    }
}

impl ScoringWeights {
    /// Loads weights from a JSON file; missing fields fall back to the
    /// embedded defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KsResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
