use clap::Args;
use keysmith::config::Config;
use keysmith::optimizer::runner;
use keysmith::scorer::Scorer;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Base seed; worker i derives seed + i. Unseeded runs are not
    /// reproducible.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: GenerateArgs, scorer: Arc<Scorer>) {
    let n = args.config.search.population;

    match runner::populate(scorer, n, args.seed) {
        Ok(best) => {
            info!("🏆 Best layout: {}", best);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
