use clap::Args;
use keysmith::config::ScoringWeights;
use keysmith::error::KsResult;
use keysmith::layout::Layout;
use keysmith::layouts::KnownLayout;
use keysmith::reports;
use keysmith::scorer::Scorer;
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// A named layout (e.g. `colemak_dh`) or a raw 30-character string.
    pub layout: String,

    #[command(flatten)]
    pub weights: ScoringWeights,
}

pub fn run(args: AnalyzeArgs, scorer: &Scorer) -> KsResult<()> {
    let layout = match KnownLayout::from_str(&args.layout) {
        Ok(known) => Layout::from_str(known.get_str(), &scorer.corpus)?,
        Err(_) => Layout::from_str(&args.layout, &scorer.corpus)?,
    };

    reports::print_analysis(&layout, scorer);
    reports::heatmap(&layout, &scorer.corpus);
    Ok(())
}
