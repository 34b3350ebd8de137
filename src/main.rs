// ===== keysmith/src/main.rs =====
use clap::{Parser, Subcommand};
use keysmith::config::ScoringWeights;
use keysmith::corpus::Corpus;
use keysmith::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/ngrams.tsv")]
    ngrams: String,

    /// JSON weight file; overrides the CLI weight flags.
    #[arg(global = true, long)]
    weights: Option<String>,

    /// Use the layout-dependent finger-speed model.
    #[arg(global = true, long, default_value_t = false)]
    dynamic: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Generate(cmd::generate::GenerateArgs),
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("📂 Loading corpus: {}", cli.ngrams);
    let corpus = Corpus::load_from_file(&cli.ngrams).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let mut weights = match &cli.command {
        Commands::Generate(args) => args.config.weights.clone(),
        Commands::Analyze(args) => args.weights.clone(),
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading weights from: {}", path);
        weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
    }

    let scorer = Arc::new(Scorer::new(corpus, weights, cli.dynamic));

    match cli.command {
        Commands::Generate(args) => cmd::generate::run(args, scorer),
        Commands::Analyze(args) => {
            if let Err(e) = cmd::analyze::run(args, &scorer) {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
