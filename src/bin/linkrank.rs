// src/bin/linkrank.rs
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::Rng;

use linkrank_core::crawl;
use linkrank_core::rank::sampling::{
    sample_pagerank, sample_pagerank_parallel, sample_pagerank_seeded,
};
use linkrank_core::rank::{iterative, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use linkrank_core::report::{self, RankReport};

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank over a directory of HTML pages")]
struct Cli {
    /// Directory containing the HTML corpus
    corpus: PathBuf,

    /// Probability of following an outbound link
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Number of random-surfer samples
    #[arg(long, short = 'n', default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Seed for the sampling estimator (omit for a random run)
    #[arg(long)]
    seed: Option<u64>,

    /// Split sampling across this many parallel walks
    #[arg(long)]
    walks: Option<usize>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let corpus = crawl::crawl(&cli.corpus)?;

    let sampled = match cli.walks {
        Some(walks) => {
            let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
            sample_pagerank_parallel(&corpus, cli.damping, cli.samples, seed, walks)?
        }
        None => match cli.seed {
            Some(seed) => sample_pagerank_seeded(&corpus, cli.damping, cli.samples, seed)?,
            None => sample_pagerank(&corpus, cli.damping, cli.samples, &mut rand::thread_rng())?,
        },
    };
    let iterated = iterative::iterate_pagerank(&corpus, cli.damping)?;

    let rank_report = RankReport {
        damping: cli.damping,
        samples: cli.samples,
        sampled,
        iterated,
    };

    match cli.format.as_str() {
        "json" => println!("{}", report::format_json(&rank_report)?),
        _ => print!("{}", report::format_text(&rank_report)),
    }

    Ok(())
}
