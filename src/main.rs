use anyhow::{Context, Result};
use clap::Parser;
use probability_rs::probability::{DefaultRandom, ProbabilityCollection};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Elements and their probability shares, as element:share
    #[arg(required = true, value_parser = parse_entry)]
    entries: Vec<(String, u32)>,

    /// Number of elements to draw
    #[arg(short, long, default_value_t = 1)]
    draws: usize,

    /// Seed for reproducible draws
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn parse_entry(s: &str) -> Result<(String, u32), String> {
    let (element, share) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected element:share, got {}", s))?;
    let share = share
        .parse::<u32>()
        .map_err(|e| format!("invalid share in {}: {}", s, e))?;
    Ok((element.to_string(), share))
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let random = match args.seed {
        Some(seed) => DefaultRandom::seeded(seed),
        None => DefaultRandom::new(),
    };
    let mut collection = ProbabilityCollection::try_from_entries(args.entries, random)
        .context("Failed to build collection")?;
    log::info!(
        "{} entries, total probability {}",
        collection.len(),
        collection.total_probability()
    );

    for _ in 0..args.draws {
        println!("{}", collection.get()?);
    }
    Ok(())
}
