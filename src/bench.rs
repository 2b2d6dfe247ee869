//! Benchmarks adding to and drawing from both backings
use anyhow::{Context, Result};
use clap::Parser;
use probability_rs::probability::{ProbabilityCollection, ProbabilityMap, WeightedCollection};
use serde::Serialize;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Elements, each with a share of 1, in the collection before timing
    #[arg(short = 'n', long, default_value_t = 1000)]
    elements: usize,
    #[arg(short, long, default_value_t = 100000)]
    iterations: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
    #[arg(short, long, default_value = None)]
    reports_folder: Option<String>,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    backing: &'static str,
    elements: usize,
    iterations: usize,
    episodes: usize,
    add_nanos_per_op: f64,
    get_nanos_per_op: f64,
}

fn filled<C>(mut collection: C, elements: usize) -> Result<C>
where
    C: WeightedCollection<Element = usize>,
{
    for element in 0..elements {
        collection.add(element, 1)?;
    }
    Ok(collection)
}

///
/// Times `iterations` adds and `iterations` draws on a freshly filled
/// collection. Returns (add, get) durations in seconds.
///
fn run_benchmark<C, F>(make: F, elements: usize, iterations: usize) -> Result<(f64, f64)>
where
    C: WeightedCollection<Element = usize>,
    F: Fn() -> C,
{
    let mut collection = filled(make(), elements)?;
    let start = Instant::now();
    for _ in 0..iterations {
        collection.add(elements + 1, 10)?;
    }
    let add_elapsed = start.elapsed().as_secs_f64();

    let mut collection = filled(make(), elements)?;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(collection.get()?);
    }
    let get_elapsed = start.elapsed().as_secs_f64();

    log::debug!("add {:.4}s, get {:.4}s", add_elapsed, get_elapsed);
    Ok((add_elapsed, get_elapsed))
}

fn run_episodes<C, F>(name: &'static str, make: F, args: &Args) -> Result<BenchmarkReport>
where
    C: WeightedCollection<Element = usize>,
    F: Fn() -> C,
{
    let mut add_total = 0.0;
    let mut get_total = 0.0;
    for episode in 0..args.episodes {
        let (add, get) = run_benchmark(&make, args.elements, args.iterations)?;
        log::info!("{} episode {}: add {:.4}s, get {:.4}s", name, episode, add, get);
        add_total += add;
        get_total += get;
    }
    let operations = (args.episodes * args.iterations).max(1) as f64;
    let report = BenchmarkReport {
        backing: name,
        elements: args.elements,
        iterations: args.iterations,
        episodes: args.episodes,
        add_nanos_per_op: add_total * 1e9 / operations,
        get_nanos_per_op: get_total * 1e9 / operations,
    };
    println!(
        "{}\t{:.2} ns/add\t{:.2} ns/get",
        name, report.add_nanos_per_op, report.get_nanos_per_op
    );
    Ok(report)
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!(
        "===\nElements: {}, Iterations: {}, Episodes: {}",
        args.elements, args.iterations, args.episodes
    );
    println!("---");
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let reports = vec![
        run_episodes("collection", || ProbabilityCollection::with_seed(0), &args)?,
        run_episodes("map", || ProbabilityMap::with_seed(0), &args)?,
    ];

    if let Some(folder) = &args.reports_folder {
        let filename = format!(
            "bench-{}.json",
            chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
        );
        let path = Path::new(folder).join(filename);
        let serialized = serde_json::to_string_pretty(&reports)?;
        fs::write(&path, serialized)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        println!("---\nReport written to {}", path.display());
    }
    Ok(())
}
