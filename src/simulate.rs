//! Draws repeatedly from a configured collection and reports observed frequencies
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use probability_rs::probability::{
    DefaultRandom, ProbabilityCollection, ProbabilityMap, WeightedCollection,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Write;
use std::{fs, thread};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
enum Backing {
    #[default]
    Collection,
    Map,
}

#[derive(Debug, Deserialize)]
struct SimulationSettings {
    #[serde(default)]
    backing: Backing,
    draws: usize,
    #[serde(default)]
    seed: Option<u64>,
    entries: Vec<EntrySettings>,
}

#[derive(Debug, Deserialize, Clone)]
struct EntrySettings {
    element: String,
    weight: u32,
}

fn run_simulation<C>(
    mut collection: C,
    settings: &SimulationSettings,
) -> Result<HashMap<String, usize>>
where
    C: WeightedCollection<Element = String>,
{
    for entry in settings.entries.iter() {
        collection
            .add(entry.element.clone(), entry.weight)
            .with_context(|| format!("Failed to add {}", entry.element))?;
    }
    log::info!(
        "{} entries, total probability {}",
        collection.len(),
        collection.total_probability()
    );

    let mut counts: HashMap<String, usize> = HashMap::new();
    for draw in 0..settings.draws {
        let element = collection.get()?;
        log::trace!("Draw {} is {}", draw, element);
        *counts.entry(element.clone()).or_insert(0) += 1;
    }
    Ok(counts)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config_file = fs::read_to_string(&args.config_file)
        .with_context(|| format!("Failed to read config file {}", args.config_file))?;
    let settings: SimulationSettings =
        serde_json::from_str(&config_file).context("Failed to parse config file")?;

    let random = match settings.seed {
        Some(seed) => DefaultRandom::seeded(seed),
        None => DefaultRandom::new(),
    };
    log::info!("Running {} draws on {:?}", settings.draws, settings.backing);
    let counts = match settings.backing {
        Backing::Collection => {
            run_simulation(ProbabilityCollection::with_random(random), &settings)?
        }
        Backing::Map => run_simulation(ProbabilityMap::with_random(random), &settings)?,
    };

    // Duplicated elements share a row; their weights add up
    let mut weights: Vec<(String, u64)> = vec![];
    for entry in settings.entries.iter() {
        match weights.iter_mut().find(|(element, _)| *element == entry.element) {
            Some((_, weight)) => *weight += u64::from(entry.weight),
            None => weights.push((entry.element.clone(), u64::from(entry.weight))),
        }
    }
    let total: u64 = weights.iter().map(|(_, weight)| weight).sum();

    println!("Element\tWeight\tExpected\tObserved");
    for (element, weight) in weights.iter() {
        let observed = *counts.get(element).unwrap_or(&0);
        println!(
            "{}\t{}\t{:>5.2}%\t{:>5.2}%",
            element,
            weight,
            (100.0 * *weight as f64) / total as f64,
            (100.0 * observed as f64) / settings.draws.max(1) as f64
        );
    }
    Ok(())
}
