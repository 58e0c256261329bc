//! Command line driver for the hexlife automaton.

mod render;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use hexlife_core::{SimulationConfig, TopologyKind};
use hexlife_world::{RunObserver, Simulation};
use render::{AnimatedWriter, ConsoleWriter};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use telemetry::LogFormat;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hexlife")]
#[command(version)]
#[command(about = "Game of Life on rectangular and hexagonal boards")]
struct Cli {
    /// Neighbor rule: 8 (rectangular), 6 or 12 (hexagonal) [default: 6]
    #[arg(short, long, value_parser = parse_topology)]
    neighbors: Option<TopologyKind>,

    /// Grid size (SIZE by SIZE) for random boards [default: 100]
    #[arg(short, long)]
    size: Option<usize>,

    /// Read the initial board from a text layout
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of generations to simulate [default: 10]
    #[arg(short, long)]
    generations: Option<u64>,

    /// Print every nth generation [default: 1]
    #[arg(short, long)]
    print_every: Option<u64>,

    /// Probability of a cell starting alive [default: 0.5]
    #[arg(short = 'i', long)]
    probability: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Redraw every generation in place instead of printing them in sequence
    #[arg(long)]
    animate: bool,

    /// Pause between animation frames
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn parse_topology(value: &str) -> std::result::Result<TopologyKind, String> {
    let count: u8 = value
        .parse()
        .map_err(|_| format!("expected 6, 8 or 12, got '{}'", value))?;
    TopologyKind::try_from(count).map_err(|e| e.to_string())
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(topology) = self.neighbors {
            config.topology = topology;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(file) = &self.file {
            config.source_file = Some(file.clone());
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(print_every) = self.print_every {
            config.print_every = print_every;
        }
        if let Some(probability) = self.probability {
            config.initial_probability = probability;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.animate {
            config.print_every = 1;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.log_format)?;

    let config = cli.simulation_config()?;
    info!(
        topology = %config.topology,
        size = config.size,
        source_file = ?config.source_file,
        generations = config.generations,
        print_every = config.print_every,
        "Starting hexlife"
    );

    let mut simulation = Simulation::new(config).context("failed to build the initial grid")?;

    let stdout = io::stdout().lock();
    let mut writer: Box<dyn RunObserver> = if cli.animate {
        let delay = Duration::from_millis(cli.delay_ms);
        Box::new(AnimatedWriter::new(stdout, delay).context("failed to enter alternate screen")?)
    } else {
        Box::new(ConsoleWriter::new(stdout))
    };

    simulation.run_with(&mut *writer)?;

    Ok(())
}
