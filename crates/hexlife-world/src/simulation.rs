//! Simulation driver: builds a grid from configuration and steps it.

use crate::grid::Grid;
use hexlife_core::{Result, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A rendered board at a given generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub population: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub generations_run: u64,
    pub snapshots_emitted: u64,
    pub final_population: usize,
}

/// Receives progress from [`Simulation::run_with`].
pub trait RunObserver {
    /// Called after every update with the generation just reached
    fn on_generation(&mut self, _generation: u64) -> Result<()> {
        Ok(())
    }

    /// Called for the starting board and every `print_every`th generation
    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()>;
}

struct SnapshotFn<F>(F);

impl<F> RunObserver for SnapshotFn<F>
where
    F: FnMut(&Snapshot) -> Result<()>,
{
    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        (self.0)(snapshot)
    }
}

pub struct Simulation {
    grid: Grid,
    config: SimulationConfig,
    generation: u64,
}

impl Simulation {
    /// Build the grid from `source_file` when set, otherwise seed it randomly
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let grid = match &config.source_file {
            Some(path) => {
                let grid = Grid::from_file(config.topology, path)?;
                if !grid.warnings().is_empty() {
                    warn!(
                        path = %path.display(),
                        inconsistent_rows = grid.warnings().len(),
                        "Layout rows padded or truncated to {} cells",
                        grid.size()
                    );
                }
                grid
            }
            None => {
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                Grid::random(
                    config.topology,
                    config.size,
                    config.initial_probability,
                    &mut rng,
                )?
            }
        };

        Ok(Self::from_grid(grid, config))
    }

    /// Drive an already constructed grid; only the generation settings of `config` apply.
    pub fn from_grid(grid: Grid, config: SimulationConfig) -> Self {
        Self {
            grid,
            config,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance one generation and return the new generation number
    pub fn step(&mut self) -> u64 {
        self.grid.update();
        self.generation += 1;
        self.generation
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            population: self.grid.population(),
            text: self.grid.render(),
        }
    }

    /// Run the configured number of generations.
    ///
    /// `on_snapshot` receives the starting board and then every
    /// `print_every`th generation. An error from the callback stops the run.
    pub fn run<F>(&mut self, on_snapshot: F) -> Result<SimulationResult>
    where
        F: FnMut(&Snapshot) -> Result<()>,
    {
        self.run_with(&mut SnapshotFn(on_snapshot))
    }

    /// Like [`Simulation::run`], also reporting every generation to the observer.
    #[instrument(skip(self, observer), fields(
        topology = %self.config.topology,
        size = self.grid.size(),
        generations = self.config.generations,
    ))]
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<SimulationResult>
    where
        O: RunObserver + ?Sized,
    {
        info!("Starting simulation for {} generations", self.config.generations);

        let mut snapshots_emitted = 0;
        self.emit(observer)?;
        snapshots_emitted += 1;

        let print_every = self.config.print_every.max(1);
        for _ in 0..self.config.generations {
            let generation = self.step();
            observer.on_generation(generation)?;
            if generation % print_every == 0 {
                self.emit(observer)?;
                snapshots_emitted += 1;
            }
        }

        let result = SimulationResult {
            generations_run: self.generation,
            snapshots_emitted,
            final_population: self.grid.population(),
        };

        info!(
            event = "run_summary",
            generations_run = result.generations_run,
            snapshots_emitted = result.snapshots_emitted,
            final_population = result.final_population,
            "Simulation complete"
        );

        Ok(result)
    }

    fn emit<O>(&self, observer: &mut O) -> Result<()>
    where
        O: RunObserver + ?Sized,
    {
        let snapshot = self.snapshot();
        info!(
            event = "population_metrics",
            generation = snapshot.generation,
            population = snapshot.population,
            "Population snapshot"
        );
        observer.on_snapshot(&snapshot)
    }
}
