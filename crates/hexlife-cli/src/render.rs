//! Terminal output for a simulation run.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use hexlife_core::Result;
use hexlife_world::{RunObserver, Snapshot};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Prints a `Gen N` header for every generation and the board on the print cadence
pub struct ConsoleWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RunObserver for ConsoleWriter<W> {
    fn on_generation(&mut self, generation: u64) -> Result<()> {
        writeln!(self.out, "Gen {}", generation)?;
        Ok(())
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        writeln!(self.out, "{}", snapshot.text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Redraws the board in place on the alternate screen, pausing between frames.
///
/// The terminal is restored when the writer is dropped.
pub struct AnimatedWriter<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> AnimatedWriter<W> {
    pub fn new(mut out: W, delay: Duration) -> io::Result<Self> {
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out, delay })
    }
}

impl<W: Write> RunObserver for AnimatedWriter<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(
            self.out,
            "Gen{} (population {})",
            snapshot.generation, snapshot.population
        )?;
        writeln!(self.out, "{}", snapshot.text)?;
        self.out.flush()?;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

impl<W: Write> Drop for AnimatedWriter<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlife_core::{SimulationConfig, TopologyKind};
    use hexlife_world::{Grid, Simulation};

    fn snapshot(generation: u64, text: &str) -> Snapshot {
        Snapshot {
            generation,
            population: text.chars().filter(|&c| c == 'X').count(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_console_headers_every_generation() {
        let grid = Grid::from_text(TopologyKind::Rect8, "XX\nXX").unwrap();
        let config = SimulationConfig {
            topology: TopologyKind::Rect8,
            generations: 3,
            print_every: 2,
            ..Default::default()
        };
        let mut sim = Simulation::from_grid(grid, config);

        let mut writer = ConsoleWriter::new(Vec::new());
        sim.run_with(&mut writer).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "XX\nXX\nGen 1\nGen 2\nXX\nXX\nGen 3\n");
    }

    #[test]
    fn test_animated_frame() {
        let mut out = Vec::new();
        {
            let mut writer = AnimatedWriter::new(&mut out, Duration::ZERO).unwrap();
            writer.on_generation(1).unwrap();
            writer.on_snapshot(&snapshot(1, "X")).unwrap();
        }

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Gen1 (population 1)\nX\n"));
        assert!(!output.contains("Gen 1\n"));

        let enter = output.find("\x1b[?1049h").unwrap();
        let frame = output.find("Gen1").unwrap();
        let leave = output.find("\x1b[?1049l").unwrap();
        assert!(enter < frame && frame < leave);
    }

    #[test]
    fn test_animated_frame_clears_and_homes() {
        let mut out = Vec::new();
        {
            let mut writer = AnimatedWriter::new(&mut out, Duration::ZERO).unwrap();
            writer.on_snapshot(&snapshot(0, ".")).unwrap();
        }

        let output = String::from_utf8(out).unwrap();
        let clear = output.find("\x1b[2J").unwrap();
        let home = output.find("\x1b[1;1H").unwrap();
        let frame = output.find("Gen0").unwrap();
        assert!(clear < home && home < frame);
    }
}
