//! Headless Tessera runner.
//!
//! Runs one automaton for a fixed number of generations and prints a
//! status line every few generations: the generation, the state
//! histogram, the share of cells the last step changed and, for the
//! epidemic rule, peak infections and percent dead.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tessera::prelude::*;

/// Headless Tessera runner - simulate a cellular automaton and print statistics
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Run a 2D cellular automaton (life, covid7, stochastic3) headlessly")]
struct Args {
    /// Rule set: life, covid7 or stochastic3
    #[arg(long, default_value_t = RuleKind::Covid7)]
    rule: RuleKind,

    /// Grid width in cells
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Percent of cells initially infected (covid7 only); -1 seeds every
    /// cell uniformly at random
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i16).range(-1..=100)
    )]
    percent_infected: i16,

    /// Preset infection level (covid7 only); overrides --percent-infected
    #[arg(long, value_enum)]
    seeding: Option<InfectionLevel>,

    /// Treat cells beyond the edge as absent instead of wrapping around
    #[arg(long)]
    bounded: bool,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to run
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Print a status line every N generations
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    report_every: u64,
}

/// Preset infection levels for the epidemic rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum InfectionLevel {
    /// About 1% of cells infected.
    Low,
    /// About 99% of cells infected.
    High,
}

impl Args {
    fn seeding(&self) -> Seeding {
        match self.seeding {
            Some(InfectionLevel::Low) => Seeding::LowInfected,
            Some(InfectionLevel::High) => Seeding::HighInfected,
            None if self.percent_infected < 0 => Seeding::Uniform,
            None => Seeding::PercentInfected(self.percent_infected as u8),
        }
    }

    fn config(&self, seed: u64) -> AutomatonConfig {
        AutomatonConfig {
            width: self.width,
            height: self.height,
            rule: self.rule,
            edge: if self.bounded {
                EdgeBehavior::Absorb
            } else {
                EdgeBehavior::Wrap
            },
            seed,
            seeding: self.seeding(),
        }
    }
}

/// One status line for the automaton's current generation.
fn report_line(automaton: &Automaton) -> String {
    let histogram: Vec<String> = automaton
        .state_histogram()
        .iter()
        .map(u32::to_string)
        .collect();
    let changed = automaton
        .last_metrics()
        .change_ratio(automaton.grid().cell_count());
    let mut line = format!(
        "generation {:>6}  states [{}]  changed {:.1}%",
        automaton.generation(),
        histogram.join(", "),
        changed * 100.0
    );
    if let Some(stats) = automaton.epidemic_stats() {
        line.push_str(&format!(
            "  max infected {}  percent dead {}%",
            stats.max_infected, stats.percent_dead
        ));
    }
    line
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut automaton = Automaton::new(args.config(seed))?;
    println!("{}", report_line(&automaton));

    let start = Instant::now();
    for _ in 0..args.generations {
        automaton.advance();
        if automaton.generation().0 % args.report_every == 0 {
            println!("{}", report_line(&automaton));
        }
    }
    if args.generations % args.report_every != 0 {
        println!("{}", report_line(&automaton));
    }

    tracing::info!(
        generations = args.generations,
        seed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "run finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tessera").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_follow_the_viewer() {
        let args = parse(&[]);
        assert_eq!(args.rule, RuleKind::Covid7);
        assert_eq!((args.width, args.height), (800, 800));
        assert_eq!(args.seeding(), Seeding::Uniform);
        assert_eq!(args.config(3).edge, EdgeBehavior::Wrap);
    }

    #[test]
    fn percent_infected_selects_percent_seeding() {
        let args = parse(&["--percent-infected", "15"]);
        assert_eq!(args.seeding(), Seeding::PercentInfected(15));
        let args = parse(&["--percent-infected", "-1"]);
        assert_eq!(args.seeding(), Seeding::Uniform);
    }

    #[test]
    fn preset_overrides_percent() {
        let args = parse(&["--percent-infected", "15", "--seeding", "high"]);
        assert_eq!(args.seeding(), Seeding::HighInfected);
    }

    #[test]
    fn out_of_range_values_rejected() {
        let bad = [
            &["--percent-infected", "101"][..],
            &["--percent-infected", "-2"][..],
            &["--report-every", "0"][..],
            &["--rule", "brian"][..],
        ];
        for args in bad {
            let argv = std::iter::once("tessera").chain(args.iter().copied());
            assert!(Args::try_parse_from(argv).is_err(), "{args:?} accepted");
        }
    }

    #[test]
    fn bounded_flag_and_rule() {
        let args = parse(&["--bounded", "--rule", "life", "--seed", "9"]);
        let config = args.config(9);
        assert_eq!(config.edge, EdgeBehavior::Absorb);
        assert_eq!(config.rule, RuleKind::Life);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn life_rejects_infection_seeding() {
        let args = parse(&["--rule", "life", "--seeding", "low", "--width", "8", "--height", "8"]);
        assert!(matches!(run(&args), Err(ConfigError::Seed(_))));
    }

    #[test]
    fn report_line_contents() {
        let mut grid = Grid::new(3, 1, 7, EdgeBehavior::Wrap).unwrap();
        grid.set_cell(0, 0, 6).unwrap();
        let mut automaton = Automaton::from_grid(grid, RuleKind::Covid7.into(), 0).unwrap();
        let line = report_line(&automaton);
        assert!(line.starts_with("generation      0"));
        assert!(line.contains("states [2, 0, 0, 0, 0, 0, 1]"));
        assert!(line.contains("percent dead 0%"));

        automaton.advance();
        let line = report_line(&automaton);
        assert!(line.contains("percent dead 33%"));
        assert!(line.contains("max infected 2"));
    }

    #[test]
    fn report_line_without_epidemic_stats() {
        let grid = Grid::new(2, 2, 2, EdgeBehavior::Wrap).unwrap();
        let automaton = Automaton::from_grid(grid, Life.into(), 0).unwrap();
        assert_eq!(
            report_line(&automaton),
            "generation      0  states [4, 0]  changed 0.0%"
        );
    }

    #[test]
    fn report_line_shows_share_of_cells_changed() {
        // A blinker flips four of the 25 cells each generation.
        let mut grid = Grid::new(5, 5, 2, EdgeBehavior::Absorb).unwrap();
        for x in 1..=3 {
            grid.set_cell(x, 2, 1).unwrap();
        }
        let mut automaton = Automaton::from_grid(grid, Life.into(), 0).unwrap();
        automaton.advance();
        assert_eq!(
            report_line(&automaton),
            "generation      1  states [22, 3]  changed 16.0%"
        );
    }
}
