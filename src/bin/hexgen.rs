use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use hex_selfplay::core::{GameRng, PlayMode, SimConfig};
use hex_selfplay::dataset::{
    filter_sort_by_moves, read_rows, remove_duplicates, save_examples, write_rows,
};
use hex_selfplay::training::{simulate_games, simulate_games_parallel, BalancedSampler};
use hex_selfplay::Result;

/// Generate Hex self-play datasets.
#[derive(Parser)]
#[command(name = "hexgen", about = "Heuristic Hex self-play dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play until every (starting color, winner) bucket is full
    Balanced {
        #[command(flatten)]
        sim: SimArgs,

        /// Examples per bucket
        #[arg(long)]
        target: Option<usize>,

        /// Give up after this many games (0 = no cap)
        #[arg(long)]
        max_games: Option<usize>,
    },
    /// Play a fixed number of games without balancing
    Batch {
        #[command(flatten)]
        sim: SimArgs,

        /// Number of games
        #[arg(long)]
        games: Option<usize>,

        /// Spread games across threads
        #[arg(long)]
        parallel: bool,
    },
    /// Remove repeated rows from a dataset file
    Dedup {
        input: PathBuf,

        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Keep rows within a stone-count range, sorted by stone count
    Sort {
        input: PathBuf,

        #[arg(long, default_value_t = 0)]
        min_moves: usize,

        #[arg(long, default_value_t = usize::MAX)]
        max_moves: usize,

        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options shared by the simulating subcommands. Flags override `--config`.
#[derive(Args)]
struct SimArgs {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Plies before the winning move to sample
    #[arg(short = 'k', long)]
    lookback: Option<usize>,

    /// Move choice: heuristic or random
    #[arg(long)]
    mode: Option<PlayMode>,

    /// Potential-field relaxation rounds
    #[arg(long)]
    rounds: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV (defaults to size{N}_games{T}_balanced.csv or size{N}_games{G}.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SimArgs {
    fn load(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => SimConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if let Some(lookback) = self.lookback {
            config = config.with_lookback(lookback);
        }
        if let Some(mode) = self.mode {
            config = config.with_play_mode(mode);
        }
        if let Some(rounds) = self.rounds {
            config = config.with_relaxation_rounds(rounds);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Balanced { sim, target, max_games } => {
            let mut config = sim.load()?;
            if let Some(target) = target {
                config = config.with_target_per_bucket(target);
            }
            if let Some(cap) = max_games {
                config = config.with_max_games(cap);
            }
            config.validate_balanced()?;

            let output = sim.output.clone().unwrap_or_else(|| {
                PathBuf::from(format!(
                    "size{}_games{}_balanced.csv",
                    config.board_size,
                    config.target_per_bucket * 4
                ))
            });

            let mut rng = GameRng::new(config.seed);
            let dataset = BalancedSampler::new(config).run(&mut rng)?;
            let written = save_examples(&output, &dataset.examples)?;
            log::info!(
                "wrote {} examples from {} games to {}",
                written,
                dataset.games_played,
                output.display()
            );
            if !dataset.complete {
                log::warn!("dataset is unbalanced; raise --max-games to fill every bucket");
            }
        }
        Command::Batch { sim, games, parallel } => {
            let mut config = sim.load()?;
            if let Some(games) = games {
                config = config.with_games(games);
            }
            config.validate()?;

            let output = sim.output.clone().unwrap_or_else(|| {
                PathBuf::from(format!("size{}_games{}.csv", config.board_size, config.games))
            });

            let mut rng = GameRng::new(config.seed);
            let result = if parallel {
                simulate_games_parallel(&config, &mut rng)?
            } else {
                simulate_games(&config, &mut rng)?
            };
            let written = save_examples(&output, &result.examples)?;
            let s = &result.summary;
            log::info!(
                "{} games: red {} / blue {} / drawn {}; wrote {} examples to {}",
                s.games,
                s.red_wins,
                s.blue_wins,
                s.draws,
                written,
                output.display()
            );
        }
        Command::Dedup { input, output } => {
            let rows = read_rows(&input)?;
            let (unique, removed) = remove_duplicates(rows);
            let output = output.unwrap_or(input);
            write_rows(&output, &unique)?;
            log::info!(
                "removed {} duplicates, {} rows left in {}",
                removed,
                unique.len(),
                output.display()
            );
        }
        Command::Sort { input, min_moves, max_moves, output } => {
            let rows = read_rows(&input)?;
            let before = rows.len();
            let kept = filter_sort_by_moves(rows, min_moves, max_moves);
            let output = output.unwrap_or(input);
            write_rows(&output, &kept)?;
            log::info!(
                "kept {} of {} rows ({}..={} stones) in {}",
                kept.len(),
                before,
                min_moves,
                max_moves,
                output.display()
            );
        }
    }

    Ok(())
}
