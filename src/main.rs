use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mc_connect_four::ai::arena::evaluate_against;
use mc_connect_four::ai::{best_move, evaluate_moves, MonteCarloAgent, RandomAgent};
use mc_connect_four::config::AppConfig;
use mc_connect_four::server::{self, AppState};
use mc_connect_four::wire::{format_move, parse_external_state, WireFormat};

/// Flat Monte-Carlo Connect Four engine.
#[derive(Parser)]
#[command(name = "mc_connect_four", about = "Flat Monte-Carlo Connect Four move engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Override playouts per candidate move
    #[arg(long, global = true)]
    rollouts: Option<usize>,

    /// Fix the random seed for reproducible results
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Evaluate candidate columns on a single thread
    #[arg(long, global = true)]
    serial: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve move requests over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Match payload format
        #[arg(long, value_enum)]
        format: Option<WireFormat>,
    },
    /// Pick a move for one match snapshot read from a file or stdin
    Select {
        /// Match JSON file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Match payload format
        #[arg(long, value_enum, default_value = "auto")]
        format: WireFormat,
    },
    /// Play the Monte-Carlo agent against a uniform-random opponent
    Arena {
        /// Number of games, alternating who moves first
        #[arg(long, default_value_t = 20)]
        games: usize,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    config
        .apply_env(|key| std::env::var(key).ok())
        .context("applying environment overrides")?;

    // Apply CLI overrides
    if let Some(rollouts) = cli.rollouts {
        config.evaluator.rollouts_per_move = rollouts;
    }
    if cli.seed.is_some() {
        config.evaluator.seed = cli.seed;
    }
    if cli.serial {
        config.evaluator.parallel = false;
    }

    match cli.command {
        Command::Serve { host, port, format } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(format) = format {
                config.server.wire_format = format;
            }
            config.validate().context("validating configuration")?;
            run_server(config)
        }
        Command::Select { input, format } => {
            config.validate().context("validating configuration")?;
            run_select(&config, input, format)
        }
        Command::Arena { games } => {
            config.validate().context("validating configuration")?;
            run_arena(&config, games)
        }
    }
}

fn run_server(config: AppConfig) -> Result<()> {
    let state = AppState {
        evaluator: config.evaluator.clone(),
        wire_format: config.server.wire_format,
    };
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime
        .block_on(server::serve(&config.server, state))
        .with_context(|| format!("serving on {}:{}", config.server.host, config.server.port))
}

fn run_select(config: &AppConfig, input: Option<PathBuf>, format: WireFormat) -> Result<()> {
    let raw = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading match from stdin")?;
            buf
        }
    };

    let state = parse_external_state(&raw, format).context("parsing match")?;
    eprintln!("{}", state.board());
    eprintln!("To move: {}", state.to_move().name());

    let mut rng = config.evaluator.rng();
    let evaluations =
        evaluate_moves(&state, &config.evaluator, &mut rng).context("evaluating moves")?;
    for eval in &evaluations {
        eprintln!(
            "  column {} | score {:+.4} | W {} L {} D {}",
            eval.column, eval.score, eval.tally.wins, eval.tally.losses, eval.tally.draws
        );
    }
    let best = best_move(&evaluations).context("no candidate move")?;

    println!("{}", format_move(best.column)?);
    Ok(())
}

fn run_arena(config: &AppConfig, games: usize) -> Result<()> {
    let mut agent = MonteCarloAgent::new(config.evaluator.clone());
    let mut opponent = match config.evaluator.seed {
        Some(seed) => RandomAgent::with_seed(seed.wrapping_add(1)),
        None => RandomAgent::new(),
    };

    println!(
        "Playing {} games: MonteCarlo ({} rollouts/move) vs Random",
        games, config.evaluator.rollouts_per_move
    );
    println!("-------------------------------------------");
    let report = evaluate_against(&mut agent, &mut opponent, games).context("running arena")?;
    println!(
        "Wins {} | Losses {} | Draws {} | win rate {:.1}%",
        report.wins,
        report.losses,
        report.draws,
        report.win_rate() * 100.0
    );
    Ok(())
}
