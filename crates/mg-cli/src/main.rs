//! CLI frontend for the minigame arcade.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mg",
    about = "Minigames: hangman, glass bridge, guessing, rock-paper-scissors and tug of war",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive arcade session
    Play {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,

        /// Word bank JSON file (default: built-in words)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Data Dragon champion.json file (default: built-in roster)
        #[arg(short, long)]
        champions: Option<PathBuf>,

        /// Skip display delays
        #[arg(long)]
        instant: bool,
    },

    /// List the available games
    Games,

    /// List word bank categories
    Words {
        /// Word bank JSON file (default: built-in words)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List champions and their attributes
    Champions {
        /// Data Dragon champion.json file (default: built-in roster)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only champions whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            words,
            champions,
            instant,
        } => commands::play::run(seed, words, champions, instant),
        Commands::Games => commands::games::run(),
        Commands::Words { file } => commands::words::run(file),
        Commands::Champions { file, search } => commands::champions::run(file, search.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
