//! CLI frontend for the Zhouyi divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zy",
    about = "Zhouyi — an I Ching divination engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a reading for a question
    Cast {
        /// The question to put to the oracle
        question: String,

        /// Casting method: three-coins, yarrow-sticks, numbers, random
        #[arg(short, long, default_value = "three-coins")]
        method: String,

        /// Six numbers in 1-9, comma-separated (numbers method)
        #[arg(short, long, value_delimiter = ',')]
        numbers: Option<Vec<u32>>,

        /// RNG seed for a reproducible cast (default: seeded from the OS)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the hexagram of the day
    Daily {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a hexagram's full catalog entry
    Show {
        /// King Wen number (1-64)
        number: u32,
    },

    /// List all 64 hexagrams
    List,

    /// Show the eight trigrams
    Trigrams,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            question,
            method,
            numbers,
            seed,
            json,
        } => commands::cast::run(&question, &method, numbers, seed, json),
        Commands::Daily { date, json } => commands::daily::run(date.as_deref(), json),
        Commands::Show { number } => commands::show::run(number),
        Commands::List => commands::list::run(),
        Commands::Trigrams => commands::trigrams::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
