mod generate;
mod kinds;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sql-seeder")]
#[command(version)]
#[command(about = "Generate synthetic SQL INSERT fixtures for toy e-commerce and university schemas", long_about = None)]
pub struct Cli {
    /// Defaults to `generate` with default settings
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one .sql file of INSERT statements per entity kind
    Generate(GenerateArgs),

    /// List entity kinds with their tables, files and columns
    Kinds {
        /// Only list kinds of one domain: ecommerce or university
        #[arg(long)]
        domain: Option<String>,

        /// Output as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output directory for the generated files (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Records per entity kind (default: 100)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// SQL dialect for string literals: mysql, postgres, sqlite, mssql (default: mysql)
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Only generate specific kinds (comma-separated, e.g. customers,order_items)
    #[arg(short, long, conflicts_with = "domain")]
    pub kinds: Option<String>,

    /// Only generate kinds of one domain: ecommerce or university
    #[arg(long, conflicts_with = "kinds")]
    pub domain: Option<String>,

    /// YAML config file for defaults and per-kind settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Date treated as "today" by date rules (YYYY-MM-DD, default: local date)
    #[arg(long)]
    pub reference_date: Option<String>,

    /// Show progress during generation
    #[arg(short, long)]
    pub progress: bool,

    /// Verbose output (seed, dialect, per-file sizes) on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview without writing files (dry run)
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => generate::run(GenerateArgs::default()),
        Some(Commands::Generate(args)) => generate::run(args),
        Some(Commands::Kinds { domain, json }) => kinds::run(domain, json),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sql-seeder",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
