use anyhow::Result;
use clap::{Parser, Subcommand};
use dataset_testkit::app::config::TestkitConfig;
use dataset_testkit::app::logging::init_cli_logging;
use dataset_testkit::cli;
use dataset_testkit::domain::dataset::DatasetRef;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dstk", version, about = "dataset-testkit: inspect test fixtures and dataset file listings")]
struct Cli {
    /// JSON config file (environment variables still override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the files in a fixture directory
    Fixtures {
        /// Fixture directory (defaults to the configured test_data_dir)
        dir: Option<PathBuf>,
    },
    /// List the stored files of a dataset, e.g. `mnist/3.0.1`
    List {
        dataset: DatasetRef,
        /// Read from a local mirror directory instead of the remote bucket
        #[arg(long)]
        mirror: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a scratch directory under the temp root and print its path
    Scratch,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_cli_logging(args.verbose);

    let config = match &args.config {
        Some(path) => TestkitConfig::load(path)?,
        None => TestkitConfig::default(),
    }
    .with_env_overrides();

    match args.command {
        Command::Fixtures { dir } => cli::list_fixtures(&config, dir.as_deref()),
        Command::List {
            dataset,
            mirror,
            json,
        } => cli::list_dataset(&config, &dataset, mirror.as_deref(), json),
        Command::Scratch => cli::make_scratch(&config),
        Command::Config => cli::show_config(&config),
    }
}
