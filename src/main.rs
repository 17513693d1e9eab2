use anyhow::Result;
use cadence_lib::app::report::render_catalog;
use cadence_lib::App;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "cadence.toml", global = true)]
    config: PathBuf,

    /// TOML file with `[[actions]]` replacing the configured catalog preset
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for the best rotation and print its trace
    Search {
        /// Override the configured generation count
        #[arg(short, long)]
        generations: Option<u64>,

        /// Override the configured RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Score a comma-separated rotation, repeated to the configured length
    Evaluate {
        #[arg(short, long, value_delimiter = ',')]
        rotation: Vec<String>,

        /// Write the report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// List the actions of the active catalog
    Catalog,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cadence_core::init_logging(&args.log);

    let mut app = App::from_paths(&args.config, args.catalog.as_deref())?;

    match args.command {
        Command::Search {
            generations,
            seed,
            json,
        } => {
            if let Some(generations) = generations {
                app.config.evolution.generations = generations;
            }
            if seed.is_some() {
                app.config.evolution.seed = seed;
            }
            println!("Running...");
            let report = app.search()?;
            println!("Best solution found has {:.4} potency per second.", report.score);
            print!("{}", report.render_trace());
            if let Some(path) = json {
                report.write_json(&path)?;
            }
        }
        Command::Evaluate { rotation, json } => {
            let report = app.evaluate_names(&rotation)?;
            print!("{}", report.render_trace());
            if let Some(path) = json {
                report.write_json(&path)?;
            }
        }
        Command::Catalog => {
            print!("{}", render_catalog(app.catalog()));
        }
    }

    Ok(())
}
