use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use csvgres::{Database, EngineConfig, cli};

#[derive(Parser, Debug)]
#[command(name = "csvgres", version, about = "SQL-like statements over CSV files")]
struct Args {
    /// Directory holding the table files
    #[arg(short = 'd', long, value_name = "DIR", env = "CSVGRES_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Database namespace under the data directory, created if missing
    #[arg(long, value_name = "NAME", env = "CSVGRES_DATABASE")]
    database: Option<String>,

    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reject inserts whose value count differs from the column count
    #[arg(long, env = "CSVGRES_STRICT_INSERTS")]
    strict_inserts: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "CSVGRES_LOG_LEVEL")]
    log_level: String,

    /// Print configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    let config = load_config(&args).await?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    info!(
        data_dir = %config.data_dir.display(),
        database = config.database.as_deref().unwrap_or("-"),
        "starting csvgres"
    );
    let database = Database::open(config)
        .await
        .context("failed to initialize data directory")?;
    cli::cli(database).await.context("failed reading input")?;
    Ok(())
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else {
        args.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .await
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(database) = &args.database {
        config.database = Some(database.clone());
    }
    if args.strict_inserts {
        config.strict_insert_arity = true;
    }
    Ok(config)
}
