use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use dayflow_postman::{build_collection, validate, write_collection, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dayflow HRMS Postman collection generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the collection and write it to disk (default)
    Generate {
        /// Output file; overrides DAYFLOW_POSTMAN_OUTPUT
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Value of the `baseUrl` variable; overrides DAYFLOW_BASE_URL
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Load a collection file and check its structure
    Check { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Generate {
        output: None,
        base_url: None,
    });

    match command {
        Commands::Generate { output, base_url } => {
            let settings = Settings::from_env()
                .and_then(|settings| settings.with_overrides(base_url, output))
                .context("invalid generator configuration")?;
            tracing::debug!(?settings, "resolved settings");

            let collection = build_collection(&settings);
            validate::validate(&collection).context("generated collection failed its own checks")?;

            let path = write_collection(&settings.output, &collection)
                .with_context(|| format!("failed to write {}", settings.output.display()))?;
            println!("Postman collection generated successfully: {}", path.display());
        }
        Commands::Check { path } => {
            let collection = validate::load(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let summary = validate::validate(&collection)
                .with_context(|| format!("{} is not a valid collection", path.display()))?;
            println!(
                "{}: {} folders, {} endpoints ({} with example bodies)",
                path.display(),
                summary.folders,
                summary.endpoints,
                summary.with_body
            );
        }
    }

    Ok(())
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    // stdout is reserved for the status line.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
