use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod errors;
mod handlers;
mod ui;

/// Storefront filter codec - move filter selections in and out of URL query strings
///
/// Examples:
///   # Encode selections, keeping unrelated parameters
///   facetq encode --catalog catalog.json --query "?page=2" --select category_id=19 --select color=5
///
///   # Decode a query string back into selections
///   facetq decode "?category_id%5Bfilter%5D=Pants+%26+Shorts%2C19" --catalog catalog.json
///
///   # Inspect filter parameters before a catalog is available
///   facetq extract "?color[filter]=Red,5&color[filter]=Blue,6"
///
///   # Check a catalog file
///   facetq catalog catalog.json
#[derive(Parser, Debug)]
#[command(name = "facetq")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Query Format:\n  \
    - Each selected item is one '<group>[filter]=<title>,<value>' parameter\n  \
    - Encoding replaces every recognized filter parameter and keeps the rest\n  \
    - Decoding drops values the catalog does not know, with a warning\n\n\
Recognized Keys:\n  \
    - --keys accepts group names ('color') or parameter keys ('color[filter]')\n  \
    - Without --keys every group in the catalog is recognized")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, env = "FACETQ_LOG", default_value = "warn")]
    log_level: String,

    /// Print machine-readable JSON instead of markdown
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode filter selections into a query string
    Encode {
        /// Existing query string whose unrelated parameters are preserved
        #[arg(short, long, default_value = "")]
        query: String,

        /// Path to the filter catalog JSON file
        #[arg(short, long, env = "FACETQ_CATALOG", value_name = "FILE")]
        catalog: PathBuf,

        /// Recognized filter groups (can be specified multiple times)
        #[arg(short, long = "keys", value_name = "GROUP")]
        keys: Vec<String>,

        /// Selected item (format: group=value, can be specified multiple times)
        #[arg(short, long = "select", value_name = "GROUP=VALUE")]
        select: Vec<String>,
    },

    /// Decode a query string into filter selections
    Decode {
        /// Query string to decode
        #[arg(value_name = "QUERY")]
        query: String,

        /// Path to the filter catalog JSON file
        #[arg(short, long, env = "FACETQ_CATALOG", value_name = "FILE")]
        catalog: PathBuf,

        /// Recognized filter groups (can be specified multiple times)
        #[arg(short, long = "keys", value_name = "GROUP")]
        keys: Vec<String>,
    },

    /// List raw filter parameters without resolving them
    Extract {
        /// Query string to inspect
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Remove HTML tags from a facet title
    StripHtml {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Validate and print a filter catalog
    Catalog {
        /// Path to the filter catalog JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Encode {
            query,
            catalog,
            keys,
            select,
        } => handlers::handle_encode(&query, &catalog, &keys, &select, cli.json),
        Command::Decode {
            query,
            catalog,
            keys,
        } => handlers::handle_decode(&query, &catalog, &keys, cli.json),
        Command::Extract { query } => handlers::handle_extract(&query, cli.json),
        Command::StripHtml { text } => handlers::handle_strip_html(&text),
        Command::Catalog { file } => handlers::handle_catalog(&file, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(err) = run(cli) {
        tracing::debug!(error = %err, "command failed");
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
