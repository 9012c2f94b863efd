//! `impact-explorer`: browse the endpoint catalog and generate `fetch` snippets.
//!
//! Think of it as the API explorer page of the dashboard, without the page.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use explorer_catalog::{Catalog, SortKey, SortOrder, TableSort};
use explorer_codegen_lib::SnippetOptions;
use tracing::info;

use commands::snippet::{parse_assignment, Overrides};
use config::ClientConfig;

/// Impact API explorer.
#[derive(Parser, Debug)]
#[command(name = "impact-explorer", about = "Impact API explorer and snippet generator")]
struct Cli {
    /// Path to client config file (default: ~/.impact-explorer/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Catalog file (.json / .yaml) to use instead of the built-in endpoints.
    #[arg(long = "catalog", global = true)]
    catalog: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List endpoints.
    List {
        /// Sort column.
        #[arg(long, value_enum, default_value = "name")]
        sort: SortColumn,
        /// Sort descending.
        #[arg(long)]
        desc: bool,
    },

    /// Show one endpoint and its parameters.
    Show {
        /// Endpoint ID (e.g. create-order).
        id: String,
    },

    /// Generate a JavaScript fetch snippet.
    Snippet {
        /// Endpoint ID.
        id: String,
        /// URL parameter value, name=value (repeatable).
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// Body parameter value, name=value (repeatable).
        #[arg(short = 'b', long = "body")]
        body: Vec<String>,
        /// Append URL parameters without a path placeholder as a query string.
        #[arg(long)]
        query: bool,
        /// Fail on array/object values that are not valid JSON.
        #[arg(long)]
        strict: bool,
        /// Base URL (overrides config).
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Validate a catalog file.
    Validate {
        /// Catalog file (.json / .yaml / .yml).
        file: PathBuf,
    },

    /// Show version.
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortColumn {
    Name,
    Method,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(ClientConfig::default_path);
    let config = ClientConfig::load(&config_path)?;
    let json_output = match cli.output.as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown output format: {} (expected table or json)", other),
    };

    let catalog_flag = cli.catalog.as_deref();

    match cli.command {
        Commands::List { sort, desc } => {
            let key = match sort {
                SortColumn::Name => SortKey::Name,
                SortColumn::Method => SortKey::Method,
            };
            let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
            let catalog = load_catalog(&config, catalog_flag)?;
            commands::endpoint::list(&catalog, TableSort::new(key, order), json_output)?;
        }

        Commands::Show { id } => {
            let catalog = load_catalog(&config, catalog_flag)?;
            commands::endpoint::show(&catalog, &id, json_output)?;
        }

        Commands::Snippet {
            id,
            params,
            body,
            query,
            strict,
            base_url,
        } => {
            let overrides = Overrides {
                path: params
                    .iter()
                    .map(|p| parse_assignment(p))
                    .collect::<anyhow::Result<_>>()?,
                body: body
                    .iter()
                    .map(|b| parse_assignment(b))
                    .collect::<anyhow::Result<_>>()?,
            };
            let mut options = SnippetOptions {
                append_query: query,
                ..Default::default()
            };
            if let Some(url) = base_url.or_else(|| config.base_url.clone()) {
                options.base_url = url;
            }
            let catalog = load_catalog(&config, catalog_flag)?;
            commands::snippet::run(&catalog, &id, &overrides, options, strict, json_output)?;
        }

        Commands::Validate { file } => {
            commands::endpoint::validate(&file)?;
        }

        Commands::Version => {
            println!("impact-explorer v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Catalog from `--catalog`, else the config file, else the built-in one.
fn load_catalog(config: &ClientConfig, flag: Option<&str>) -> anyhow::Result<Catalog> {
    match config.catalog_path(flag) {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::load(&path).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
        }
        None => Ok(Catalog::builtin()),
    }
}
