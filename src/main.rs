use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use jobscout::config::{get_config, load_config, Config};
use jobscout::models::ExperienceLevel;
use jobscout::utils::render_table;
use jobscout::{FallbackSearch, JSearchSource, JobPosting, JobSource, SearchCriteria};

/// jobscout - search jobs through the JSearch API with tiered query fallback
#[derive(Parser, Debug)]
#[command(name = "jobscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search jobs through the JSearch API with tiered query fallback", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (repeat for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search job postings with the full fallback cascade
    Search {
        /// Search keyword (e.g. "rust developer")
        keyword: String,

        /// Location appended to the query (e.g. "Austin, TX")
        #[arg(long, short)]
        location: Option<String>,

        /// Experience bracket: new-grad, entry-level, one-plus, three-plus.
        /// Unrecognized values widen the search instead of failing it.
        #[arg(long, short)]
        experience: Option<String>,

        /// Comma-separated skills (e.g. "rust,tokio,grpc")
        #[arg(long, short)]
        skills: Option<String>,

        /// Include military-friendly search terms
        #[arg(long)]
        military: bool,

        /// Search for remote positions
        #[arg(long)]
        remote: bool,

        /// Search for hybrid positions
        #[arg(long)]
        hybrid: bool,

        /// Result page to request
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Number of pages per request
        #[arg(long, default_value_t = 1)]
        num_pages: u32,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jobscout={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_cli_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(get_config()),
    }
}

fn print_postings(postings: &[JobPosting], source_name: &str, output: OutputFormat) -> Result<()> {
    let use_table = match output {
        OutputFormat::Table => true,
        OutputFormat::Json => false,
        OutputFormat::Auto => std::io::stdout().is_terminal(),
    };

    if use_table {
        if postings.is_empty() {
            println!("{}", format!("No postings found on {source_name}.").yellow());
        } else {
            println!("{}", render_table(postings));
            println!(
                "{}",
                format!("{} posting(s) found on {source_name}", postings.len()).green()
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(postings)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_cli_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Search {
            keyword,
            location,
            experience,
            skills,
            military,
            remote,
            hybrid,
            page,
            num_pages,
        } => {
            let mut criteria = SearchCriteria::new(keyword)
                .military(military)
                .remote(remote)
                .hybrid(hybrid)
                .page(page)
                .num_pages(num_pages);
            if let Some(location) = location {
                criteria = criteria.location(location);
            }
            if let Some(skills) = skills {
                criteria = criteria.skills(skills);
            }
            if let Some(text) = experience.as_deref() {
                if ExperienceLevel::parse(text).is_none() {
                    tracing::warn!(%text, "unrecognized experience level, searching without one");
                }
                criteria = criteria.experience_text(text);
            }

            let searcher = FallbackSearch::new(JSearchSource::new(config.jsearch));
            let postings = searcher.search(&criteria).await?;
            print_postings(&postings, searcher.source().name(), cli.output)?;
        }
    }

    Ok(())
}
