//! # folio CLI
//!
//! The `folio` binary loads portfolio JSON collections (projects, skills,
//! experience, videos) from local files or HTTP and searches across them.
//!
//! ## Usage
//!
//! ```bash
//! folio --config ./folio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio sources` | List configured sources and their health |
//! | `folio load` | Fetch all sources and report counts and failures |
//! | `folio search "<query>"` | Search projects, skills, and technologies |
//! | `folio show <section>` | Render one portfolio section |
//! | `folio watch` | Interactive debounced search on stdin |
//!
//! ## Examples
//!
//! ```bash
//! # Check the sources before anything else
//! folio sources
//!
//! # Fetch everything and show what loaded
//! folio load
//!
//! # Search, optionally narrowed to one kind
//! folio search "rust"
//! folio search "scanner" --filter projects --format json
//!
//! # Render a section
//! folio show experience
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use folio::config;
use folio::loader;
use folio::present::{self, OutputFormat, Section};
use folio::search::{self, SearchFilter};
use folio::sources;
use folio::watch;

/// folio, a terminal portfolio explorer.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `folio.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "folio — load portfolio JSON collections and search projects, skills, and technologies",
    version,
    long_about = "folio loads static JSON collections describing projects, skills, work \
    experience, and video content — from local files or over HTTP — and exposes rendered \
    section views plus an in-memory search engine across them."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./folio.toml`. All source locations and retrieval
    /// settings are read from this file.
    #[arg(long, global = true, default_value = "./folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List configured sources and their health.
    ///
    /// Shows each source's location and whether it passes a cheap health
    /// probe (path exists / URL well-formed). Nothing is fetched.
    Sources,

    /// Fetch all sources and report what loaded.
    ///
    /// The four fetches run concurrently; a failed source is reported on
    /// its own line and never aborts the others. Exits nonzero only when
    /// every source failed.
    Load {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Search projects, skills, and technologies.
    ///
    /// Builds the corpus from whatever sources loaded, then runs a
    /// substring query ranked by title relevance. Queries shorter than two
    /// characters after trimming return no results.
    Search {
        /// The search query string.
        query: String,

        /// Restrict results to one record kind.
        #[arg(long, value_enum, default_value_t = SearchFilter::All)]
        filter: SearchFilter,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<usize>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Render one portfolio section.
    ///
    /// Sections: projects, skills, experience, videos.
    Show {
        /// Section to render.
        #[arg(value_enum)]
        section: Section,
    },

    /// Interactive search on stdin with debounce.
    ///
    /// Each input line supersedes the previous one; the engine runs only
    /// after the configured quiet interval. `:filter <kind>` narrows,
    /// `:quit` exits.
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Load { format } => {
            let report = loader::load_all(&cfg).await;
            let corpus = report.build_corpus();
            present::print_load_report(&report, &corpus, format);
            if report.all_failed() {
                anyhow::bail!("all sources failed to load");
            }
        }
        Commands::Search {
            query,
            filter,
            limit,
            format,
        } => {
            let report = loader::load_all(&cfg).await;
            for failure in &report.failures {
                eprintln!("warning: {}", failure.error);
            }
            let corpus = report.build_corpus();
            let limit = limit.unwrap_or(cfg.retrieval.final_limit);
            let results = search::search(&corpus, &query, filter, limit);
            present::print_results(&results, format);
        }
        Commands::Show { section } => {
            let report = loader::load_all(&cfg).await;
            let failed = |name: &str| {
                report
                    .failure_for(name)
                    .map(|f| anyhow::anyhow!("{}", f.error))
            };
            match section {
                Section::Projects => match failed("projects") {
                    Some(err) => return Err(err),
                    None => present::print_projects(&report.projects),
                },
                Section::Skills => match failed("skills") {
                    Some(err) => return Err(err),
                    None => present::print_skills(&report.skills),
                },
                Section::Experience => match failed("experience") {
                    Some(err) => return Err(err),
                    None => present::print_experience(&report.experience),
                },
                Section::Videos => match report.videos {
                    Some(ref videos) => present::print_videos(videos),
                    None => match failed("videos") {
                        Some(err) => return Err(err),
                        None => println!("No videos available."),
                    },
                },
            }
        }
        Commands::Watch => {
            watch::run_watch(&cfg).await?;
        }
    }

    Ok(())
}
