//! Command-line interface for reslib.
//!
//! Provides commands for searching the resource library, inspecting single
//! records, summarizing the corpus, and generating sample corpora.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, ResolvedConfig};
use crate::core::{AxisFilter, ResourceQuery, SortKey};
use crate::domain::{Category, Resource, ResourceId};
use crate::library::{Corpus, ResourceGenerator, DEFAULT_FEATURED_LIMIT};

/// reslib - Wellness resource library
#[derive(Parser, Debug)]
#[command(name = "reslib")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the library
    Search {
        /// Free-text query (matches title, description, author, tags)
        #[arg(default_value = "")]
        text: String,

        /// Category filter ("all" disables it)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Resource type filter ("all" disables it)
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: String,

        /// Difficulty filter ("all" disables it)
        #[arg(short, long, default_value = "all")]
        difficulty: String,

        /// Only show featured resources
        #[arg(short, long)]
        featured: bool,

        /// Sort order (defaults to the configured sort)
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Maximum number of results (capped by query.max_results)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a resource
    Show {
        /// Resource ID
        resource_id: String,
    },

    /// Show corpus statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List featured resources
    Featured {
        /// Maximum number of resources to show
        #[arg(short, long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
    },

    /// List resources in a category ("all" lists everything)
    Category {
        /// Category name
        category: String,

        /// Maximum number of resources to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Generate a sample corpus and write it as JSON
    Generate {
        /// Generator seed (defaults to corpus.seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of resources (defaults to corpus.size)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output file (defaults to the configured corpus path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Sort order for CLI (maps to SortKey)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Featured first, then most downloaded
    Relevance,

    /// Most downloaded first
    Downloads,

    /// Most cited first
    Citations,

    /// Most recently published first
    #[value(alias = "date")]
    Recency,
}

impl From<SortArg> for SortKey {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Relevance => SortKey::Relevance,
            SortArg::Downloads => SortKey::Downloads,
            SortArg::Citations => SortKey::Citations,
            SortArg::Recency => SortKey::Recency,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Search {
                text,
                category,
                kind,
                difficulty,
                featured,
                sort,
                limit,
                json,
            } => {
                let cfg = config::config()?;
                let query = ResourceQuery {
                    text,
                    filters: crate::core::ResourceFilters {
                        category: AxisFilter::parse(&category),
                        kind: AxisFilter::parse(&kind),
                        difficulty: AxisFilter::parse(&difficulty),
                        featured_only: featured,
                    },
                    sort: sort.map(SortKey::from).unwrap_or(cfg.query.default_sort),
                    limit,
                };
                search(cfg, &query, json).await
            }
            Commands::Show { resource_id } => show_resource(&resource_id).await,
            Commands::Stats { json } => show_stats(json).await,
            Commands::Featured { limit } => list_featured(limit).await,
            Commands::Category { category, limit } => list_category(&category, limit).await,
            Commands::Generate {
                seed,
                count,
                output,
            } => generate_corpus(seed, count, output).await,
            Commands::Config => show_config(),
        }
    }
}

/// Load the configured corpus, generating it when no file exists
async fn load_corpus(cfg: &ResolvedConfig) -> Result<Corpus> {
    Corpus::open_or_generate(&cfg.corpus_path, cfg.corpus_seed, cfg.corpus_size)
        .await
        .with_context(|| format!("Failed to open corpus: {}", cfg.corpus_path.display()))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn print_table(resources: &[&Resource]) {
    println!(
        "{:<14} {:<14} {:<9} {:>9} {:<50}",
        "ID", "CATEGORY", "TYPE", "DOWNLOADS", "TITLE"
    );
    println!("{}", "-".repeat(100));

    for r in resources {
        let marker = if r.featured { "*" } else { " " };
        println!(
            "{:<14} {:<14} {:<9} {:>9} {}{}",
            r.id.as_str(),
            r.category.as_str(),
            r.kind.as_str(),
            r.downloads,
            marker,
            truncate(&r.title, 49)
        );
    }
}

/// Run a query and print the results
async fn search(cfg: &ResolvedConfig, query: &ResourceQuery, json: bool) -> Result<()> {
    let corpus = load_corpus(cfg).await?;
    let results = cfg.engine().execute(&corpus, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results.resources)?);
        return Ok(());
    }

    if results.resources.is_empty() {
        println!("No resources found. Try adjusting your search or filters.");
        return Ok(());
    }

    print_table(&results.resources);
    println!(
        "\nShowing {} of {} matching resources (sorted by {})",
        results.resources.len(),
        results.total_matches,
        query.sort
    );

    Ok(())
}

/// Show details of a resource
async fn show_resource(resource_id: &str) -> Result<()> {
    let cfg = config::config()?;
    let corpus = load_corpus(cfg).await?;

    let resource = corpus
        .get(&ResourceId::new(resource_id))
        .ok_or_else(|| anyhow::anyhow!("Resource not found: {}", resource_id))?;

    println!("════════════════════════════════════════════════════════════");
    println!("  ID: {}", resource.id);
    println!("  Title: {}", resource.title);
    println!("  Author: {}", resource.author);
    println!("  Category: {}", resource.category.label());
    println!("  Type: {}", resource.kind);
    println!("  Difficulty: {}", resource.difficulty);
    if let Some(read_time) = &resource.read_time {
        println!("  Length: {}", read_time);
    }
    println!("  Published: {}", resource.published);
    println!("  Downloads: {}", resource.downloads);
    println!("  Citations: {}", resource.citations);
    println!("  Featured: {}", if resource.featured { "yes" } else { "no" });
    if !resource.tags.is_empty() {
        println!("  Tags: {}", resource.tags.join(", "));
    }
    println!("════════════════════════════════════════════════════════════");
    println!("\n{}", resource.description);

    Ok(())
}

/// Show corpus statistics
async fn show_stats(json: bool) -> Result<()> {
    let cfg = config::config()?;
    let corpus = load_corpus(cfg).await?;
    let stats = corpus.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Resources: {}", stats.total_resources);
    println!("Downloads: {}", stats.total_downloads);
    println!("Citations: {}", stats.total_citations);
    println!("\nBy category:");
    for (category, count) in &stats.by_category {
        println!("  {:<26} {}", category.label(), count);
    }
    println!("\nBy type:");
    for (kind, count) in &stats.by_kind {
        println!("  {:<26} {}", kind, count);
    }

    Ok(())
}

/// List featured resources
async fn list_featured(limit: usize) -> Result<()> {
    let cfg = config::config()?;
    let corpus = load_corpus(cfg).await?;
    let featured = corpus.featured(limit);

    if featured.is_empty() {
        println!("No featured resources.");
        return Ok(());
    }

    print_table(&featured);
    Ok(())
}

/// List resources in a category
async fn list_category(category: &str, limit: Option<usize>) -> Result<()> {
    let cfg = config::config()?;
    let corpus = load_corpus(cfg).await?;

    let filter = AxisFilter::<Category>::parse(category);
    let items = corpus.by_category(&filter, limit);

    if items.is_empty() {
        println!("No resources in category: {}", category);
        return Ok(());
    }

    let heading = match &filter {
        AxisFilter::Exactly(c) => c.label(),
        _ => "All Categories",
    };
    print_table(&items);
    println!("\n{}: {} resources", heading, items.len());
    Ok(())
}

/// Generate a corpus and write it to disk
async fn generate_corpus(
    seed: Option<u64>,
    count: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::config()?;
    let seed = seed.unwrap_or(cfg.corpus_seed);
    let count = count.unwrap_or(cfg.corpus_size);
    let output = output.unwrap_or_else(|| cfg.corpus_path.clone());

    let corpus = Corpus::new(ResourceGenerator::new(seed).generate(count))?;
    corpus
        .save(&output)
        .await
        .with_context(|| format!("Failed to write corpus: {}", output.display()))?;

    eprintln!("Generated {} resources (seed {})", corpus.len(), seed);
    eprintln!("   Written to: {}", output.display());

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("════════════════════════════════════════════════════════════");
    println!("  reslib Configuration");
    println!("════════════════════════════════════════════════════════════");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!(
        "  Corpus:  {}{}",
        cfg.corpus_path.display(),
        if cfg.corpus_path.exists() { "" } else { " (missing, will generate)" }
    );
    println!();
    println!("Generator:");
    println!("  Seed: {}", cfg.corpus_seed);
    println!("  Size: {}", cfg.corpus_size);
    println!();
    println!("Query:");
    println!("  Max results:  {}", cfg.query.max_results);
    println!("  Default sort: {}", cfg.query.default_sort);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 8), "abcde...");
        assert_eq!(truncate("Crohn’s disease guide", 10), "Crohn’s...");
    }

    #[test]
    fn test_search_args_parse() {
        let cli = Cli::try_parse_from([
            "reslib", "search", "arthritis", "--category", "nutrition", "--type", "guide",
            "--sort", "date", "--featured", "--limit", "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                text,
                category,
                kind,
                difficulty,
                featured,
                sort,
                limit,
                json,
            } => {
                assert_eq!(text, "arthritis");
                assert_eq!(category, "nutrition");
                assert_eq!(kind, "guide");
                assert_eq!(difficulty, "all");
                assert!(featured);
                assert_eq!(sort.map(SortKey::from), Some(SortKey::Recency));
                assert_eq!(limit, Some(5));
                assert!(!json);
            }
            other => panic!("Expected search command, got {:?}", other),
        }
    }
}
