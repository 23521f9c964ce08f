//! Configuration for reslib.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (RESLIB_HOME, RESLIB_CORPUS)
//! 2. Config file (.reslib/config.yaml)
//! 3. Defaults (~/.reslib)
//!
//! Config file discovery:
//! - Searches current directory and parents for .reslib/config.yaml
//! - Paths in config file are relative to the project root (the parent of .reslib/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::query::{QueryEngine, SortKey, DEFAULT_RESULT_CAP};
use crate::library::{DEFAULT_CORPUS_SIZE, DEFAULT_SEED};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusConfig {
    /// Corpus JSON file (relative to the project root)
    pub path: Option<String>,
    /// Generator seed used when the file does not exist
    pub seed: Option<u64>,
    /// Number of records to generate
    pub size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    pub max_results: Option<usize>,
    pub default_sort: Option<SortKey>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to reslib home (state directory)
    pub home: PathBuf,
    /// Corpus file location
    pub corpus_path: PathBuf,
    pub corpus_seed: u64,
    pub corpus_size: usize,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Query settings
    pub query: QuerySettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    pub max_results: usize,
    pub default_sort: SortKey,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_RESULT_CAP,
            default_sort: SortKey::Relevance,
        }
    }
}

impl ResolvedConfig {
    /// Query engine with the configured cap
    pub fn engine(&self) -> QueryEngine {
        QueryEngine::new(self.query.max_results)
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".reslib").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Combine an optional config file with env overrides and defaults
fn resolve(
    config_file: Option<PathBuf>,
    file: Option<ConfigFile>,
    env_home: Option<String>,
    env_corpus: Option<String>,
) -> Result<ResolvedConfig> {
    let file = file.unwrap_or_else(|| ConfigFile {
        version: "1.0".to_string(),
        home: None,
        corpus: CorpusConfig::default(),
        query: QueryConfig::default(),
    });

    // Project root is the parent of .reslib/
    let base_dir = config_file
        .as_deref()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let home = match (env_home, &file.home) {
        (Some(env), _) => PathBuf::from(env),
        (None, Some(home)) => resolve_path(&base_dir, home),
        (None, None) => dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".reslib"),
    };

    let corpus_path = match (env_corpus, &file.corpus.path) {
        (Some(env), _) => PathBuf::from(env),
        (None, Some(path)) => resolve_path(&base_dir, path),
        (None, None) => home.join("corpus.json"),
    };

    let query = QuerySettings {
        max_results: file.query.max_results.unwrap_or(DEFAULT_RESULT_CAP),
        default_sort: file.query.default_sort.unwrap_or_default(),
    };

    if query.max_results == 0 {
        anyhow::bail!("query.max_results must be at least 1");
    }

    Ok(ResolvedConfig {
        home,
        corpus_path,
        corpus_seed: file.corpus.seed.unwrap_or(DEFAULT_SEED),
        corpus_size: file.corpus.size.unwrap_or(DEFAULT_CORPUS_SIZE),
        config_file,
        query,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = config_file.as_deref().map(load_config_file).transpose()?;

    resolve(
        config_file,
        file,
        std::env::var("RESLIB_HOME").ok(),
        std::env::var("RESLIB_CORPUS").ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
