//! Command-line front end.
//!
//! Flags fall back to the `[query]` section of the loaded configuration, so
//! `kaq --api apps/deployments` alone produces a usable query.

use anyhow::Context;
use clap::Parser;
use kaq_core::config::{load_extra_layer, Config};
use kaq_core::{ApiId, FieldSet, QueryGen};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kaq", about = "Kubernetes audit query generator")]
pub struct Cli {
    /// API resource to query, as `group/kind` (`/pods` for the core group).
    #[arg(long)]
    pub api: ApiId,

    /// Free-text search expression appended to the base clause.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Target index. Defaults to `query.index` from the configuration.
    #[arg(long)]
    pub index: Option<String>,

    /// Field to include; repeatable or comma-separated. Defaults to
    /// `query.fields` from the configuration.
    #[arg(long = "field", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Extra field set layer file, applied in the order given.
    #[arg(long)]
    pub extra: Vec<PathBuf>,

    /// Configuration file. Defaults to `~/.config/kaq/config.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Load configuration and extra layers, then render the query.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load()?,
    };
    let table = config.table()?;

    let extras = cli
        .extra
        .iter()
        .map(|path| {
            load_extra_layer(path).with_context(|| format!("loading extra layer {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<FieldSet>>>()?;

    let fields = if cli.fields.is_empty() {
        &config.query.fields
    } else {
        &cli.fields
    };
    let index = cli.index.as_deref().unwrap_or(&config.query.index);

    let query = QueryGen::new(&table)
        .with_syntax(&config.syntax)
        .generate(index, &cli.api, &cli.search, fields, &extras)?;
    Ok(query)
}
