//! Configuration types for kaq.
//!
//! [`Config::load`] reads `~/.config/kaq/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! Field names are carried as values in `[[layers.fields]]` entries rather
//! than as table keys, so dotted names such as `objectRef.name` are kept
//! verbatim.

use crate::error::ConfigError;
use crate::syntax::QuerySyntax;
use crate::types::{ApiId, FieldSet, FieldSetTable, FieldSpec};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[query]
index  = "k8s_audit"
fields = [
    "objectRef.name",
    "objectRef.namespace",
    "requestReceivedTimestamp",
    "responseStatus.code",
    "sourceIPs{}",
    "user.username",
    "userAgent",
    "verb",
]

[syntax]
concat_operator = "+"

# Default layer: applies to every API.
[[layers]]
fields = [
    { name = "objectRef.name" },
    { name = "objectRef.namespace" },
    { name = "user.username" },
    { name = "verb" },
]

[[layers]]
group  = "apps"
kind   = "deployments"
fields = [
    { name = "replicas", source_fields = ["requestObject.spec.replicas"] },
    { name = "workload", source_fields = ["objectRef.namespace", "objectRef.name"] },
]

[[layers]]
group  = ""
kind   = "secrets"
fields = [
    { name = "secret_access", source_expr = "if(verb==\"get\" OR verb==\"list\",\"read\",\"write\")" },
]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/kaq/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub syntax: QuerySyntax,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

/// `[query]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_index")]
    pub index: String,
    /// Default universe of included fields.
    #[serde(default)]
    pub fields: Vec<String>,
}

fn default_index() -> String { "k8s_audit".to_string() }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            index: default_index(),
            fields: Vec::new(),
        }
    }
}

/// One `[[layers]]` entry. Empty `group` and `kind` mark the default layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayerConfig {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// One field entry inside a layer.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub source_fields: Vec<String>,
    #[serde(default)]
    pub source_expr: Option<String>,
}

/// Top level of an extra-layer file: a bare `fields` list.
#[derive(Debug, Clone, Default, Deserialize)]
struct ExtraLayerConfig {
    #[serde(default)]
    fields: Vec<FieldConfig>,
}

impl LayerConfig {
    pub fn api(&self) -> ApiId {
        ApiId::new(self.group.clone(), self.kind.clone())
    }

    pub fn field_set(&self) -> FieldSet {
        to_field_set(&self.fields)
    }
}

fn to_field_set(fields: &[FieldConfig]) -> FieldSet {
    fields
        .iter()
        .map(|f| {
            let spec = FieldSpec {
                source_fields: f.source_fields.clone(),
                source_expr: f.source_expr.clone(),
            };
            (f.name.clone(), spec)
        })
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/kaq/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default configuration");
        }

        Self::from_path(&path)
    }

    /// Load an explicit file on top of the built-in defaults.
    ///
    /// Arrays replace rather than merge, so a file that sets `layers`
    /// replaces the whole default table.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Build the [`FieldSetTable`] described by `[[layers]]`.
    pub fn table(&self) -> Result<FieldSetTable, ConfigError> {
        let mut table = FieldSetTable::new();
        for layer in &self.layers {
            let api = layer.api();
            if table.get(&api).is_some() {
                return Err(ConfigError::DuplicateLayer(api));
            }
            table.insert(api, layer.field_set());
        }
        Ok(table)
    }
}

/// Read an extra layer from a TOML file holding a `[[fields]]` list.
pub fn load_extra_layer(path: &Path) -> Result<FieldSet, ConfigError> {
    tracing::debug!(path = %path.display(), "loading extra field set");
    let extra: ExtraLayerConfig = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    Ok(to_field_set(&extra.fields))
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("kaq")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
