use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::{FormatRule, MoneyFormatter, RuleTable},
    errors::FormatError,
};

/// Overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "MONEY_RENDER_CONFIG";

const DEFAULT_DIR_NAME: &str = ".money_render";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatterConfig {
    /// Reject amounts with mismatched signs or out-of-range nanos.
    pub strict: bool,
    /// Extra per-currency rules layered over the built-in table.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, FormatRule>,
}

impl FormatterConfig {
    /// Builds a formatter from the built-in table plus the configured rules.
    pub fn formatter(&self) -> MoneyFormatter {
        let mut table = RuleTable::builtin();
        for (code, rule) in &self.rules {
            if table.register(code.as_str(), rule.clone()).is_some() {
                tracing::debug!(currency = %code, "configured rule replaces built-in");
            }
        }
        MoneyFormatter::new(table).with_strict(self.strict)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves `$MONEY_RENDER_CONFIG`, falling back to `~/.money_render/config.json`.
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the config file; a missing file yields the default config.
    pub fn load(&self) -> Result<FormatterConfig, FormatError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(FormatterConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: FormatterConfig = serde_json::from_str(&data)?;
        tracing::info!(
            path = %self.path.display(),
            rules = config.rules.len(),
            strict = config.strict,
            "loaded formatter config"
        );
        Ok(config)
    }

    pub fn save(&self, config: &FormatterConfig) -> Result<(), FormatError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn default_config_path() -> PathBuf {
    if let Some(custom) = env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
        .join(CONFIG_FILE)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), FormatError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
