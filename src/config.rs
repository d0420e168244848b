use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    Settings,
    loader::DEFAULT_SUGGESTED_PATH,
    locator::{CallPattern, DEFAULT_FUNCTIONS},
};

pub const CONFIG_FILE_NAME: &str = ".keyseekrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Dictionary JSON file, absolute or relative to the project root.
    #[serde(default, alias = "i18nFilePath")]
    pub dictionary_path: Option<String>,
    /// Translation functions whose quoted argument counts as a key usage.
    #[serde(default = "default_functions")]
    pub functions: Vec<String>,
    /// Path proposed when asking for a dictionary file.
    #[serde(default = "default_suggested_path")]
    pub suggested_path: String,
}

fn default_functions() -> Vec<String> {
    DEFAULT_FUNCTIONS.iter().map(|f| f.to_string()).collect()
}

fn default_suggested_path() -> String {
    DEFAULT_SUGGESTED_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            functions: default_functions(),
            suggested_path: default_suggested_path(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.functions.is_empty() {
            bail!("'functions' must name at least one translation function");
        }
        for function in &self.functions {
            if function.trim().is_empty() {
                bail!("Invalid entry in 'functions': function names cannot be empty");
            }
            if function.chars().any(char::is_whitespace) {
                bail!(
                    "Invalid entry in 'functions': \"{}\" contains whitespace",
                    function
                );
            }
        }
        Ok(())
    }

    pub fn call_pattern(&self) -> CallPattern {
        CallPattern::new(self.functions.as_slice())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// In-memory settings: saving only updates the field.
impl Settings for Config {
    fn dictionary_path(&self) -> Option<String> {
        self.dictionary_path.clone()
    }

    fn suggested_path(&self) -> String {
        self.suggested_path.clone()
    }

    fn save_dictionary_path(&mut self, path: &str) -> Result<()> {
        self.dictionary_path = Some(path.to_string());
        Ok(())
    }
}

/// Configuration bound to the file it is persisted in.
///
/// Implements [`Settings`] for the loader. When no config file exists yet,
/// saving creates one in the project root.
#[derive(Debug)]
pub struct FileSettings {
    pub config: Config,
    path: PathBuf,
    /// `--dictionary` from the command line. Takes priority and is never saved.
    override_path: Option<String>,
}

impl FileSettings {
    pub fn load(root: &Path) -> Result<Self> {
        let result = load_config(root)?;
        let path = result
            .path
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
        Ok(Self {
            config: result.config,
            path,
            override_path: None,
        })
    }

    pub fn with_override(mut self, dictionary_path: Option<String>) -> Self {
        self.override_path = dictionary_path;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Settings for FileSettings {
    fn dictionary_path(&self) -> Option<String> {
        self.override_path
            .clone()
            .or_else(|| self.config.dictionary_path.clone())
    }

    fn suggested_path(&self) -> String {
        self.config.suggested_path.clone()
    }

    fn save_dictionary_path(&mut self, path: &str) -> Result<()> {
        // Keep whatever else the file holds, including keys this version
        // does not know about.
        let mut document = if self.path.exists() {
            let content = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read config file: {:?}", self.path))?;
            serde_json::from_str::<serde_json::Value>(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", self.path))?
        } else {
            serde_json::to_value(&self.config).context("Failed to serialize config.")?
        };

        let Some(object) = document.as_object_mut() else {
            bail!("Config file {:?} is not a JSON object", self.path);
        };
        object.remove("i18nFilePath");
        object.insert(
            "dictionaryPath".to_string(),
            serde_json::Value::String(path.to_string()),
        );

        let json = serde_json::to_string_pretty(&document).context("Failed to serialize config.")?;
        fs::write(&self.path, format!("{}\n", json))
            .with_context(|| format!("Failed to write config file: {:?}", self.path))?;

        self.config.dictionary_path = Some(path.to_string());
        Ok(())
    }
}
