use crate::error::{PdfDocsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub suffix: String,
    pub extension: String,
    pub echo_text: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    pub name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["pdf".to_string()],
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "_extracted".to_string(),
            extension: "txt".to_string(),
            echo_text: true,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            name: "lopdf".to_string(),
        }
    }
}

const DEFAULT_CONFIG_PATHS: &[&str] = &["pdfdocs.toml", ".pdfdocs.toml"];

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PdfDocsError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PdfDocsError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| PdfDocsError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `config_path` if given, else the first default config file found
    /// in `search_dir` (the directory being scanned), else the defaults.
    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>, search_dir: &Path) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                for default_name in DEFAULT_CONFIG_PATHS {
                    let candidate = search_dir.join(default_name);
                    if candidate.is_file() {
                        return Self::load_from_file(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref backend) = cli_args.backend {
            self.backend.name = backend.trim().to_lowercase();
        }

        if let Some(ref suffix) = cli_args.suffix {
            self.output.suffix = suffix.clone();
        }

        if let Some(ref exclude) = cli_args.exclude {
            self.scan.exclude_patterns.extend(exclude.iter().cloned());
        }

        if cli_args.no_echo {
            self.output.echo_text = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(PdfDocsError::Config {
                message: "At least one input extension must be specified".to_string(),
            });
        }

        if self.output.suffix.is_empty() {
            return Err(PdfDocsError::Config {
                message: "Output suffix must not be empty".to_string(),
            });
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(PdfDocsError::Config {
                message: format!("Output suffix cannot contain path separators: {}", self.output.suffix),
            });
        }

        let output_ext = self.output.extension.trim_start_matches('.');
        if output_ext.is_empty() {
            return Err(PdfDocsError::Config {
                message: "Output extension must not be empty".to_string(),
            });
        }

        // Outputs live next to their inputs and must never be picked up as inputs.
        if self
            .scan
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(output_ext))
        {
            return Err(PdfDocsError::Config {
                message: format!("Output extension '{}' collides with an input extension", output_ext),
            });
        }

        for pattern in &self.scan.exclude_patterns {
            Regex::new(pattern)?;
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub backend: Option<String>,
    pub suffix: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub no_echo: bool,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: Option<String>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_no_echo(mut self, no_echo: bool) -> Self {
        self.no_echo = no_echo;
        self
    }
}
