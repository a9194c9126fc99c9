use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};

/// Default configuration written by `stanza init`, commented so the user is
/// not immediately lost.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Stanza site configuration

# Directory containing markdown content files
content_dir = "content"

# Directory of static assets copied into the output as-is
static_dir = "static"

# Output directory for the generated site
output_dir = "public"

# Path to a custom page template; the embedded default is used otherwise.
# The template is plain HTML with two literal placeholders:
# {{ Title }} and {{ Content }}
# template_path = "template.html"

# Number of threads for parallel page generation (defaults to CPU count)
# jobs = 4
"#;

// Default values live in functions so serde can reference them; literals
// alone cannot express a PathBuf.
fn default_content_dir() -> PathBuf {
  PathBuf::from("content")
}

fn default_static_dir() -> PathBuf {
  PathBuf::from("static")
}

fn default_output_dir() -> PathBuf {
  PathBuf::from("public")
}

/// Configuration options for stanza
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Directory containing markdown content files
  #[serde(default = "default_content_dir")]
  pub content_dir: PathBuf,

  /// Directory of static assets copied into the output as-is
  #[serde(default = "default_static_dir")]
  pub static_dir: PathBuf,

  /// Output directory for the generated site
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,

  /// Path to a custom page template; the embedded default is used otherwise
  #[serde(default)]
  pub template_path: Option<PathBuf>,

  /// Number of threads to use for parallel page generation
  #[serde(default)]
  pub jobs: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      content_dir:   default_content_dir(),
      static_dir:    default_static_dir(),
      output_dir:    default_output_dir(),
      template_path: None,
      jobs:          None,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read config file: {}", path.display())
    })?;

    match path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase)
      .as_deref()
    {
      Some("json") => {
        serde_json::from_str(&content).wrap_err_with(|| {
          format!("Failed to parse JSON config from {}", path.display())
        })
      },
      Some("toml") => {
        toml::from_str(&content).wrap_err_with(|| {
          format!("Failed to parse TOML config from {}", path.display())
        })
      },
      Some(_) => {
        Err(eyre!("Unsupported config file format: {}", path.display()))
      },
      None => Err(eyre!("Config file has no extension: {}", path.display())),
    }
  }

  /// Load config from file (explicit or discovered) and CLI arguments
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = if let Some(config_path) = &cli.config_file {
      // Config file explicitly specified via CLI
      Self::from_file(config_path).wrap_err_with(|| {
        format!("Failed to load config from {}", config_path.display())
      })?
    } else if let Some(discovered_config) = Self::find_config_file() {
      // Found a config file in a standard location
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).wrap_err_with(|| {
        format!(
          "Failed to load discovered config from {}",
          discovered_config.display()
        )
      })?
    } else {
      Self::default()
    };

    // CLI arguments win over file values
    config.merge_with_cli(cli);
    config.validate_paths()?;

    Ok(config)
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(Commands::Build {
      content_dir,
      output_dir,
      static_dir,
      template,
      jobs,
    }) = &cli.command
    {
      if let Some(content_dir) = content_dir {
        self.content_dir.clone_from(content_dir);
      }

      if let Some(output_dir) = output_dir {
        self.output_dir.clone_from(output_dir);
      }

      if let Some(static_dir) = static_dir {
        self.static_dir.clone_from(static_dir);
      }

      if let Some(template) = template {
        self.template_path = Some(template.clone());
      }

      self.jobs = jobs.or(self.jobs);
    }
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames =
      ["stanza.toml", "stanza.json", ".stanza.toml", ".stanza.json"];

    let current_dir = std::env::current_dir().ok()?;
    for filename in &config_filenames {
      let config_path = current_dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    None
  }

  /// Validate the paths specified in the configuration
  pub fn validate_paths(&self) -> Result<()> {
    let mut errors = Vec::new();

    if !self.content_dir.exists() {
      errors.push(format!(
        "Content directory does not exist: {}",
        self.content_dir.display()
      ));
    } else if !self.content_dir.is_dir() {
      errors.push(format!(
        "Content path is not a directory: {}",
        self.content_dir.display()
      ));
    }

    if let Some(ref template_path) = self.template_path {
      if !template_path.exists() {
        errors.push(format!(
          "Template file does not exist: {}",
          template_path.display()
        ));
      } else if !template_path.is_file() {
        errors.push(format!(
          "Template path is not a file: {}",
          template_path.display()
        ));
      }
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(eyre!("Configuration errors:\n{}", errors.join("\n")))
    }
  }

  /// Write a default configuration file for `stanza init`
  pub fn generate_default_config(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).wrap_err_with(|| {
      format!("Failed to write default config to {}", path.display())
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
