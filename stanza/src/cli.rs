use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for stanza
#[derive(Parser, Debug)]
#[command(version, about = "Stanza: a markdown static site generator")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the stanza CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new stanza configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "stanza.toml")]
    output: PathBuf,

    /// Force overwrite if the file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Build the site: render markdown content into HTML pages.
  Build {
    /// Path to the directory containing markdown content files.
    #[arg(short = 'i', long)]
    content_dir: Option<PathBuf>,

    /// Output directory for the generated site.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory of static assets copied into the output as-is.
    #[arg(short, long)]
    static_dir: Option<PathBuf>,

    /// Path to a custom page template file.
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Number of threads to use for parallel page generation.
    #[arg(short = 'p', long = "jobs")]
    jobs: Option<usize>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
