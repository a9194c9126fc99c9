use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};

mod assets;
mod cli;
mod config;
mod pages;
mod template;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  if let Some(Commands::Init { output, force }) = &cli.command {
    // Check if the file already exists and that we're not forcing overwrite
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    // Create parent directories if needed
    if let Some(parent) = output.parent() {
      if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }
    }

    Config::generate_default_config(output)?;
    info!("Configuration file created. Edit it to describe your site.");
    return Ok(());
  }

  // Create configuration from CLI and/or config file
  let config = Config::load(&cli)?;

  // Run the main site generation process
  build_site(&config)
}

/// Main site generation process
fn build_site(config: &Config) -> Result<()> {
  info!("Starting site build...");

  // Setup thread pool once for all parallel operations
  let thread_count = config.jobs.unwrap_or_else(num_cpus::get);
  rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build_global()?;

  // Static assets go in first; this also resets the output directory
  assets::copy_static(config)?;

  let generated = pages::generate_pages(config)?;

  info!(
    "Site generated successfully: {} pages in {}",
    generated.len(),
    config.output_dir.display()
  );

  Ok(())
}
