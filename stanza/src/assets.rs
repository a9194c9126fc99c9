use std::fs;

use color_eyre::eyre::{Context, Result, eyre};
use log::{debug, info};

use crate::config::Config;

/// Copy the static asset tree into the output directory.
///
/// A non-empty output directory is cleared first, so a rebuild never leaves
/// stale files behind.
///
/// # Errors
///
/// Returns an error when the static directory is missing or any file cannot
/// be copied.
pub fn copy_static(config: &Config) -> Result<()> {
  let static_dir = &config.static_dir;
  if !static_dir.is_dir() {
    return Err(eyre!(
      "Static directory does not exist: {}",
      static_dir.display()
    ));
  }

  let output_dir = &config.output_dir;
  if output_dir.exists() && has_entries(config)? {
    info!("Clearing stale output directory: {}", output_dir.display());
    fs::remove_dir_all(output_dir).wrap_err_with(|| {
      format!("Failed to clear output directory: {}", output_dir.display())
    })?;
  }
  fs::create_dir_all(output_dir).wrap_err_with(|| {
    format!("Failed to create output directory: {}", output_dir.display())
  })?;

  debug!("Copying static assets from {}", static_dir.display());
  let options = fs_extra::dir::CopyOptions::new()
    .overwrite(true)
    .content_only(true);
  fs_extra::dir::copy(static_dir, output_dir, &options)
    .wrap_err("Failed to copy static assets")?;

  Ok(())
}

fn has_entries(config: &Config) -> Result<bool> {
  let mut entries = fs::read_dir(&config.output_dir).wrap_err_with(|| {
    format!(
      "Failed to read output directory: {}",
      config.output_dir.display()
    )
  })?;
  Ok(entries.next().is_some())
}
