use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;
use stanza_markdown::{extract_title, markdown_to_html};
use walkdir::WalkDir;

use crate::{config::Config, template};

/// Collect every markdown content file under the content directory.
#[must_use]
pub fn collect_content_files(content_dir: &Path) -> Vec<PathBuf> {
  let mut files = Vec::with_capacity(100);

  for entry in WalkDir::new(content_dir)
    .follow_links(true)
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
      files.push(path.to_owned());
    }
  }

  debug!("Found {} content files to process", files.len());
  files
}

/// Render every content file into the output directory.
///
/// Pages are generated in parallel; any single page failure aborts the
/// build. Returns the generated output paths.
///
/// # Errors
///
/// Returns an error when a file cannot be read, converted, or written, or
/// when a page has no h1 title line.
pub fn generate_pages(config: &Config) -> Result<Vec<PathBuf>> {
  info!("Content directory: {}", config.content_dir.display());
  let files = collect_content_files(&config.content_dir);
  info!("Found {} markdown files", files.len());

  let template = template::load_template(config)?;

  files
    .par_iter()
    .map(|file_path| generate_page(config, &template, file_path))
    .collect()
}

/// Render one markdown file into its mirrored output path.
fn generate_page(
  config: &Config,
  template: &str,
  file_path: &Path,
) -> Result<PathBuf> {
  debug!("Generating page from {}", file_path.display());

  let markdown = fs::read_to_string(file_path).wrap_err_with(|| {
    format!("Failed to read markdown file: {}", file_path.display())
  })?;
  // A single final newline is an editor artifact, not content
  let markdown = markdown.strip_suffix('\n').unwrap_or(&markdown);

  let content = markdown_to_html(markdown)
    .wrap_err_with(|| format!("Failed to convert {}", file_path.display()))?;
  let title = extract_title(markdown).wrap_err_with(|| {
    format!("Failed to extract title from {}", file_path.display())
  })?;

  let page = template::render_page(template, &title, &content);

  let rel_path =
    file_path
      .strip_prefix(&config.content_dir)
      .wrap_err_with(|| {
        format!(
          "Failed to determine relative path for {}",
          file_path.display()
        )
      })?;
  let output_path = config.output_dir.join(rel_path).with_extension("html");

  if let Some(parent) = output_path.parent() {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create output directory: {}", parent.display())
    })?;
  }
  fs::write(&output_path, page).wrap_err_with(|| {
    format!("Failed to write output HTML: {}", output_path.display())
  })?;

  Ok(output_path)
}
