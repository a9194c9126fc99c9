use std::fs;

use color_eyre::eyre::{Context, Result};

use crate::config::Config;

// Embedded fallback used when no custom template is configured
const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.html");

/// Placeholder replaced with the page title extracted from the markdown.
const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced with the rendered HTML body.
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Get the page template: the configured file when present, the embedded
/// default otherwise.
pub fn load_template(config: &Config) -> Result<String> {
  if let Some(template_path) = &config.template_path {
    return fs::read_to_string(template_path).wrap_err_with(|| {
      format!(
        "Failed to read custom template file: {}. Check file permissions \
         and ensure the file is valid UTF-8",
        template_path.display()
      )
    });
  }

  Ok(DEFAULT_TEMPLATE.to_string())
}

/// Substitute the page title and rendered content into the template.
///
/// The placeholders are literal strings, not expressions; every occurrence
/// is replaced.
#[must_use]
pub fn render_page(template: &str, title: &str, content: &str) -> String {
  template
    .replace(TITLE_PLACEHOLDER, title)
    .replace(CONTENT_PLACEHOLDER, content)
}
