#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Panics are fine inside tests."
)]
use std::{fs, path::Path};

use stanza::{assets, config::Config, pages};
use tempfile::TempDir;

fn site_config(root: &Path) -> Config {
  Config {
    content_dir:   root.join("content"),
    static_dir:    root.join("static"),
    output_dir:    root.join("public"),
    template_path: None,
    jobs:          None,
  }
}

fn write_file(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, content).unwrap();
}

#[test]
fn build_renders_content_tree_and_copies_static() {
  let dir = TempDir::new().unwrap();
  let root = dir.path();

  write_file(
    &root.join("content/index.md"),
    "# Welcome\n\nSome **bold** text\n",
  );
  write_file(
    &root.join("content/blog/post.md"),
    "# First Post\n\n* a\n* b\n",
  );
  write_file(&root.join("static/css/site.css"), "body { margin: 0 }");

  let config = site_config(root);
  assets::copy_static(&config).unwrap();
  let generated = pages::generate_pages(&config).unwrap();
  assert_eq!(generated.len(), 2);

  let index = fs::read_to_string(root.join("public/index.html")).unwrap();
  assert!(index.contains("<title>Welcome</title>"));
  assert!(
    index.contains("<div><h1>Welcome</h1><p>Some <b>bold</b> text</p></div>")
  );

  // Nested content keeps its directory, with the extension swapped
  let post = fs::read_to_string(root.join("public/blog/post.html")).unwrap();
  assert!(post.contains("<title>First Post</title>"));
  assert!(post.contains("<ul><li>a</li><li>b</li></ul>"));

  assert!(root.join("public/css/site.css").exists());
}

#[test]
fn rebuild_clears_stale_output() {
  let dir = TempDir::new().unwrap();
  let root = dir.path();

  write_file(&root.join("content/index.md"), "# Home\n");
  write_file(&root.join("static/robots.txt"), "User-agent: *");
  write_file(&root.join("public/stale.html"), "old build artifact");

  let config = site_config(root);
  assets::copy_static(&config).unwrap();

  assert!(!root.join("public/stale.html").exists());
  assert!(root.join("public/robots.txt").exists());
}

#[test]
fn custom_template_applies_to_every_page() {
  let dir = TempDir::new().unwrap();
  let root = dir.path();

  write_file(&root.join("content/note.md"), "# Note\n\nbody text\n");
  write_file(&root.join("template.html"), "[{{ Title }}]{{ Content }}");

  let config = Config {
    template_path: Some(root.join("template.html")),
    ..site_config(root)
  };
  fs::create_dir_all(root.join("public")).unwrap();
  pages::generate_pages(&config).unwrap();

  let note = fs::read_to_string(root.join("public/note.html")).unwrap();
  assert_eq!(note, "[Note]<div><h1>Note</h1><p>body text</p></div>");
}

#[test]
fn page_without_title_fails_the_build() {
  let dir = TempDir::new().unwrap();
  let root = dir.path();

  write_file(&root.join("content/untitled.md"), "just a paragraph\n");
  fs::create_dir_all(root.join("public")).unwrap();

  let config = site_config(root);
  assert!(pages::generate_pages(&config).is_err());
}

#[test]
fn unclosed_delimiter_fails_the_build() {
  let dir = TempDir::new().unwrap();
  let root = dir.path();

  write_file(&root.join("content/bad.md"), "# Bad\n\nunclosed *italic\n");
  fs::create_dir_all(root.join("public")).unwrap();

  let config = site_config(root);
  assert!(pages::generate_pages(&config).is_err());
}

#[test]
fn missing_static_directory_is_an_error() {
  let dir = TempDir::new().unwrap();
  let root = dir.path();

  write_file(&root.join("content/index.md"), "# Home\n");

  let config = site_config(root);
  assert!(assets::copy_static(&config).is_err());
}
