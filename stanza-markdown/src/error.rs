//! Error types for markdown processing.
use thiserror::Error;

/// Errors surfaced by the markdown pipeline.
///
/// Every failure aborts processing of the document it occurred in; the
/// pipeline performs no retries and produces no partial output. Callers
/// decide whether to abort a whole site build or skip the one page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarkdownError {
  /// A `**`, `*` or backtick delimiter was opened but never closed.
  #[error("unclosed `{0}` delimiter in inline text")]
  UnclosedDelimiter(&'static str),

  /// No line starting with `# ` exists anywhere in the document.
  #[error("no h1 heading found in document")]
  NoHeadingFound,

  /// A container node was built with an empty tag.
  #[error("container node has no tag")]
  MissingTag,

  /// A container node was built with no children.
  #[error("container node has no children")]
  MissingChildren,

  /// A leaf node was built without a value.
  #[error("leaf node has no value")]
  MissingValue,

  /// A span could not be converted to an HTML node.
  #[error("invalid span: {0}")]
  InvalidSpan(String),
}
