//! Block segmentation and classification.
//!
//! A block is a blank-line-delimited slice of the source document. Its kind
//! is a pure function of its text, decided by one predicate per kind in a
//! fixed priority order: heading, fenced code, quote, unordered list,
//! ordered list, paragraph. Heading and paragraph are structural checks on
//! the block as a whole; the middle four inspect every line for a required
//! prefix, after removing a single trailing empty line.

use std::sync::LazyLock;

use regex::Regex;

use crate::{inline::never_matching_regex, types::BlockKind};

/// Triple-backtick fence opening and closing a code block.
const FENCE: &str = "```";

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(#{1,6}) ").unwrap_or_else(|e| {
    log::error!("failed to compile heading pattern: {e}");
    never_matching_regex()
  })
});

static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[1-9][0-9]*\.").unwrap_or_else(|e| {
    log::error!("failed to compile ordered-list pattern: {e}");
    never_matching_regex()
  })
});

/// Split a document into blank-line-delimited blocks.
///
/// Empty segments produced by trailing blank lines are dropped, never
/// classified.
#[must_use]
pub fn segment(document: &str) -> Vec<&str> {
  let mut blocks: Vec<&str> = document.split("\n\n").collect();
  while blocks.last().is_some_and(|block| block.is_empty()) {
    blocks.pop();
  }
  blocks
}

/// Classify one block by its structural pattern. First match wins.
#[must_use]
pub fn classify(block: &str) -> BlockKind {
  if let Some(level) = heading_level(block) {
    return BlockKind::Heading(level);
  }

  let lines = block_lines(block);
  if is_code(&lines) {
    return BlockKind::Code;
  }
  if is_quote(&lines) {
    return BlockKind::Quote;
  }
  if is_unordered_list(&lines) {
    return BlockKind::UnorderedList;
  }
  if is_ordered_list(&lines) {
    return BlockKind::OrderedList;
  }
  BlockKind::Paragraph
}

/// Lines of a block, with a single trailing empty line removed.
pub(crate) fn block_lines(block: &str) -> Vec<&str> {
  let mut lines: Vec<&str> = block.split('\n').collect();
  if lines.last().is_some_and(|line| line.is_empty()) {
    lines.pop();
  }
  lines
}

/// Text following a `N.` ordered-list marker, if the line carries one.
///
/// Any numeral sequence qualifies; sequential numbering is not enforced.
pub(crate) fn strip_ordered_marker(line: &str) -> Option<&str> {
  ORDERED_MARKER_RE
    .find(line)
    .map(|matched| &line[matched.end()..])
}

/// Heading level of the block's first line: one to six `#` characters
/// followed by a space.
fn heading_level(block: &str) -> Option<u8> {
  let captures = HEADING_RE.captures(block)?;
  u8::try_from(captures.get(1)?.as_str().len()).ok()
}

fn is_code(lines: &[&str]) -> bool {
  lines.first().is_some_and(|line| line.starts_with(FENCE))
    && lines.last().is_some_and(|line| line.starts_with(FENCE))
}

fn is_quote(lines: &[&str]) -> bool {
  !lines.is_empty() && lines.iter().all(|line| line.starts_with('>'))
}

fn is_unordered_list(lines: &[&str]) -> bool {
  !lines.is_empty()
    && lines
      .iter()
      .all(|line| line.starts_with('*') || line.starts_with('-'))
}

fn is_ordered_list(lines: &[&str]) -> bool {
  !lines.is_empty()
    && lines.iter().all(|line| ORDERED_MARKER_RE.is_match(line))
}
