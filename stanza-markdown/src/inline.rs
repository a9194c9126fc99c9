//! Inline span tokenization.
//!
//! Turns one block's raw text into an ordered sequence of [`Span`]s in five
//! fixed stages: `**` bold, `*` italic, backtick code, then image and link
//! syntax. Each stage only re-splits the plain spans left by the previous
//! one, so the order is load-bearing: `**` must be consumed before `*`, and
//! images before links.
//!
//! The first three stages split on a fixed delimiter; the last two scan for
//! the leftmost regex match. The two algorithms stay separate because their
//! rules differ: only delimiter splitting drops empty parts and treats an
//! even part count as an unclosed delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
  error::MarkdownError,
  types::{Span, SpanKind},
};

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap_or_else(|e| {
    log::error!("failed to compile image pattern: {e}");
    never_matching_regex()
  })
});

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap_or_else(|e| {
    log::error!("failed to compile link pattern: {e}");
    never_matching_regex()
  })
});

/// Tokenize raw block text into styled spans.
///
/// # Errors
///
/// Returns [`MarkdownError::UnclosedDelimiter`] when a `**`, `*` or backtick
/// delimiter is left unpaired anywhere in the text. The failure is a hard
/// input-validation error for the whole document, not a recoverable
/// condition.
pub fn tokenize(text: &str) -> Result<Vec<Span>, MarkdownError> {
  let spans = vec![Span::plain(text)];
  let spans = split_on_delimiter(spans, "**", SpanKind::Bold)?;
  let spans = split_on_delimiter(spans, "*", SpanKind::Italic)?;
  let spans = split_on_delimiter(spans, "`", SpanKind::Code)?;
  let spans = split_images(spans);
  Ok(split_links(spans))
}

/// Split every plain span on `delimiter`; the parts alternate plain, styled,
/// plain, styled. Empty parts are dropped, so paired delimiters with nothing
/// between them produce no span. An even part count means the final
/// delimiter was never closed.
fn split_on_delimiter(
  spans: Vec<Span>,
  delimiter: &'static str,
  kind: SpanKind,
) -> Result<Vec<Span>, MarkdownError> {
  let mut out = Vec::with_capacity(spans.len());
  for span in spans {
    if span.kind != SpanKind::Plain {
      out.push(span);
      continue;
    }

    let parts: Vec<&str> = span.content.split(delimiter).collect();
    if parts.len() % 2 == 0 {
      return Err(MarkdownError::UnclosedDelimiter(delimiter));
    }

    for (index, part) in parts.iter().enumerate() {
      if part.is_empty() {
        continue;
      }
      if index % 2 == 1 {
        out.push(Span {
          kind,
          content: (*part).to_string(),
          target: None,
        });
      } else {
        out.push(Span::plain(*part));
      }
    }
  }
  Ok(out)
}

/// Extract `![alt](url)` occurrences from plain spans, splitting the
/// surrounding text into plain spans.
fn split_images(spans: Vec<Span>) -> Vec<Span> {
  let mut out = Vec::with_capacity(spans.len());
  for span in spans {
    if span.kind != SpanKind::Plain {
      out.push(span);
      continue;
    }

    let text = &span.content;
    let mut cursor = 0;
    for captures in IMAGE_RE.captures_iter(text) {
      let Some(matched) = captures.get(0) else {
        continue;
      };
      let before = &text[cursor..matched.start()];
      if !before.is_empty() {
        out.push(Span::plain(before));
      }
      out.push(Span::image(&captures[1], &captures[2]));
      cursor = matched.end();
    }
    if cursor < text.len() {
      out.push(Span::plain(&text[cursor..]));
    }
  }
  out
}

/// Extract `[text](url)` occurrences from plain spans.
///
/// A match whose `[` directly follows a `!` is image syntax the image pass
/// left alone; it is re-absorbed into the surrounding plain text verbatim.
/// Only the single character before `[` is inspected.
fn split_links(spans: Vec<Span>) -> Vec<Span> {
  let mut out = Vec::with_capacity(spans.len());
  for span in spans {
    if span.kind != SpanKind::Plain {
      out.push(span);
      continue;
    }

    let text = &span.content;
    let mut cursor = 0;
    for captures in LINK_RE.captures_iter(text) {
      let Some(matched) = captures.get(0) else {
        continue;
      };

      if text[..matched.start()].ends_with('!') {
        out.push(Span::plain(&text[cursor..matched.end()]));
        cursor = matched.end();
        continue;
      }

      let before = &text[cursor..matched.start()];
      if !before.is_empty() {
        out.push(Span::plain(before));
      }
      out.push(Span::link(&captures[1], &captures[2]));
      cursor = matched.end();
    }
    if cursor < text.len() {
      out.push(Span::plain(&text[cursor..]));
    }
  }
  out
}

/// Fallback pattern for the statically-compiled regexes above: asserts
/// something impossible, so it can never match any input.
pub(crate) fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(
      clippy::unwrap_used,
      reason = "This pattern is guaranteed to be valid"
    )]
    Regex::new(r"^\b$").unwrap()
  })
}
