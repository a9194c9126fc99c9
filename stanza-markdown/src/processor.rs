//! Whole-document conversion: blocks to HTML nodes to a rendered string.
//!
//! The builder dispatches on each block's [`BlockKind`], tokenizes the
//! block's inline text where the kind calls for it, and wraps the result in
//! the matching container. The root of every document tree is a single `div`
//! container.

use log::trace;

use crate::{
  block,
  error::MarkdownError,
  inline,
  node::HtmlNode,
  types::{BlockKind, Span, SpanKind},
};

/// Convert a whole markdown document into its HTML node tree.
///
/// # Errors
///
/// Propagates [`MarkdownError::UnclosedDelimiter`] from inline tokenization.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, MarkdownError> {
  let blocks = block::segment(document);
  trace!("building node tree from {} blocks", blocks.len());

  let mut children = Vec::with_capacity(blocks.len());
  for raw in blocks {
    children.push(block_to_node(raw)?);
  }
  Ok(HtmlNode::container("div", children))
}

/// Convert a whole markdown document straight to its HTML string.
///
/// # Errors
///
/// Propagates tokenization failures from [`markdown_to_html_node`] and
/// node-contract failures from [`HtmlNode::render`].
pub fn markdown_to_html(document: &str) -> Result<String, MarkdownError> {
  markdown_to_html_node(document)?.render()
}

/// Extract the document title: the remainder of the first line starting
/// with `# `.
///
/// This scans raw lines anywhere in the document, independent of block
/// segmentation.
///
/// # Errors
///
/// [`MarkdownError::NoHeadingFound`] when no such line exists.
pub fn extract_title(document: &str) -> Result<String, MarkdownError> {
  document
    .lines()
    .find_map(|line| line.strip_prefix("# "))
    .map(str::to_string)
    .ok_or(MarkdownError::NoHeadingFound)
}

fn block_to_node(raw: &str) -> Result<HtmlNode, MarkdownError> {
  match block::classify(raw) {
    BlockKind::Heading(level) => heading_node(raw, level),
    BlockKind::Code => Ok(code_node(raw)),
    BlockKind::Quote => quote_node(raw),
    BlockKind::UnorderedList => list_node(raw, "ul"),
    BlockKind::OrderedList => list_node(raw, "ol"),
    BlockKind::Paragraph => paragraph_node(raw),
  }
}

fn heading_node(raw: &str, level: u8) -> Result<HtmlNode, MarkdownError> {
  // The prefix is `level` hash characters plus one space.
  let text = &raw[usize::from(level) + 1..];
  Ok(HtmlNode::container(
    format!("h{level}"),
    inline_nodes(text)?,
  ))
}

/// Inline styles are not parsed inside code blocks; the fenced body goes
/// into the tree untokenized.
fn code_node(raw: &str) -> HtmlNode {
  let lines = block::block_lines(raw);
  let body = if lines.len() > 2 {
    lines[1..lines.len() - 1].join("\n")
  } else {
    String::new()
  };
  HtmlNode::container("code", vec![HtmlNode::leaf("pre", body)])
}

fn quote_node(raw: &str) -> Result<HtmlNode, MarkdownError> {
  let text = raw
    .split('\n')
    .filter(|line| !line.is_empty())
    .map(|line| line.strip_prefix('>').unwrap_or(line))
    .collect::<Vec<_>>()
    .join("\n");
  Ok(HtmlNode::container("blockquote", inline_nodes(&text)?))
}

fn list_node(raw: &str, tag: &str) -> Result<HtmlNode, MarkdownError> {
  let mut items = Vec::new();
  for line in raw.split('\n').filter(|line| !line.is_empty()) {
    items.push(HtmlNode::container(
      "li",
      inline_nodes(strip_list_marker(line))?,
    ));
  }
  Ok(HtmlNode::container(tag, items))
}

fn paragraph_node(raw: &str) -> Result<HtmlNode, MarkdownError> {
  Ok(HtmlNode::container("p", inline_nodes(raw)?))
}

/// Drop the `*`/`-` bullet or `N.` marker and any spaces following it.
fn strip_list_marker(line: &str) -> &str {
  let rest = line
    .strip_prefix(['*', '-'])
    .or_else(|| block::strip_ordered_marker(line))
    .unwrap_or(line);
  rest.trim_start_matches(' ')
}

/// Tokenize inline text and convert each span to its node.
fn inline_nodes(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
  inline::tokenize(text)?
    .into_iter()
    .map(span_to_node)
    .collect()
}

fn span_to_node(span: Span) -> Result<HtmlNode, MarkdownError> {
  let Span {
    kind,
    content,
    target,
  } = span;

  match kind {
    SpanKind::Plain => Ok(HtmlNode::text(content)),
    SpanKind::Bold => Ok(HtmlNode::leaf("b", content)),
    SpanKind::Italic => Ok(HtmlNode::leaf("i", content)),
    SpanKind::Code => Ok(HtmlNode::leaf("code", content)),
    SpanKind::Link => {
      let url = target.ok_or_else(|| {
        MarkdownError::InvalidSpan("link span has no target URL".to_string())
      })?;
      Ok(HtmlNode::leaf_with_attrs("a", content, vec![(
        "href".to_string(),
        url,
      )]))
    },
    SpanKind::Image => {
      let url = target.ok_or_else(|| {
        MarkdownError::InvalidSpan("image span has no target URL".to_string())
      })?;
      Ok(HtmlNode::leaf_with_attrs("img", String::new(), vec![
        ("src".to_string(), url),
        ("alt".to_string(), content),
      ]))
    },
  }
}
