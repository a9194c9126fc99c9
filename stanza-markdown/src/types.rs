//! Types for the stanza-markdown public API.
use serde::{Deserialize, Serialize};

/// The style of an inline [`Span`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpanKind {
  /// Unstyled text.
  Plain,
  /// Bold text (`**text**`).
  Bold,
  /// Italic text (`*text*`).
  Italic,
  /// Inline code (`` `text` ``).
  Code,
  /// An image (`![alt](url)`).
  Image,
  /// A link (`[text](url)`).
  Link,
}

/// A typed fragment of inline text within one block.
///
/// Spans are produced by [`inline::tokenize`](crate::inline::tokenize) and
/// consumed immediately by the block-to-node builder; they are never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
  /// The style of this fragment.
  pub kind: SpanKind,

  /// Display text: the alt text for images, the visible text for links and
  /// styled fragments, the literal text otherwise.
  pub content: String,

  /// Destination URL. Present only for links and images.
  pub target: Option<String>,
}

impl Span {
  /// Unstyled text span.
  #[must_use]
  pub fn plain<S: Into<String>>(content: S) -> Self {
    Self {
      kind:    SpanKind::Plain,
      content: content.into(),
      target:  None,
    }
  }

  /// Bold text span.
  #[must_use]
  pub fn bold<S: Into<String>>(content: S) -> Self {
    Self {
      kind:    SpanKind::Bold,
      content: content.into(),
      target:  None,
    }
  }

  /// Italic text span.
  #[must_use]
  pub fn italic<S: Into<String>>(content: S) -> Self {
    Self {
      kind:    SpanKind::Italic,
      content: content.into(),
      target:  None,
    }
  }

  /// Inline code span.
  #[must_use]
  pub fn code<S: Into<String>>(content: S) -> Self {
    Self {
      kind:    SpanKind::Code,
      content: content.into(),
      target:  None,
    }
  }

  /// Image span with its alt text and URL.
  #[must_use]
  pub fn image<S: Into<String>, T: Into<String>>(alt: S, url: T) -> Self {
    Self {
      kind:    SpanKind::Image,
      content: alt.into(),
      target:  Some(url.into()),
    }
  }

  /// Link span with its visible text and URL.
  #[must_use]
  pub fn link<S: Into<String>, T: Into<String>>(text: S, url: T) -> Self {
    Self {
      kind:    SpanKind::Link,
      content: text.into(),
      target:  Some(url.into()),
    }
  }
}

/// Structural classification of one blank-line-delimited block.
///
/// A block's kind is a pure function of its text, decided by
/// [`block::classify`](crate::block::classify).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlockKind {
  /// A heading, carrying its level (1 through 6).
  Heading(u8),
  /// A triple-backtick fenced code block.
  Code,
  /// A `>`-prefixed quote block.
  Quote,
  /// A `*`/`-` bulleted list.
  UnorderedList,
  /// A `N.`-numbered list.
  OrderedList,
  /// Anything else.
  Paragraph,
}
