//! Generic HTML node tree and its string rendering.
//!
//! The output of markdown conversion is a tree of [`HtmlNode`]s: leaves hold
//! rendered text, containers hold an ordered sequence of children. Nodes are
//! built bottom-up, exclusively owned by their parent, and never mutated
//! after construction. Construction-time contract violations (a container
//! without a tag or children, a leaf without a value) surface as typed
//! errors when the tree is rendered.

use crate::error::MarkdownError;

/// Ordered attribute pairs, rendered as ` key="value"` in insertion order.
pub type Attributes = Vec<(String, String)>;

/// One element of the output HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
  /// A node holding literal content and no children.
  Leaf {
    /// Wrapping tag; an untagged leaf renders its value bare.
    tag: Option<String>,

    /// Rendered text. Required; rendering fails when unset.
    value: Option<String>,

    /// Attributes of the wrapping tag.
    attrs: Attributes,
  },

  /// A node holding an ordered sequence of children.
  Container {
    /// Wrapping tag. Must be non-empty.
    tag: String,

    /// Child nodes, rendered in order. At least one is required.
    children: Vec<HtmlNode>,

    /// Attributes of the wrapping tag.
    attrs: Attributes,
  },
}

impl HtmlNode {
  /// Leaf with no tag; renders as its raw value, untrimmed.
  #[must_use]
  pub fn text<S: Into<String>>(value: S) -> Self {
    Self::Leaf {
      tag:   None,
      value: Some(value.into()),
      attrs: Vec::new(),
    }
  }

  /// Leaf wrapped in `tag`.
  #[must_use]
  pub fn leaf<T: Into<String>, S: Into<String>>(tag: T, value: S) -> Self {
    Self::Leaf {
      tag:   Some(tag.into()),
      value: Some(value.into()),
      attrs: Vec::new(),
    }
  }

  /// Leaf wrapped in `tag` with attributes.
  #[must_use]
  pub fn leaf_with_attrs<T: Into<String>, S: Into<String>>(
    tag: T,
    value: S,
    attrs: Attributes,
  ) -> Self {
    Self::Leaf {
      tag: Some(tag.into()),
      value: Some(value.into()),
      attrs,
    }
  }

  /// Container wrapping `children` in `tag`.
  #[must_use]
  pub fn container<T: Into<String>>(tag: T, children: Vec<HtmlNode>) -> Self {
    Self::Container {
      tag: tag.into(),
      children,
      attrs: Vec::new(),
    }
  }

  /// Render this node and its subtree to an HTML string.
  ///
  /// An untagged leaf passes its value through unchanged; a tagged leaf
  /// wraps its value, trimmed of leading and trailing spaces, tabs and
  /// newlines; a container wraps the concatenation of its children rendered
  /// in order.
  ///
  /// # Errors
  ///
  /// [`MarkdownError::MissingValue`] for a leaf without a value,
  /// [`MarkdownError::MissingTag`] for a container with an empty tag, and
  /// [`MarkdownError::MissingChildren`] for a container with no children.
  pub fn render(&self) -> Result<String, MarkdownError> {
    match self {
      Self::Leaf { value: None, .. } => Err(MarkdownError::MissingValue),
      Self::Leaf {
        tag: None,
        value: Some(value),
        ..
      } => Ok(value.clone()),
      Self::Leaf {
        tag: Some(tag),
        value: Some(value),
        attrs,
      } => {
        Ok(format!(
          "<{tag}{}>{}</{tag}>",
          render_attrs(attrs),
          value.trim_matches([' ', '\n', '\t'])
        ))
      },
      Self::Container { tag, .. } if tag.is_empty() => {
        Err(MarkdownError::MissingTag)
      },
      Self::Container { children, .. } if children.is_empty() => {
        Err(MarkdownError::MissingChildren)
      },
      Self::Container {
        tag,
        children,
        attrs,
      } => {
        let mut html = format!("<{tag}{}>", render_attrs(attrs));
        for child in children {
          html.push_str(&child.render()?);
        }
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
        Ok(html)
      },
    }
  }
}

fn render_attrs(attrs: &Attributes) -> String {
  attrs
    .iter()
    .map(|(key, value)| format!(" {key}=\"{value}\""))
    .collect()
}
