//! # stanza-markdown
//!
//! Markdown processing for the stanza static-site generator. A document is
//! converted in two stages: block-level segmentation splits it into typed
//! blocks (headings, fenced code, quotes, lists, paragraphs), and inline
//! tokenization splits each block's text into styled spans (bold, italic,
//! code, images, links). The spans and blocks are assembled into a generic
//! HTML node tree which renders to the final HTML string.
//!
//! ## Quick Start
//!
//! ```rust
//! use stanza_markdown::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text.")?;
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text.</p></div>");
//! # Ok::<(), stanza_markdown::MarkdownError>(())
//! ```
//!
//! ## Scope
//!
//! The dialect is deliberately small: `#`-style headings, triple-backtick
//! fences, `>` quotes, `*`/`-` and `N.` lists, and non-nested inline styles.
//! Full CommonMark compliance, nested styles, nested lists and HTML escaping
//! are out of scope. Processing is synchronous and single-threaded; every
//! call handles one complete in-memory document and shares no state, so
//! callers are free to process separate documents on separate threads.
//!
//! All failures are typed [`MarkdownError`]s and abort the document being
//! processed; there is no partial or best-effort output.

pub mod block;
mod error;
pub mod inline;
pub mod node;
pub mod processor;
mod types;

pub use crate::{
  error::MarkdownError,
  node::HtmlNode,
  processor::{extract_title, markdown_to_html, markdown_to_html_node},
  types::{BlockKind, Span, SpanKind},
};
