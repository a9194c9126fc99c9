#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
use stanza_markdown::{
  HtmlNode, MarkdownError, extract_title, markdown_to_html,
  markdown_to_html_node,
};

#[test]
fn heading_and_paragraph_render() {
  let html = markdown_to_html("# Title\n\nSome **bold** text").unwrap();
  assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
}

#[test]
fn document_root_is_a_div_container() {
  let node = markdown_to_html_node("plain").unwrap();
  match node {
    HtmlNode::Container { ref tag, .. } => assert_eq!(tag, "div"),
    HtmlNode::Leaf { .. } => panic!("document root should be a container"),
  }
}

#[test]
fn unordered_list_renders_items() {
  let html = markdown_to_html("* a\n* b").unwrap();
  assert_eq!(html, "<div><ul><li>a</li><li>b</li></ul></div>");
}

#[test]
fn list_markers_strip_their_following_spaces() {
  let html = markdown_to_html("*   wide\n-   gap").unwrap();
  assert_eq!(html, "<div><ul><li>wide</li><li>gap</li></ul></div>");
}

#[test]
fn ordered_list_renders_items() {
  let html = markdown_to_html("1. one\n2. two").unwrap();
  assert_eq!(html, "<div><ol><li>one</li><li>two</li></ol></div>");
}

#[test]
fn list_items_keep_inline_styles() {
  let html = markdown_to_html("* **bold** item\n* plain item").unwrap();
  assert_eq!(
    html,
    "<div><ul><li><b>bold</b> item</li><li>plain item</li></ul></div>"
  );
}

#[test]
fn quote_lines_lose_one_marker_each() {
  let html = markdown_to_html(">line one\n>line two").unwrap();
  assert_eq!(html, "<div><blockquote>line one\nline two</blockquote></div>");
}

#[test]
fn code_block_body_is_not_tokenized() {
  let html = markdown_to_html("```\nlet **x** = 1;\n```").unwrap();
  assert_eq!(html, "<div><code><pre>let **x** = 1;</pre></code></div>");
}

#[test]
fn code_block_keeps_interior_newlines() {
  let html = markdown_to_html("```\nfirst\nsecond\n```").unwrap();
  assert_eq!(html, "<div><code><pre>first\nsecond</pre></code></div>");
}

#[test]
fn heading_keeps_inline_styles() {
  let html = markdown_to_html("## A *quiet* word").unwrap();
  assert_eq!(html, "<div><h2>A <i>quiet</i> word</h2></div>");
}

#[test]
fn image_renders_src_and_alt_attributes() {
  let html = markdown_to_html("![alt text](img.png)").unwrap();
  assert_eq!(
    html,
    "<div><p><img src=\"img.png\" alt=\"alt text\"></img></p></div>"
  );
}

#[test]
fn link_renders_href_attribute() {
  let html = markdown_to_html("[home](https://example.com)").unwrap();
  assert_eq!(
    html,
    "<div><p><a href=\"https://example.com\">home</a></p></div>"
  );
}

#[test]
fn full_document_renders_every_block_kind() {
  let document = "# Notes\n\nA paragraph with `code`.\n\n> quoted\n\n* \
                  one\n* two\n\n1. first\n2. second\n\n```\nbody\n```";
  let html = markdown_to_html(document).unwrap();
  assert_eq!(
    html,
    "<div><h1>Notes</h1><p>A paragraph with <code>code</code>.</p>\
     <blockquote> quoted</blockquote><ul><li>one</li><li>two</li></ul>\
     <ol><li>first</li><li>second</li></ol><code><pre>body</pre></code></div>"
  );
}

#[test]
fn unclosed_delimiter_aborts_the_document() {
  let err = markdown_to_html("unclosed *italic").unwrap_err();
  assert_eq!(err, MarkdownError::UnclosedDelimiter("*"));
}

#[test]
fn empty_document_fails_at_render_time() {
  assert_eq!(markdown_to_html(""), Err(MarkdownError::MissingChildren));
}

#[test]
fn extract_title_returns_first_h1_remainder() {
  assert_eq!(extract_title("# Hi\nbody").unwrap(), "Hi");
}

#[test]
fn extract_title_scans_past_earlier_lines() {
  assert_eq!(extract_title("intro\n## sub\n# Real Title").unwrap(), "Real Title");
}

#[test]
fn extract_title_ignores_deeper_headings() {
  assert_eq!(
    extract_title("## only a subheading"),
    Err(MarkdownError::NoHeadingFound)
  );
}

#[test]
fn extract_title_fails_without_heading() {
  assert_eq!(
    extract_title("no heading here"),
    Err(MarkdownError::NoHeadingFound)
  );
}
