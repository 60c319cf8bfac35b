//! Rich text rendering for article bodies.
//!
//! Bodies arrive as a list of blocks: styled text blocks (paragraphs,
//! headings, quotes, list items) and inline images. Consecutive list items of
//! the same kind are grouped into one list.

use maud::{html, Markup, Render};

use crate::content::image::INLINE_SIZE;
use crate::content::types::{ImageField, ImageObject, MarkDef, Span, TextBlock};
use crate::content::{Block, ImageResolver};

/// Renders an article body.
#[derive(Debug, Clone)]
pub struct RichText<'a> {
    pub blocks: &'a [Block],
    pub images: &'a ImageResolver,
}

impl<'a> RichText<'a> {
    #[must_use]
    pub const fn new(blocks: &'a [Block], images: &'a ImageResolver) -> Self {
        Self { blocks, images }
    }
}

/// A run of blocks rendered as one element.
enum Segment<'a> {
    Text(&'a TextBlock),
    List {
        kind: &'a str,
        items: Vec<&'a TextBlock>,
    },
    Image(&'a ImageObject),
}

fn segments(blocks: &[Block]) -> Vec<Segment<'_>> {
    let mut segments: Vec<Segment<'_>> = Vec::new();
    for block in blocks {
        match block {
            Block::Block(text) => match text.list_item.as_deref() {
                Some(kind) => match segments.last_mut() {
                    Some(Segment::List { kind: current, items }) if *current == kind => {
                        items.push(text);
                    }
                    _ => segments.push(Segment::List {
                        kind,
                        items: vec![text],
                    }),
                },
                None => segments.push(Segment::Text(text)),
            },
            Block::Image(image) => segments.push(Segment::Image(image)),
            Block::Unknown => {}
        }
    }
    segments
}

impl Render for RichText<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="rich-text" {
                @for segment in segments(self.blocks) {
                    @match segment {
                        Segment::Text(block) => (text_block(block)),
                        Segment::List { kind, items } => {
                            @if kind == "number" {
                                ol { @for item in items { li { (spans(item)) } } }
                            } @else {
                                ul { @for item in items { li { (spans(item)) } } }
                            }
                        }
                        Segment::Image(image) => (self.inline_image(image)),
                    }
                }
            }
        }
    }
}

impl RichText<'_> {
    fn inline_image(&self, image: &ImageObject) -> Markup {
        let src = self
            .images
            .resolve(Some(&ImageField::Asset(image.clone())), INLINE_SIZE);
        html! {
            figure class="inline-image" {
                img src=(src) alt=(image.alt.as_deref().unwrap_or("")) loading="lazy";
                @if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
                    figcaption { (caption) }
                }
            }
        }
    }
}

fn text_block(block: &TextBlock) -> Markup {
    let content = spans(block);
    match block.style.as_deref().unwrap_or("normal") {
        "h1" => html! { h1 { (content) } },
        "h2" => html! { h2 { (content) } },
        "h3" => html! { h3 { (content) } },
        "h4" => html! { h4 { (content) } },
        "blockquote" => html! { blockquote { (content) } },
        _ => html! { p { (content) } },
    }
}

fn spans(block: &TextBlock) -> Markup {
    html! {
        @for span in &block.children {
            (marked_span(span, &block.mark_defs))
        }
    }
}

/// Render a span with its marks applied, first mark outermost.
fn marked_span(span: &Span, defs: &[MarkDef]) -> Markup {
    let text = span.text.as_deref().unwrap_or("");
    let mut markup = html! { (text) };
    for mark in span.marks.iter().rev() {
        markup = apply_mark(mark, markup, defs);
    }
    markup
}

fn apply_mark(mark: &str, inner: Markup, defs: &[MarkDef]) -> Markup {
    match mark {
        "strong" => html! { strong { (inner) } },
        "em" => html! { em { (inner) } },
        "underline" => html! { u { (inner) } },
        "strike-through" => html! { s { (inner) } },
        "code" => html! { code { (inner) } },
        key => {
            let link = defs
                .iter()
                .find(|def| def.key.as_deref() == Some(key) && def.kind.as_deref() == Some("link"));
            match link.and_then(|def| safe_href(def).map(|href| (href, def.blank == Some(true)))) {
                Some((href, true)) => html! {
                    a href=(href) target="_blank" rel="noopener noreferrer" { (inner) }
                },
                Some((href, false)) => html! { a href=(href) { (inner) } },
                None => inner,
            }
        }
    }
}

/// Link target, if it uses a scheme that is safe to emit.
fn safe_href(def: &MarkDef) -> Option<&str> {
    let href = def.href.as_deref()?.trim();
    let lower = href.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || (href.starts_with('/') && !href.starts_with("//"));
    allowed.then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        let blocks: Vec<Block> = serde_json::from_value(value).unwrap();
        RichText::new(&blocks, &ImageResolver::unconfigured())
            .render()
            .into_string()
    }

    #[test]
    fn test_paragraphs_and_headings() {
        let html = render(json!([
            { "_type": "block", "style": "h2", "children": [{ "_type": "span", "text": "Results" }] },
            { "_type": "block", "children": [{ "_type": "span", "text": "Gold for GB <3" }] }
        ]));
        assert_eq!(
            html,
            r#"<div class="rich-text"><h2>Results</h2><p>Gold for GB &lt;3</p></div>"#
        );
    }

    #[test]
    fn test_consecutive_list_items_are_grouped() {
        let html = render(json!([
            { "_type": "block", "listItem": "bullet", "children": [{ "_type": "span", "text": "one" }] },
            { "_type": "block", "listItem": "bullet", "children": [{ "_type": "span", "text": "two" }] },
            { "_type": "block", "listItem": "number", "children": [{ "_type": "span", "text": "three" }] }
        ]));
        assert!(html.contains("<ul><li>one</li><li>two</li></ul><ol><li>three</li></ol>"));
    }

    #[test]
    fn test_marks_and_links() {
        let html = render(json!([{
            "_type": "block",
            "markDefs": [
                { "_key": "l1", "_type": "link", "href": "https://www.paralympic.org", "blank": true },
                { "_key": "bad", "_type": "link", "href": "javascript:alert(1)" }
            ],
            "children": [
                { "_type": "span", "text": "IPC", "marks": ["l1", "strong"] },
                { "_type": "span", "text": " and " },
                { "_type": "span", "text": "nope", "marks": ["bad"] }
            ]
        }]));
        assert!(html.contains(
            r#"<a href="https://www.paralympic.org" target="_blank" rel="noopener noreferrer"><strong>IPC</strong></a>"#
        ));
        assert!(html.contains(" and nope"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_inline_image_with_caption() {
        let html = render(json!([{
            "_type": "image",
            "asset": { "url": "https://cdn.sanity.io/images/p/d/abc-10x10.png" },
            "alt": "Start line",
            "caption": "Race start"
        }]));
        assert!(html.contains(r#"src="https://cdn.sanity.io/images/p/d/abc-10x10.png""#));
        assert!(html.contains(r#"alt="Start line""#));
        assert!(html.contains("<figcaption>Race start</figcaption>"));
    }
}
