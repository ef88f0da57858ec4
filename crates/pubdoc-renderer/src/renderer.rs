//! Markdown renderer built on `pulldown-cmark`.

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::escape_href;

use crate::state::{HeadingIds, escape_html};

/// Render raw markdown bytes with the default renderer.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[must_use]
pub fn markdown_to_html(markdown: &[u8]) -> String {
    MarkdownRenderer::new().render(&String::from_utf8_lossy(markdown))
}

/// Markdown to HTML renderer.
///
/// All features are enabled by default; the builder methods switch them off
/// individually.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    heading_ids: bool,
    target_blank: bool,
    smart_punctuation: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with all extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading_ids: true,
            target_blank: true,
            smart_punctuation: true,
        }
    }

    /// Enable or disable automatic heading `id` attributes.
    #[must_use]
    pub fn with_heading_ids(mut self, enabled: bool) -> Self {
        self.heading_ids = enabled;
        self
    }

    /// Enable or disable `target="_blank"` on external links.
    #[must_use]
    pub fn with_target_blank(mut self, enabled: bool) -> Self {
        self.target_blank = enabled;
        self
    }

    /// Enable or disable typographic quotes and dashes.
    #[must_use]
    pub fn with_smart_punctuation(mut self, enabled: bool) -> Self {
        self.smart_punctuation = enabled;
        self
    }

    /// Get parser options based on renderer configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_DEFINITION_LIST;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        options
    }

    /// Render markdown text to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let mut events: Vec<Event<'_>> =
            Parser::new_ext(markdown, self.parser_options()).collect();

        if self.heading_ids {
            assign_heading_ids(&mut events);
        }
        if self.target_blank {
            open_external_links_in_new_tab(&mut events);
        }

        let mut html = String::with_capacity(markdown.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        html
    }
}

/// Fill in `id` for every heading that doesn't have an explicit one.
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut ids = HeadingIds::default();

    for event in events.iter() {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            ids.reserve(id);
        }
    }

    for start in 0..events.len() {
        if !matches!(&events[start], Event::Start(Tag::Heading { id: None, .. })) {
            continue;
        }
        let generated = ids.generate(&heading_text(&events[start + 1..]));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
            *id = Some(generated.into());
        }
    }
}

/// Plain text of a heading, up to its end tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Replace external link tags with raw anchors carrying `target="_blank"`.
fn open_external_links_in_new_tab(events: &mut [Event<'_>]) {
    // Links cannot nest, so one flag tracks the open anchor.
    let mut rewritten = false;

    for event in events.iter_mut() {
        let replacement = match &*event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) if *link_type != LinkType::Email && is_external(dest_url) => {
                rewritten = true;
                Some(Event::InlineHtml(anchor_open_tag(dest_url, title).into()))
            }
            Event::End(TagEnd::Link) if rewritten => {
                rewritten = false;
                Some(Event::InlineHtml(CowStr::Borrowed("</a>")))
            }
            _ => None,
        };
        if let Some(replacement) = replacement {
            *event = replacement;
        }
    }
}

/// Whether a link leaves the current site.
///
/// Fragments, root-relative paths and `./`/`../` paths stay local; anything
/// else is treated as external.
fn is_external(dest: &str) -> bool {
    let local = dest.is_empty()
        || dest.starts_with('#')
        || (dest.starts_with('/') && !dest.starts_with("//"))
        || dest.starts_with("./")
        || dest.starts_with("../");
    !local
}

/// Opening `<a>` tag, with `href` escaped the same way as links the HTML
/// writer renders itself.
fn anchor_open_tag(dest: &str, title: &str) -> String {
    let mut tag = String::from(r#"<a href=""#);
    // Writing into a String cannot fail.
    let _ = escape_href(&mut tag, dest);
    tag.push('"');
    if !title.is_empty() {
        tag.push_str(&format!(r#" title="{}""#, escape_html(title)));
    }
    tag.push_str(r#" target="_blank">"#);
    tag
}
