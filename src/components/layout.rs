//! Base layout components for the web UI.
//!
//! This module provides the page skeleton shared by every page: head
//! metadata, site header with navigation, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::metadata::OpenGraphMetadata;
use crate::constants::SITE_NAME;
use crate::sports::SPORTS;

/// Critical theme initialization script that runs in <head> to prevent flash of wrong theme.
/// Must be inline (not external) to execute before body renders.
const THEME_INIT_SCRIPT: &str = r#"(function() {
    var theme = localStorage.getItem('theme');
    if (theme) {
        document.documentElement.setAttribute('data-theme', theme);
    }
})();"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    description: Option<&'a str>,
    og_metadata: Option<OpenGraphMetadata>,
    with_chat: bool,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            og_metadata: None,
            with_chat: false,
        }
    }

    /// Set the meta description.
    #[must_use]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the Open Graph metadata for social media previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata) -> Self {
        self.og_metadata = Some(metadata);
        self
    }

    /// Load the chat widget script.
    #[must_use]
    pub fn with_chat(mut self) -> Self {
        self.with_chat = true;
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" data-theme="dark" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " | " (SITE_NAME) }
                    @if let Some(description) = self.description {
                        meta name="description" content=(description);
                    }

                    // Open Graph and Twitter Card metadata
                    @if let Some(ref og) = self.og_metadata {
                        (og.render())
                    }

                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="icon" href="/static/placeholder.svg" type="image/svg+xml";
                    // Inline critical script to prevent theme flicker
                    script { (PreEscaped(THEME_INIT_SCRIPT)) }
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                    @if self.with_chat {
                        script src="/static/js/chat.js" {}
                    }
                }
            }
        }
    }

    /// Render the page header with navigation.
    fn render_header() -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { (SITE_NAME) }
                            }
                        }
                    }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/news" { "News" } }
                        li { a href="/sports" { "Sports" } }
                    }
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                nav class="footer-sports" {
                    @for sport in SPORTS {
                        a href={ "/sports/" (sport.slug) } { (sport.name) }
                    }
                }
                small { (SITE_NAME) " | Paralympic and disability sport news" }
            }
        }
    }
}
