//! Open Graph and Twitter Card metadata components.
//!
//! This module provides components for generating social media preview metadata.

use maud::{html, Markup};

use crate::constants::{PLACEHOLDER_IMAGE, SITE_NAME};
use crate::content::Article;

/// Open Graph metadata for social media previews.
///
/// This component generates both Open Graph and Twitter Card meta tags
/// for better social media sharing previews.
#[derive(Debug, Clone)]
pub struct OpenGraphMetadata {
    /// Page title (og:title)
    pub title: String,
    /// Page description (og:description)
    pub description: String,
    /// Page URL (og:url)
    pub url: String,
    /// Open Graph type (og:type) - e.g., "website", "article"
    pub og_type: String,
    /// Image URL (og:image)
    pub image: Option<String>,
    /// Site name (og:site_name)
    pub site_name: String,
    /// Twitter card type - "summary" or "summary_large_image"
    pub twitter_card: String,
    /// Author name (article:author)
    pub author: Option<String>,
}

impl Default for OpenGraphMetadata {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: "Paralympic and disability sport news, results and guides".to_string(),
            url: "/".to_string(),
            og_type: "website".to_string(),
            image: None,
            site_name: SITE_NAME.to_string(),
            twitter_card: "summary".to_string(),
            author: None,
        }
    }
}

impl OpenGraphMetadata {
    /// Create a new metadata builder.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Metadata for an article page, with a large image card when the
    /// article has a real image.
    #[must_use]
    pub fn for_article(article: &Article) -> Self {
        let image = (article.image != PLACEHOLDER_IMAGE).then(|| article.image.clone());
        let card = if image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        };
        Self::new(&article.title, &article.excerpt, &article.url)
            .with_type("article")
            .with_image(image)
            .with_twitter_card(card)
            .with_author(&article.author)
    }

    /// Set the Open Graph type.
    #[must_use]
    pub fn with_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = og_type.into();
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: Option<impl Into<String>>) -> Self {
        self.image = image.map(Into::into);
        self
    }

    /// Set the Twitter card type.
    #[must_use]
    pub fn with_twitter_card(mut self, card_type: impl Into<String>) -> Self {
        self.twitter_card = card_type.into();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Render the metadata tags.
    pub fn render(&self) -> Markup {
        let title = &self.title;
        let description = &self.description;

        html! {
            // Open Graph metadata
            meta property="og:title" content=(title);
            meta property="og:description" content=(description);
            meta property="og:url" content=(&self.url);
            meta property="og:type" content=(&self.og_type);
            meta property="og:site_name" content=(&self.site_name);

            @if let Some(ref image_url) = self.image {
                meta property="og:image" content=(image_url);
                meta property="og:image:alt" content=(title);
            }
            @if let Some(ref author) = self.author {
                meta property="article:author" content=(author);
            }

            // Twitter Card metadata
            meta name="twitter:card" content=(&self.twitter_card);
            meta name="twitter:title" content=(title);
            meta name="twitter:description" content=(description);

            @if let Some(ref image_url) = self.image {
                meta name="twitter:image" content=(image_url);
            }
        }
    }
}

/// Helper to truncate text to a maximum length with ellipsis.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let mut truncated = text
            .chars()
            .take(max_len.saturating_sub(3))
            .collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
