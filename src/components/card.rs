//! Card components for displaying articles.
//!
//! This module provides maud components for rendering article cards and grids.

use maud::{html, Markup, Render};

use crate::components::badge::CategoryBadge;
use crate::content::Article;

/// How prominently a card is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSize {
    /// Grid card with image, category, title, excerpt and byline.
    #[default]
    Standard,
    /// Lead story on the home page.
    Lead,
    /// Side-column card without an excerpt.
    Compact,
}

impl CardSize {
    const fn css_class(self) -> &'static str {
        match self {
            Self::Standard => "article-card",
            Self::Lead => "article-card article-card-lead",
            Self::Compact => "article-card article-card-compact",
        }
    }
}

/// An article card linking to the article page.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::ArticleCard;
///
/// let card = ArticleCard::new(&article).lead();
/// ```
#[derive(Debug, Clone)]
pub struct ArticleCard<'a> {
    pub article: &'a Article,
    pub size: CardSize,
}

impl<'a> ArticleCard<'a> {
    /// Create a new standard-size article card.
    #[must_use]
    pub const fn new(article: &'a Article) -> Self {
        Self {
            article,
            size: CardSize::Standard,
        }
    }

    /// Render as the lead story.
    #[must_use]
    pub const fn lead(mut self) -> Self {
        self.size = CardSize::Lead;
        self
    }

    /// Render without the excerpt.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.size = CardSize::Compact;
        self
    }
}

impl Render for ArticleCard<'_> {
    fn render(&self) -> Markup {
        let article = self.article;

        html! {
            article class=(self.size.css_class()) {
                a href=(article.url) class="article-card-link" {
                    div class="article-card-image" {
                        img src=(article.image) alt=(article.title) loading="lazy";
                    }
                    div class="article-card-body" {
                        (CategoryBadge::new(&article.category))
                        @if self.size == CardSize::Lead {
                            h2 { (article.title) }
                        } @else {
                            h3 { (article.title) }
                        }
                        @if self.size != CardSize::Compact {
                            p class="excerpt" { (article.excerpt) }
                        }
                        p class="byline" {
                            time { (article.date) }
                            " \u{2022} "
                            span class="author" { (article.author) }
                        }
                    }
                }
            }
        }
    }
}

/// A grid container for displaying multiple article cards.
#[derive(Debug, Clone)]
pub struct ArticleGrid<'a> {
    pub articles: &'a [Article],
}

impl<'a> ArticleGrid<'a> {
    /// Create a new article grid.
    #[must_use]
    pub const fn new(articles: &'a [Article]) -> Self {
        Self { articles }
    }
}

impl Render for ArticleGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="article-grid" {
                @for article in self.articles {
                    (ArticleCard::new(article))
                }
            }
        }
    }
}

/// An empty state component for when there is nothing to list.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Create a default "no articles" empty state.
    #[must_use]
    pub const fn no_articles() -> Self {
        Self {
            message: "No news articles available at the moment. Check back soon for the latest news!",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
