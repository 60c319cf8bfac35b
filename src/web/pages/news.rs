//! News listing and article detail pages.

use maud::{html, Markup};

use crate::components::{
    ArticleGrid, BaseLayout, CategoryBadge, EmptyState, OpenGraphMetadata, RichText,
    SportTagBadge,
};
use crate::content::{Article, ArticleDetail, ImageResolver};

/// Render the list of all articles.
#[must_use]
pub fn render_news_list_page(articles: &[Article]) -> Markup {
    let content = html! {
        h1 { "Latest News" }
        @if articles.is_empty() {
            (EmptyState::no_articles())
        } @else {
            (ArticleGrid::new(articles))
        }
    };

    BaseLayout::new("News")
        .with_description("All the latest Paralympic and disability sports news.")
        .render(content)
}

/// Render a single article.
///
/// `images` resolves inline images in the body; the hero image is already
/// resolved on `detail`.
#[must_use]
pub fn render_article_page(detail: &ArticleDetail, images: &ImageResolver) -> Markup {
    let article = &detail.article;

    let content = html! {
        article class="article-detail" {
            a href="/news" class="back-link" { "\u{2190} Back to News" }
            header {
                (CategoryBadge::new(&article.category))
                h1 { (article.title) }
                p class="lead" { (article.excerpt) }
                p class="byline" {
                    time { (article.date) }
                    " \u{2022} "
                    span class="author" { "By " (article.author) }
                }
            }
            figure class="hero-image" {
                img src=(detail.hero_image)
                    alt=(detail.hero_alt.as_deref().unwrap_or(article.title.as_str()));
            }
            @if detail.body.is_empty() {
                p class="muted" { "Article content will be displayed here when available." }
            } @else {
                (RichText::new(&detail.body, images))
            }
            @if !article.sport_tags.is_empty() {
                section class="related-sports" {
                    h3 { "Related Sports" }
                    div class="tag-list" {
                        @for tag in &article.sport_tags {
                            (SportTagBadge::new(tag))
                        }
                    }
                }
            }
        }
    };

    BaseLayout::new(&article.title)
        .with_description(&article.excerpt)
        .with_og_metadata(OpenGraphMetadata::for_article(article))
        .render(content)
}
