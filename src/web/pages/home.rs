//! Home page rendering using maud templates.
//!
//! The home page leads with the newest story, lists the next few beside it,
//! then offers the assistant and a strip of the latest news.

use maud::{html, Markup};

use crate::components::{
    ArticleCard, ArticleGrid, BaseLayout, ChatSection, EmptyState, OpenGraphMetadata,
};
use crate::constants::SITE_NAME;
use crate::content::Article;

/// Number of stories listed beside the lead story.
const SECONDARY_COUNT: usize = 4;

/// Render the home page.
#[must_use]
pub fn render_home_page(featured: &[Article], latest: &[Article], chat_enabled: bool) -> Markup {
    let description = "The latest Paralympic and disability sports news, results and features.";
    let og = OpenGraphMetadata::new(SITE_NAME, description, "/");

    let content = html! {
        section class="featured" {
            h2 class="section-title" { "FEATURED STORIES" }
            @if let Some((lead, rest)) = featured.split_first() {
                div class="featured-layout" {
                    (ArticleCard::new(lead).lead())
                    div class="featured-secondary" {
                        @for article in rest.iter().take(SECONDARY_COUNT) {
                            (ArticleCard::new(article).compact())
                        }
                    }
                }
            } @else {
                (EmptyState::no_articles())
            }
        }

        (ChatSection::new(chat_enabled))

        section class="latest" {
            h2 class="section-title" { "LATEST NEWS" }
            @if latest.is_empty() {
                (EmptyState::no_articles())
            } @else {
                (ArticleGrid::new(latest))
            }
            p class="more-link" { a href="/news" { "All news \u{2192}" } }
        }
    };

    let layout = BaseLayout::new("Home")
        .with_description(description)
        .with_og_metadata(og);
    if chat_enabled {
        layout.with_chat().render(content)
    } else {
        layout.render(content)
    }
}
