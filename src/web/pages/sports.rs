//! Sport reference pages.

use maud::{html, Markup};

use crate::components::{
    simple_row, ArticleGrid, BaseLayout, ContentTabs, EmptyState, OpenGraphMetadata, Table,
    TableVariant,
};
use crate::content::Article;
use crate::sports::{Fact, Sport, SPORTS};

/// Render the list of sports with reference pages.
#[must_use]
pub fn render_sports_index_page() -> Markup {
    let content = html! {
        h1 { "Sports" }
        p { "Guides to the history, rules and classification of Paralympic sports." }
        div class="sport-grid" {
            @for sport in SPORTS {
                article class="sport-card" {
                    a href={ "/sports/" (sport.slug) } {
                        img src=(sport.hero_image) alt=(sport.name) loading="lazy";
                        h3 { (sport.name) }
                        p { (sport.summary) }
                    }
                }
            }
        }
    };

    BaseLayout::new("Sports")
        .with_description("Guides to Paralympic sports.")
        .render(content)
}

/// Render a sport page with its related news.
#[must_use]
pub fn render_sport_page(sport: &Sport, news: &[Article]) -> Markup {
    let path = format!("/sports/{}", sport.slug);
    let og = OpenGraphMetadata::new(sport.name, sport.summary, path.as_str())
        .with_image(Some(sport.hero_image));

    let content = html! {
        section class="sport-hero" style={ "background-image: url('" (sport.hero_image) "')" } {
            h1 { (sport.name) }
            p class="lead" { (sport.summary) }
        }

        @if !sport.timeline.is_empty() {
            section class="timeline" {
                h2 { "History" }
                p class="muted" { (sport.timeline_subtitle) }
                ol class="timeline-list" {
                    @for event in sport.timeline {
                        li {
                            span class="timeline-year" { (event.year) }
                            div {
                                h4 { (event.title) }
                                p { (event.description) }
                            }
                        }
                    }
                }
            }
        }

        (ContentTabs::new()
            .tab("overview", "Overview", overview(sport), true)
            .tab_if(!sport.rules.is_empty() || !sport.event_groups.is_empty(), "rules", "Rules", rules(sport))
            .tab_if(!sport.classes.is_empty(), "classification", "Classification", classification(sport))
            .tab("news", "News", related_news(sport, news), false))
    };

    BaseLayout::new(sport.name)
        .with_description(sport.summary)
        .with_og_metadata(og)
        .render(content)
}

fn facts(heading: &str, facts: &[Fact]) -> Markup {
    html! {
        @if !facts.is_empty() {
            section class="facts" {
                h3 { (heading) }
                dl {
                    @for fact in facts {
                        dt { (fact.title) }
                        dd { (fact.body) }
                    }
                }
            }
        }
    }
}

fn overview(sport: &Sport) -> Markup {
    html! {
        div class="grid" {
            (facts("Key Facts", sport.key_facts))
            @if !sport.equipment.is_empty() {
                section {
                    h3 { "Equipment" }
                    p { (sport.equipment_intro) }
                    ul {
                        @for item in sport.equipment {
                            li { (*item) }
                        }
                    }
                }
            }
        }
        (facts("Major Competitions", sport.competitions))
    }
}

fn rules(sport: &Sport) -> Markup {
    html! {
        (facts("Official Rules", sport.rules))
        div class="grid" {
            @for group in sport.event_groups {
                section {
                    h3 { (group.title) }
                    ul {
                        @for event in group.events {
                            li { (*event) }
                        }
                    }
                }
            }
        }
    }
}

fn classification(sport: &Sport) -> Markup {
    let rows = sport
        .classes
        .iter()
        .map(|class| simple_row(&[class.code, class.description, class.equipment]))
        .collect();

    html! {
        h3 { "Classification System" }
        p { (sport.classification_intro) }
        h4 { "Classification Categories" }
        (Table::new(vec!["Class", "Description", "Equipment"])
            .variant(TableVariant::Classification)
            .rows(rows))
        @if !sport.classification_steps.is_empty() {
            section {
                h3 { "Classification Process" }
                ol class="steps" {
                    @for step in sport.classification_steps {
                        li {
                            strong { (step.title) }
                            p { (step.body) }
                        }
                    }
                }
            }
        }
        @if !sport.adaptations.is_empty() {
            section {
                h3 { "Equipment Adaptations" }
                p { (sport.adaptations_intro) }
                div class="grid" {
                    @for adaptation in sport.adaptations {
                        article class="fact-card" {
                            h4 { (adaptation.title) }
                            p { (adaptation.body) }
                        }
                    }
                }
            }
        }
    }
}

fn related_news(sport: &Sport, news: &[Article]) -> Markup {
    html! {
        h3 { "Latest " (sport.name) " News" }
        @if news.is_empty() {
            (EmptyState::new("No news for this sport yet. Check back soon!"))
        } @else {
            (ArticleGrid::new(news))
        }
    }
}
