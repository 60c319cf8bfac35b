//! Badge components for article categories and sport tags.

use maud::{html, Markup, Render};

use crate::sports::find_sport;

/// An article's category label.
#[derive(Debug, Clone, Copy)]
pub struct CategoryBadge<'a> {
    pub category: &'a str,
}

impl<'a> CategoryBadge<'a> {
    #[must_use]
    pub const fn new(category: &'a str) -> Self {
        Self { category }
    }
}

impl Render for CategoryBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class="category-badge" { (self.category) }
        }
    }
}

/// A sport tag, linked to the sport's page when one exists.
#[derive(Debug, Clone, Copy)]
pub struct SportTagBadge<'a> {
    pub tag: &'a str,
}

impl<'a> SportTagBadge<'a> {
    #[must_use]
    pub const fn new(tag: &'a str) -> Self {
        Self { tag }
    }
}

impl Render for SportTagBadge<'_> {
    fn render(&self) -> Markup {
        match find_sport(self.tag) {
            Some(sport) => html! {
                a class="tag-badge" href={ "/sports/" (sport.slug) } { (sport.name) }
            },
            None => html! {
                span class="tag-badge" { (self.tag) }
            },
        }
    }
}
