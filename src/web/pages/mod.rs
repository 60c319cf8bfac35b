//! Maud-based page templates for the web UI.
//!
//! Each page module exports render functions that produce the complete HTML
//! document, wrapped in the shared [`BaseLayout`](crate::components::BaseLayout).

pub mod home;
pub mod news;
pub mod not_found;
pub mod sports;

pub use home::render_home_page;
pub use news::{render_article_page, render_news_list_page};
pub use not_found::render_not_found_page;
pub use sports::{render_sport_page, render_sports_index_page};
