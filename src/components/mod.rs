//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `metadata`: Open Graph and Twitter card tags
//! - `badge`: Category and sport tag badges
//! - `alert`: Inline notices
//! - `card`: Article cards and grids
//! - `rich_text`: Article body rendering
//! - `chat`: The assistant section
//! - `table`: Table components
//! - `tabs`: Tab navigation components
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{ArticleGrid, BaseLayout};
//!
//! fn news_page(articles: &[Article]) -> Markup {
//!     let content = html! {
//!         h1 { "Latest News" }
//!         (ArticleGrid::new(articles))
//!     };
//!     BaseLayout::new("News").render(content)
//! }
//! ```

pub mod alert;
pub mod badge;
pub mod card;
pub mod chat;
pub mod layout;
pub mod metadata;
pub mod rich_text;
pub mod table;
pub mod tabs;

pub use alert::{Alert, AlertVariant};
pub use badge::{CategoryBadge, SportTagBadge};
pub use card::{ArticleCard, ArticleGrid, CardSize, EmptyState};
pub use chat::ChatSection;
pub use layout::BaseLayout;
pub use metadata::{truncate_text, OpenGraphMetadata};
pub use rich_text::RichText;
pub use table::{simple_row, Table, TableVariant};
pub use tabs::{ContentTab, ContentTabs};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
