//! News content: raw records, normalization, slug lookup and fallbacks.

pub mod cache;
pub mod fallback;
pub mod image;
pub mod normalize;
pub mod service;
pub mod slug;
pub mod types;

pub use image::{AssetLocation, ImageResolver, ImageSize};
pub use service::NewsService;
pub use types::{Article, ArticleDetail, Block, RawRecord};
