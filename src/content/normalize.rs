//! Raw record to canonical article conversion.
//!
//! Every function here is pure: the same record and resolver always produce
//! the same article.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::image::{ImageResolver, ImageSize, CARD_SIZE, HERO_SIZE};
use super::types::{
    Article, ArticleDetail, Block, CategoryField, ContentKind, ContentRecord, ImageField, RawRecord,
};
use crate::constants::{
    DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_DATE, DEFAULT_EXCERPT, EXCERPT_MAX_CHARS,
};

/// Image fields in the order each document type treats them as authoritative.
const ARTICLE_IMAGE_PRIORITY: &[ImageSlot] = &[
    ImageSlot::FeaturedImage,
    ImageSlot::Thumbnail,
    ImageSlot::Image,
    ImageSlot::MainImage,
];
const POST_IMAGE_PRIORITY: &[ImageSlot] =
    &[ImageSlot::Thumbnail, ImageSlot::Image, ImageSlot::MainImage];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSlot {
    FeaturedImage,
    Thumbnail,
    Image,
    MainImage,
}

impl ImageSlot {
    fn get(self, record: &ContentRecord) -> Option<&ImageField> {
        match self {
            Self::FeaturedImage => record.featured_image.as_ref(),
            Self::Thumbnail => record.thumbnail.as_ref(),
            Self::Image => record.image.as_ref(),
            Self::MainImage => record.main_image.as_ref(),
        }
    }
}

/// Offset-free timestamp layouts, tried after RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

type CategoryStrategy = fn(&ContentRecord) -> Option<&str>;

/// Category label sources in priority order.
const CATEGORY_STRATEGIES: &[CategoryStrategy] = &[
    expanded_title,
    expanded_name,
    direct_title,
    direct_name,
    plain_label,
];

fn expanded_title(record: &ContentRecord) -> Option<&str> {
    record.category_expanded.as_ref()?.title.as_deref()
}

fn expanded_name(record: &ContentRecord) -> Option<&str> {
    record.category_expanded.as_ref()?.name.as_deref()
}

fn direct_title(record: &ContentRecord) -> Option<&str> {
    match record.category.as_ref()? {
        CategoryField::Object(object) => object.title.as_deref(),
        CategoryField::Name(_) => None,
    }
}

fn direct_name(record: &ContentRecord) -> Option<&str> {
    match record.category.as_ref()? {
        CategoryField::Object(object) => object.name.as_deref(),
        CategoryField::Name(_) => None,
    }
}

fn plain_label(record: &ContentRecord) -> Option<&str> {
    match record.category.as_ref()? {
        CategoryField::Name(name) => Some(name.as_str()),
        CategoryField::Object(_) => None,
    }
}

/// Normalize a raw record into a card-sized canonical article.
#[must_use]
pub fn normalize(record: &RawRecord, images: &ImageResolver) -> Article {
    normalize_with_size(record, images, CARD_SIZE)
}

/// Normalize a raw record for the detail page.
#[must_use]
pub fn normalize_detail(record: &RawRecord, images: &ImageResolver) -> ArticleDetail {
    let fields = record.fields();
    ArticleDetail {
        article: normalize(record, images),
        hero_image: images.resolve(select_image(record), HERO_SIZE),
        hero_alt: select_image(record)
            .and_then(ImageField::alt)
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .map(str::to_string),
        body: fields
            .rich_text()
            .iter()
            .filter(|block| !matches!(block, Block::Unknown))
            .cloned()
            .collect(),
    }
}

fn normalize_with_size(record: &RawRecord, images: &ImageResolver, size: ImageSize) -> Article {
    let fields = record.fields();
    Article {
        id: fields.id.clone().unwrap_or_default(),
        title: fields
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
            .to_string(),
        excerpt: excerpt(fields),
        image: images.resolve(select_image(record), size),
        date: format_date(fields.published_at.as_deref()),
        author: fields
            .author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
            .to_string(),
        category: category(fields),
        sport_tags: fields
            .sport_tags
            .iter()
            .filter(|tag| !tag.is_empty())
            .cloned()
            .collect(),
        url: article_path(fields.slug_current()),
    }
}

/// First present image field, in the record type's priority order.
fn select_image(record: &RawRecord) -> Option<&ImageField> {
    let priority = match record.kind() {
        ContentKind::Article => ARTICLE_IMAGE_PRIORITY,
        ContentKind::Post => POST_IMAGE_PRIORITY,
    };
    let fields = record.fields();
    priority
        .iter()
        .filter_map(|slot| slot.get(fields))
        .find(|field| field.is_present())
}

/// Explicit excerpt, else the opening of the first text block.
#[must_use]
pub fn excerpt(record: &ContentRecord) -> String {
    if let Some(explicit) = record.excerpt.as_deref().filter(|e| !e.trim().is_empty()) {
        return explicit.to_string();
    }

    record
        .rich_text()
        .iter()
        .find_map(|block| match block {
            Block::Block(text) => text.first_text(),
            _ => None,
        })
        .map_or_else(
            || DEFAULT_EXCERPT.to_string(),
            |text| {
                let opening: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
                format!("{opening}...")
            },
        )
}

/// Category label from the first strategy yielding a non-blank value.
#[must_use]
pub fn category(record: &ContentRecord) -> String {
    CATEGORY_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(record).map(str::trim).filter(|c| !c.is_empty()))
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string()
}

/// Long-form date such as "June 15, 2024", or "Recently".
#[must_use]
pub fn format_date(published_at: Option<&str>) -> String {
    let Some(raw) = published_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_DATE.to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| parse_naive_datetime(raw))
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            tracing::debug!(published_at = raw, "Unparseable publish date");
            DEFAULT_DATE.to_string()
        }
    }
}

/// Date of a timestamp without an offset. A bare `Z` suffix is read as UTC.
fn parse_naive_datetime(raw: &str) -> Option<NaiveDate> {
    let local = raw.strip_suffix('Z').unwrap_or(raw);
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        .map(|dt| dt.date())
}

/// Site path for a stored slug.
#[must_use]
pub fn article_path(slug: &str) -> String {
    format!("/news/{}", slug.trim().trim_end_matches('/'))
}
