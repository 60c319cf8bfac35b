//! Raw content records as returned by the backend, and the canonical
//! article shape the rest of the site renders.
//!
//! Upstream records come in two overlapping document types with loosely
//! enforced schemas. Every field is decoded leniently: a field that is missing
//! or has an unexpected JSON shape decodes as absent instead of failing the
//! whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical, render-ready article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub sport_tags: Vec<String>,
    pub url: String,
}

/// An article plus what the detail page needs beyond the card fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDetail {
    pub article: Article,
    /// Hero image resolved at detail size.
    pub hero_image: String,
    /// Alt text stored with the hero image, if any.
    pub hero_alt: Option<String>,
    /// Rich text body, in document order.
    pub body: Vec<Block>,
}

/// The two document types that can back a news article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Article,
}

impl ContentKind {
    /// Document type name used in backend queries.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Article => "article",
        }
    }
}

/// A raw record, discriminated by its `_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum RawRecord {
    Post(ContentRecord),
    Article(ContentRecord),
}

impl RawRecord {
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Post(_) => ContentKind::Post,
            Self::Article(_) => ContentKind::Article,
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &ContentRecord {
        match self {
            Self::Post(record) | Self::Article(record) => record,
        }
    }
}

/// Fields shared by both document types.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRecord {
    #[serde(rename = "_id", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<Slug>,
    #[serde(deserialize_with = "lenient")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub excerpt: Option<String>,
    /// Rich text body used by posts.
    #[serde(deserialize_with = "lenient_vec")]
    pub body: Vec<Block>,
    /// Rich text body used by articles.
    #[serde(deserialize_with = "lenient_vec")]
    pub content: Vec<Block>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<Author>,
    #[serde(deserialize_with = "lenient")]
    pub category: Option<CategoryField>,
    #[serde(deserialize_with = "lenient")]
    pub category_expanded: Option<CategoryObject>,
    #[serde(deserialize_with = "lenient")]
    pub featured_image: Option<ImageField>,
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: Option<ImageField>,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<ImageField>,
    #[serde(deserialize_with = "lenient")]
    pub main_image: Option<ImageField>,
    #[serde(deserialize_with = "lenient_vec")]
    pub sport_tags: Vec<String>,
}

impl ContentRecord {
    /// The stored slug with surrounding whitespace removed.
    #[must_use]
    pub fn slug_current(&self) -> &str {
        self.slug
            .as_ref()
            .and_then(|s| s.current.as_deref())
            .map_or("", str::trim)
    }

    /// Rich text body, whichever field the document type stores it in.
    #[must_use]
    pub fn rich_text(&self) -> &[Block] {
        if self.body.is_empty() {
            &self.content
        } else {
            &self.body
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Slug {
    #[serde(deserialize_with = "lenient")]
    pub current: Option<String>,
}

impl Slug {
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: Some(current.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// A category as stored on a record: a label, or an object that may be an
/// expanded document or a bare reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Name(String),
    Object(CategoryObject),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryObject {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "_ref", deserialize_with = "lenient")]
    pub reference: Option<String>,
}

/// An image field: either a ready URL/path or an object holding an asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    Url(String),
    Asset(ImageObject),
}

impl ImageField {
    /// Whether this field carries anything worth resolving.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Url(url) => !url.trim().is_empty(),
            Self::Asset(object) => object.asset.is_some(),
        }
    }

    #[must_use]
    pub fn asset(&self) -> Option<&AssetRef> {
        match self {
            Self::Url(_) => None,
            Self::Asset(object) => object.asset.as_ref(),
        }
    }

    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        match self {
            Self::Url(_) => None,
            Self::Asset(object) => object.alt.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageObject {
    #[serde(deserialize_with = "lenient")]
    pub asset: Option<AssetRef>,
    #[serde(deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub caption: Option<String>,
}

/// Asset relation, either a bare reference or an expanded asset document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetRef {
    #[serde(rename = "_ref", deserialize_with = "lenient")]
    pub reference: Option<String>,
    #[serde(rename = "_id", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// One rich text block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum Block {
    Block(TextBlock),
    Image(ImageObject),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    #[serde(deserialize_with = "lenient")]
    pub style: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub list_item: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub children: Vec<Span>,
    #[serde(deserialize_with = "lenient_vec")]
    pub mark_defs: Vec<MarkDef>,
}

impl TextBlock {
    /// A plain paragraph made of a single unmarked span.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            children: vec![Span::text(text)],
            ..Self::default()
        }
    }

    /// First span child carrying non-empty text.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.children
            .iter()
            .filter(|span| span.kind.as_deref() == Some("span"))
            .find_map(|span| span.text.as_deref().filter(|t| !t.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Span {
    #[serde(rename = "_type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub marks: Vec<String>,
}

impl Span {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: Some("span".to_string()),
            text: Some(text.into()),
            marks: Vec::new(),
        }
    }
}

/// Annotation referenced from a span's marks, such as a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkDef {
    #[serde(rename = "_key", deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(rename = "_type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub href: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub blank: Option<bool>,
}

/// Decode a field, treating null or a mismatched shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Decode an array field element by element, dropping elements that don't fit.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
