//! GROQ queries issued against the content backend.

use once_cell::sync::Lazy;

/// Fields requested for every news record.
const ARTICLE_PROJECTION: &str = r#"{
  _id,
  _type,
  title,
  slug,
  publishedAt,
  excerpt,
  author->{ name, _id },
  category,
  "categoryExpanded": category->{ _id, _type, title, name, slug, description },
  featuredImage { asset->{ _id, _ref, url }, alt, caption },
  thumbnail { asset->{ _id, _ref, url }, alt, caption },
  image { asset->{ _id, _ref, url }, alt, caption },
  mainImage { asset->{ _id, _ref, url }, alt, caption },
  body,
  content,
  featured,
  sportTags
}"#;

/// Newest five records of either document type.
pub static FEATURED: Lazy<String> = Lazy::new(|| {
    format!(
        r#"*[_type == "article" || _type == "post"] | order(publishedAt desc) [0...5] {ARTICLE_PROJECTION}"#
    )
});

/// First record of type `$type` whose slug is one of `$slugs`.
pub static BY_SLUG: Lazy<String> = Lazy::new(|| {
    format!(r"*[_type == $type && slug.current in $slugs][0] {ARTICLE_PROJECTION}")
});

/// Every stored post slug.
pub const POST_SLUGS: &str = r#"*[_type == "post" && defined(slug.current)].slug.current"#;

/// Connection check: the two newest posts with their image fields.
pub const DEBUG_CONNECTION: &str = r#"*[_type == "post"] | order(publishedAt desc) [0...2] {
  _id,
  title,
  slug,
  publishedAt,
  thumbnail { asset->{ _id, _ref, url }, alt },
  image { asset->{ _id, _ref, url }, alt }
}"#;

/// Raw dump of articles, posts and categories.
pub const DEBUG_DATA: &str = r#"{
  "articles": *[_type == "article"] | order(publishedAt desc) {
    _id, title, slug, excerpt, publishedAt, featured, sportTags,
    "category": category->{ _id, title, name, slug },
    "author": author->{ name, slug }
  },
  "posts": *[_type == "post"] | order(publishedAt desc) { _id, title, slug, publishedAt, featured },
  "categories": *[_type == "category"] { _id, title, name, slug },
  "specificArticles": *[_type == "article" && slug.current in $slugs] {
    _id, title, slug, "category": category->{ _id, title, name, slug }
  }
}"#;

/// Each post's title and raw image field.
pub const DEBUG_IMAGE_REFS: &str = r#"*[_type == "post"] { _id, title, image }"#;
