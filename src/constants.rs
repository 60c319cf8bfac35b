//! Shared constants used across the application.

/// User agent string sent with backend and model requests.
pub const USER_AGENT: &str = concat!("para-sports-news/", env!("CARGO_PKG_VERSION"));

/// Image shown whenever no source yields a usable URL.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Base URL of the hosted image CDN.
pub const IMAGE_CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Site name used in page titles and Open Graph metadata.
pub const SITE_NAME: &str = "Disability Sports Channel";

/// Excerpt used when a record has neither an excerpt nor body text.
pub const DEFAULT_EXCERPT: &str = "Read more about this story...";

/// Date label used when a publish timestamp is missing or unparseable.
pub const DEFAULT_DATE: &str = "Recently";

/// Author used when a record has no author reference.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Category used when no category strategy yields a label.
pub const DEFAULT_CATEGORY: &str = "News";

/// Maximum number of characters taken from body text for a derived excerpt.
pub const EXCERPT_MAX_CHARS: usize = 200;
