//! Image URL resolution.
//!
//! Turns whatever an image field holds into a URL the page can render. Each
//! strategy is tried in order and the first one to produce a URL wins; when
//! none does, the placeholder is returned. Nothing here fails.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::types::{AssetRef, ImageField};
use crate::constants::{IMAGE_CDN_BASE, PLACEHOLDER_IMAGE};

/// Card-sized images used in lists and grids.
pub const CARD_SIZE: ImageSize = ImageSize::new(800, 450);

/// Hero image on the article page.
pub const HERO_SIZE: ImageSize = ImageSize::new(1200, 675);

/// Inline images inside rich text.
pub const INLINE_SIZE: ImageSize = ImageSize::new(800, 450);

/// Quality requested from the transformation service.
const IMAGE_QUALITY: u8 = 80;

/// Loose asset reference pattern: `image-<hex>-<WxH>-<format>` anywhere in
/// the string.
static ASSET_REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"image-([a-fA-F0-9]+)-(\d+x\d+)-(\w+)").expect("valid regex"));

/// Requested output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Project and dataset the image CDN serves assets from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    pub project_id: String,
    pub dataset: String,
}

impl AssetLocation {
    /// Untransformed CDN URL for a raw asset reference.
    #[must_use]
    pub fn original_url(&self, reference: &str) -> Option<String> {
        let captures = ASSET_REF_PATTERN.captures(reference)?;
        Some(format!(
            "{IMAGE_CDN_BASE}/{}/{}/{}-{}.{}",
            self.project_id, self.dataset, &captures[1], &captures[2], &captures[3],
        ))
    }
}

/// A parsed asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetId<'a> {
    pub hash: &'a str,
    pub width: u32,
    pub height: u32,
    pub format: &'a str,
}

impl<'a> AssetId<'a> {
    /// Strictly parse `image-<hex>-<W>x<H>-<format>`.
    ///
    /// Returns `None` for anything that does not match the whole pattern.
    #[must_use]
    pub fn parse(reference: &'a str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let mut parts = rest.splitn(3, '-');
        let hash = parts.next()?;
        let dimensions = parts.next()?;
        let format = parts.next()?;

        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        if format.is_empty() || !format.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        let (w, h) = dimensions.split_once('x')?;
        Some(Self {
            hash,
            width: w.parse().ok()?,
            height: h.parse().ok()?,
            format,
        })
    }
}

/// Builds transformation URLs for asset references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    location: AssetLocation,
}

impl ImageUrlBuilder {
    #[must_use]
    pub const fn new(location: AssetLocation) -> Self {
        Self { location }
    }

    /// Center-cropped, auto-format URL for the given asset.
    #[must_use]
    pub fn build(&self, asset: &AssetId<'_>, size: ImageSize) -> String {
        format!(
            "{IMAGE_CDN_BASE}/{}/{}/{}-{}x{}.{}?w={}&h={}&fit=crop&crop=center&auto=format&q={IMAGE_QUALITY}",
            self.location.project_id,
            self.location.dataset,
            asset.hash,
            asset.width,
            asset.height,
            asset.format,
            size.width,
            size.height,
        )
    }
}

type Strategy = fn(&ImageResolver, &ImageField, ImageSize) -> Option<String>;

/// Resolution strategies in priority order.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("asset_url", ImageResolver::from_asset_url),
    ("direct_url", ImageResolver::from_direct_url),
    ("url_builder", ImageResolver::from_builder),
    ("manual_ref", ImageResolver::from_reference_pattern),
];

/// Resolves image fields to display URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResolver {
    builder: Option<ImageUrlBuilder>,
    location: Option<AssetLocation>,
}

impl ImageResolver {
    /// Resolver for a configured project, with the URL builder enabled.
    #[must_use]
    pub fn new(location: AssetLocation) -> Self {
        Self {
            builder: Some(ImageUrlBuilder::new(location.clone())),
            location: Some(location),
        }
    }

    /// Resolver that only knows how to pass through ready URLs.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Resolver that knows the project but has no URL builder, so asset
    /// references go through the hand-built path only.
    #[must_use]
    pub const fn without_builder(location: AssetLocation) -> Self {
        Self {
            builder: None,
            location: Some(location),
        }
    }

    /// Resolve an optional image field, falling back to the placeholder.
    #[must_use]
    pub fn resolve(&self, field: Option<&ImageField>, size: ImageSize) -> String {
        let Some(field) = field else {
            return PLACEHOLDER_IMAGE.to_string();
        };

        for (name, strategy) in STRATEGIES {
            if let Some(url) = strategy(self, field, size) {
                debug!(strategy = *name, url = %url, "Resolved image");
                return url;
            }
        }

        debug!(?field, "No image strategy matched, using placeholder");
        PLACEHOLDER_IMAGE.to_string()
    }

    fn from_asset_url(&self, field: &ImageField, _size: ImageSize) -> Option<String> {
        field
            .asset()
            .and_then(|asset| asset.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }

    fn from_direct_url(&self, field: &ImageField, _size: ImageSize) -> Option<String> {
        let ImageField::Url(url) = field else {
            return None;
        };
        let url = url.trim();
        let is_absolute = url.starts_with("http://") || url.starts_with("https://");
        (is_absolute || url.starts_with('/')).then(|| url.to_string())
    }

    fn from_builder(&self, field: &ImageField, size: ImageSize) -> Option<String> {
        let builder = self.builder.as_ref()?;
        let asset = AssetId::parse(reference_of(field.asset()?)?)?;
        Some(builder.build(&asset, size))
    }

    fn from_reference_pattern(&self, field: &ImageField, size: ImageSize) -> Option<String> {
        let location = self.location.as_ref()?;
        let reference = reference_of(field.asset()?)?;
        let captures = ASSET_REF_PATTERN.captures(reference)?;
        Some(format!(
            "{IMAGE_CDN_BASE}/{}/{}/{}-{}.{}?w={}&h={}&fit=crop&auto=format",
            location.project_id,
            location.dataset,
            &captures[1],
            &captures[2],
            &captures[3],
            size.width,
            size.height,
        ))
    }
}

/// The asset's reference string, preferring `_ref` over an expanded `_id`.
fn reference_of(asset: &AssetRef) -> Option<&str> {
    asset
        .reference
        .as_deref()
        .or(asset.id.as_deref())
        .filter(|r| !r.is_empty())
}
