//! Built-in articles served when the content backend is unavailable.

use once_cell::sync::Lazy;

use super::image::ImageResolver;
use super::normalize::{normalize, normalize_detail};
use super::slug::{find_slug_match, slug_variants};
use super::types::{
    Article, ArticleDetail, Author, Block, CategoryField, CategoryObject, ContentRecord,
    ImageField, RawRecord, Slug, TextBlock,
};

struct Seed {
    id: &'static str,
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    image: &'static str,
    published_at: &'static str,
    author: &'static str,
    category: &'static str,
    sport_tags: &'static [&'static str],
    paragraphs: &'static [&'static str],
}

const FEATURED: &[Seed] = &[
    Seed {
        id: "fallback-1",
        title: "Dan Brooke Named Chair of ParalympicsGB",
        slug: "dan-brooke-named-chair-of-paralympicsgb",
        excerpt: "Following an extensive recruitment process, Dan Brooke has been appointed as the new Chair of ParalympicsGB.",
        image: "/person-suit-green.png",
        published_at: "2025-06-17",
        author: "Admin",
        category: "Wheelchair Basketball",
        sport_tags: &["paralympicsgb"],
        paragraphs: &[],
    },
    Seed {
        id: "fallback-2",
        title: "Patrick Anderson: The Unstoppable Force of Wheelchair Basketball",
        slug: "patrick-anderson-the-unstoppable-force-of-wheelchair-basketball",
        excerpt: "Patrick Anderson has officially announced his retirement from wheelchair basketball, marking the end of an era.",
        image: "/wheelchair-basketball-action.png",
        published_at: "2025-06-17",
        author: "Admin",
        category: "Wheelchair Basketball",
        sport_tags: &["wheelchair-basketball"],
        paragraphs: &[],
    },
    Seed {
        id: "fallback-3",
        title: "2025 IPC Classification Code: Raising the Standards for Paralympic Sport",
        slug: "2025-ipc-classification-code-raising-the-standards-for-paralympic-sport",
        excerpt: "The International Paralympic Committee introduces new classification standards to ensure fair competition across all Paralympic sports.",
        image: "/paralympic-stadium.png",
        published_at: "2025-06-16",
        author: "Admin",
        category: "IPC",
        sport_tags: &["ipc", "classification"],
        paragraphs: &[],
    },
];

/// Long-form stories that are only reachable by slug.
const STORIES: &[Seed] = &[
    Seed {
        id: "static-oceania-euro",
        title: "From Oceania to Europe: The Para Swimming World Series Makes a Splash",
        slug: "from-oceania-to-europe-the-para-swimming-world-series-makes-a-splash",
        excerpt: "The Para Swimming World Series continues to grow as it expands from Oceania to European venues, bringing world-class competition to new audiences and providing athletes with more opportunities to compete at the highest level.",
        image: "/para-swimming-competition.png",
        published_at: "2024-06-15T10:00:00Z",
        author: "Sarah Mitchell",
        category: "Para Swimming",
        sport_tags: &["para-swimming"],
        paragraphs: &[
            "The Para Swimming World Series has made a significant splash as it expands its reach from the traditional Oceania circuit to include prestigious European venues. This expansion represents a major milestone in the development of para swimming as a truly global sport.",
            "Athletes from around the world are now benefiting from increased competition opportunities, with the European leg of the series providing new challenges and experiences. The expansion has been welcomed by swimmers, coaches, and fans alike, as it brings world-class para swimming to new audiences across Europe.",
            "The series continues to showcase the incredible talent and determination of para swimmers, with record-breaking performances and inspiring stories of athletic excellence. As the sport continues to grow, events like these play a crucial role in raising the profile of para swimming and inspiring the next generation of athletes.",
        ],
    },
    Seed {
        id: "static-1",
        title: "From Oceania to Euro: A Paralympic Journey",
        slug: "from-oceania-to-euro",
        excerpt: "Follow the incredible journey of Paralympic athletes as they transition from Oceania competitions to European championships, showcasing the global nature of Paralympic sport.",
        image: "/paralympic-stadium.png",
        published_at: "2024-06-15T10:00:00Z",
        author: "Sarah Mitchell",
        category: "Paralympic Stories",
        sport_tags: &["para-athletics", "para-swimming"],
        paragraphs: &[
            "The Paralympic movement has always been about breaking barriers and connecting athletes across continents. This story follows several remarkable athletes who have made the transition from competing in Oceania to establishing themselves on the European Paralympic circuit.",
            "From the swimming pools of Australia to the athletics tracks of Germany, these athletes have shown that Paralympic sport truly knows no boundaries. Their journeys represent not just personal achievement, but the global unity that defines the Paralympic movement.",
        ],
    },
];

impl Seed {
    fn record(&self) -> RawRecord {
        let category = if self.paragraphs.is_empty() {
            CategoryField::Name(self.category.to_string())
        } else {
            CategoryField::Object(CategoryObject {
                title: Some(self.category.to_string()),
                ..CategoryObject::default()
            })
        };
        RawRecord::Article(ContentRecord {
            id: Some(self.id.to_string()),
            title: Some(self.title.to_string()),
            slug: Some(Slug::new(self.slug)),
            published_at: Some(self.published_at.to_string()),
            excerpt: Some(self.excerpt.to_string()),
            content: self
                .paragraphs
                .iter()
                .map(|p| Block::Block(TextBlock::paragraph(*p)))
                .collect(),
            author: Some(Author {
                name: Some(self.author.to_string()),
            }),
            category: Some(category),
            featured_image: Some(ImageField::Url(self.image.to_string())),
            sport_tags: self.sport_tags.iter().map(ToString::to_string).collect(),
            ..ContentRecord::default()
        })
    }
}

/// Featured seeds normalized once, in seed order.
static FEATURED_ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    let images = ImageResolver::unconfigured();
    FEATURED
        .iter()
        .map(|seed| normalize(&seed.record(), &images))
        .collect()
});

/// Every seed reachable by slug, stories first.
static DETAILS: Lazy<Vec<(&'static str, ArticleDetail)>> = Lazy::new(|| {
    let images = ImageResolver::unconfigured();
    STORIES
        .iter()
        .chain(FEATURED.iter())
        .map(|seed| (seed.slug, normalize_detail(&seed.record(), &images)))
        .collect()
});

/// The three built-in featured articles, newest first.
#[must_use]
pub fn fallback_articles() -> Vec<Article> {
    FEATURED_ARTICLES.clone()
}

/// Slugs of the built-in featured articles.
#[must_use]
pub fn fallback_slugs() -> Vec<&'static str> {
    FEATURED.iter().map(|seed| seed.slug).collect()
}

/// Look up a built-in article by slug, using the same variant matching as the
/// backend lookup.
#[must_use]
pub fn fallback_article(slug: &str) -> Option<ArticleDetail> {
    let variants = slug_variants(slug);
    find_slug_match(DETAILS.as_slice(), |entry| entry.0, &variants)
        .map(|(_, detail)| detail.clone())
}
