//! The shared 404 page.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout};

/// Render a 404 page with a link back to `back_href`.
#[must_use]
pub fn render_not_found_page(heading: &str, message: &str, back_href: &str, back_label: &str) -> Markup {
    let content = html! {
        section class="not-found" {
            h1 { (heading) }
            (Alert::warning(message))
            p { a href=(back_href) { (back_label) } }
        }
    };

    BaseLayout::new(heading).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        let html = render_not_found_page(
            "Article Not Found",
            "We couldn't find that story.",
            "/news",
            "Back to News",
        )
        .into_string();
        assert!(html.contains("<h1>Article Not Found</h1>"));
        assert!(html.contains(r#"<a href="/news">Back to News</a>"#));
        assert!(html.contains("alert warning"));
    }
}
