//! Alert components for notices shown inline on a page.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Warning,
    Info,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// An alert message component.
///
/// Renders as a styled article element with error/warning/info styling.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::info("The chat assistant is currently unavailable.")
///     .with_title("Heads up");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new alert with the given variant and message.
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
        }
    }

    /// Create an error alert.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    /// Create a warning alert.
    #[must_use]
    pub const fn warning(message: &'a str) -> Self {
        Self::new(AlertVariant::Warning, message)
    }

    /// Create an info alert.
    #[must_use]
    pub const fn info(message: &'a str) -> Self {
        Self::new(AlertVariant::Info, message)
    }

    /// Add a title to the alert.
    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.article_class();

        html! {
            article class={ "alert " (class) } role="status" {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}
