//! Table components for maud templates.
//!
//! This module provides reusable table components that match the styles
//! defined in `static/css/style.css`.

use maud::{html, Markup, Render};

/// Table variant determines the CSS class applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableVariant {
    /// Default table styling
    #[default]
    Default,
    /// Sport classification table (`.classification-table`)
    Classification,
}

impl TableVariant {
    /// Get the CSS class for this variant.
    #[must_use]
    pub const fn class(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Classification => Some("classification-table"),
        }
    }
}

/// A table element with headers and rows.
#[derive(Debug)]
pub struct Table<'a> {
    /// Table variant/style
    pub variant: TableVariant,
    /// Column headers
    pub headers: Vec<&'a str>,
    /// Pre-rendered row content
    pub rows: Vec<Markup>,
}

impl<'a> Table<'a> {
    /// Create a new table with the given headers.
    #[must_use]
    pub fn new(headers: Vec<&'a str>) -> Self {
        Self {
            variant: TableVariant::Default,
            headers,
            rows: Vec::new(),
        }
    }

    /// Set the table variant.
    #[must_use]
    pub fn variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Add multiple pre-rendered rows.
    #[must_use]
    pub fn rows(mut self, rows: Vec<Markup>) -> Self {
        self.rows = rows;
        self
    }
}

impl Render for Table<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="table-scroll" {
                table class=[self.variant.class()] {
                    @if !self.headers.is_empty() {
                        thead {
                            tr {
                                @for header in &self.headers {
                                    th { (header) }
                                }
                            }
                        }
                    }
                    tbody {
                        @for row in &self.rows {
                            (row)
                        }
                    }
                }
            }
        }
    }
}

/// A simple helper to create a table row from string cells.
#[must_use]
pub fn simple_row(cells: &[&str]) -> Markup {
    html! {
        tr {
            @for cell in cells {
                td { (*cell) }
            }
        }
    }
}
