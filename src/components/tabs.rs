//! Tab components for maud templates.
//!
//! Content tabs show and hide panels on the same page without navigation.
//! The sport pages use them for the overview, rules and classification
//! sections.

use maud::{html, Markup, PreEscaped, Render};

/// JavaScript for content tab switching functionality.
/// This is shared across all content tab instances.
const CONTENT_TAB_SCRIPT: &str = r#"
function showTab(tabId, btn) {
    document.querySelectorAll('.tab-content').forEach(t => t.classList.remove('active'));
    document.querySelectorAll('.tab-nav button').forEach(b => b.classList.remove('active'));
    document.getElementById(tabId).classList.add('active');
    btn.classList.add('active');
}
"#;

/// A content tab panel with associated button.
#[derive(Debug, Clone)]
pub struct ContentTab {
    /// Unique ID for this tab's content panel.
    pub id: String,
    /// Display label for the tab button.
    pub label: String,
    /// Whether this tab is initially active.
    pub active: bool,
    /// The content to display in this tab panel.
    pub content: Markup,
}

impl ContentTab {
    /// Create a new content tab.
    #[must_use]
    pub fn new(id: &str, label: &str, content: Markup) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            active: false,
            content,
        }
    }

    /// Mark this tab as active.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// A group of content tabs with navigation and panels.
///
/// # Example
///
/// ```ignore
/// use crate::components::ContentTabs;
///
/// let tabs = ContentTabs::new()
///     .tab("overview", "Overview", html! { p { "Key facts" } }, true)
///     .tab("rules", "Rules", html! { p { "Official rules" } }, false);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentTabs {
    tabs: Vec<ContentTab>,
}

impl ContentTabs {
    /// Create a new empty content tabs component.
    #[must_use]
    pub fn new() -> Self {
        Self { tabs: Vec::new() }
    }

    /// Add a tab with its content.
    #[must_use]
    pub fn tab(mut self, id: &str, label: &str, content: Markup, active: bool) -> Self {
        let tab = if active {
            ContentTab::new(id, label, content).active()
        } else {
            ContentTab::new(id, label, content)
        };
        self.tabs.push(tab);
        self
    }

    /// Add a tab only when `include` holds, leaving the group unchanged otherwise.
    #[must_use]
    pub fn tab_if(self, include: bool, id: &str, label: &str, content: Markup) -> Self {
        if include {
            self.tab(id, label, content, false)
        } else {
            self
        }
    }
}

impl Render for ContentTabs {
    fn render(&self) -> Markup {
        html! {
            nav class="tab-nav" {
                @for tab in &self.tabs {
                    @let class_attr = if tab.active { "active" } else { "" };
                    @let onclick_attr = format!("showTab('{}', this)", tab.id);
                    button type="button" class=(class_attr) onclick=(onclick_attr) {
                        (tab.label)
                    }
                }
            }

            script { (PreEscaped(CONTENT_TAB_SCRIPT)) }

            @for tab in &self.tabs {
                @let content_class = if tab.active { "tab-content active" } else { "tab-content" };
                div id=(tab.id.as_str()) class=(content_class) {
                    (tab.content)
                }
            }
        }
    }
}
