//! The "ask anything" assistant section shown on the home page.
//!
//! The markup is static; `static/js/chat.js` keeps the conversation in the
//! browser and posts it to `/api/chat` on each submit.

use maud::{html, Markup, Render};

use super::alert::Alert;

/// Prompts offered before the first message.
const SUGGESTIONS: &[(&str, &str)] = &[
    (
        "What are Paralympic classifications?",
        "What are the different Paralympic sport classifications?",
    ),
    (
        "Wheelchair basketball rules",
        "Tell me about wheelchair basketball rules",
    ),
    (
        "Top Paralympic swimmers",
        "Who are the top Paralympic swimmers?",
    ),
    (
        "Next Paralympic Games",
        "When is the next Paralympic Games?",
    ),
];

#[derive(Debug, Clone, Copy)]
pub struct ChatSection {
    /// Whether a chat model is configured.
    pub enabled: bool,
}

impl ChatSection {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Render for ChatSection {
    fn render(&self) -> Markup {
        html! {
            section class="chat-section" id="chat" {
                header class="chat-header" {
                    h2 { "Ask Anything About Paralympic Sports" }
                    p {
                        "Get instant answers about Paralympic sports, athletes, events, and more with AI-powered assistance"
                    }
                }
                @if self.enabled {
                    div class="chat-box" {
                        div id="chat-log" class="chat-log" aria-live="polite" {
                            div class="chat-welcome" {
                                h3 { "Welcome to Paralympic Sports AI Assistant" }
                                p { "Ask me anything about Paralympic sports, athletes, classifications, or upcoming events!" }
                                div class="chat-suggestions" {
                                    @for (label, prompt) in SUGGESTIONS {
                                        button type="button" class="chat-suggestion" data-prompt=(prompt) {
                                            (label)
                                        }
                                    }
                                }
                            }
                        }
                        form id="chat-form" class="chat-form" {
                            input type="text" id="chat-input" name="message"
                                placeholder="Ask about Paralympic sports..."
                                autocomplete="off" required;
                            button type="submit" id="chat-send" { "Send" }
                            button type="button" id="chat-clear" class="secondary" { "Clear" }
                        }
                    }
                } @else {
                    (Alert::info("The assistant is not available right now. Browse the latest news below."))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_section_has_form_and_suggestions() {
        let html = ChatSection::new(true).render().into_string();
        assert!(html.contains(r#"id="chat-log""#));
        assert!(html.contains(r#"id="chat-form""#));
        assert_eq!(html.matches("chat-suggestion\"").count(), SUGGESTIONS.len());
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_disabled_section_shows_notice() {
        let html = ChatSection::new(false).render().into_string();
        assert!(!html.contains("chat-form"));
        assert!(html.contains(r#"class="alert info""#));
    }
}
