//! Alert system for displaying success, info and error messages to users.
//!
//! Alerts are either swapped into the page's alert container by HTMX when a
//! request fails, or carried across a redirect as a flash message.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// A message to show the user, styled by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alert {
    Success { message: String, details: String },
    Info { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "text-green-800 border-green-300 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                details,
            ),
            Alert::Info { message, details } => (
                "text-blue-800 border-blue-300 bg-blue-50 \
                dark:bg-gray-800 dark:text-blue-400 dark:border-blue-800",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html! {
            div
                role="alert"
                class={ "flex items-start p-4 mb-4 border rounded-lg " (container_style) }
            {
                div class="ms-3 text-sm"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8"
                    onclick="this.parentElement.remove()"
                {
                    "✕"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn renders_message_and_details() {
        let alert = Alert::Success {
            message: "Saved".to_owned(),
            details: "The record was saved.".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(paragraphs, vec!["Saved", "The record was saved."]);
    }

    #[test]
    fn omits_empty_details() {
        let alert = Alert::Error {
            message: "Oops".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert_eq!(html.select(&Selector::parse("p").unwrap()).count(), 1);
    }

    #[test]
    fn round_trips_through_json() {
        let alert = Alert::Info {
            message: "Thank you".to_owned(),
            details: "Please pay".to_owned(),
        };

        let json = serde_json::to_string(&alert).unwrap();

        assert_eq!(serde_json::from_str::<Alert>(&json).unwrap(), alert);
    }
}
