//! Expense category classification
//!
//! Builds a fixed-vocabulary prompt from an expense title, asks the AI
//! backend for a single category name, and validates the answer against the
//! `Category` enum. Every failure mode degrades to `Miscellaneous`; adding
//! an expense never fails because of the classifier.

use tracing::warn;

use crate::ai::{parsing::parse_category, AiBackend, AiClient};
use crate::models::Category;

/// Why a classification fell back to the default category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultReason {
    /// No AI backend configured at process start
    Unconfigured,
    /// The backend call failed (unreachable, HTTP error)
    BackendError,
    /// The backend answered with something outside the category set
    InvalidResponse,
}

/// Outcome of classifying an expense title
///
/// Callers can distinguish "AI said X" from "AI unavailable, defaulted to X"
/// for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The backend returned a valid category
    Suggested(Category),
    /// Fell back to the default category
    Defaulted(Category, DefaultReason),
}

impl Classification {
    /// The category to persist, regardless of how it was chosen
    pub fn category(&self) -> Category {
        match self {
            Self::Suggested(c) => *c,
            Self::Defaulted(c, _) => *c,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(..))
    }
}

/// Category classifier over an optional AI backend
pub struct Classifier<'a> {
    ai: Option<&'a AiClient>,
}

impl<'a> Classifier<'a> {
    /// `ai` is None when no backend was configured at startup; the
    /// classifier then short-circuits to the default without a call.
    pub fn new(ai: Option<&'a AiClient>) -> Self {
        Self { ai }
    }

    /// Classify an expense title
    ///
    /// The caller validates the title is non-empty before calling. Never
    /// returns an error: all failures degrade to `Miscellaneous` with a
    /// reason, logged as a warning.
    pub async fn classify(&self, title: &str) -> Classification {
        let Some(ai) = self.ai else {
            return Classification::Defaulted(Category::Miscellaneous, DefaultReason::Unconfigured);
        };

        let prompt = build_category_prompt(title);
        match ai.complete(&prompt).await {
            Ok(response) => match parse_category(&response) {
                Some(category) => Classification::Suggested(category),
                None => {
                    warn!(
                        response = %response.trim(),
                        "AI returned unexpected category, defaulting to Miscellaneous"
                    );
                    Classification::Defaulted(
                        Category::Miscellaneous,
                        DefaultReason::InvalidResponse,
                    )
                }
            },
            Err(e) => {
                warn!(error = %e, "Category classification failed, defaulting to Miscellaneous");
                Classification::Defaulted(Category::Miscellaneous, DefaultReason::BackendError)
            }
        }
    }
}

/// Build the classification prompt for an expense title
fn build_category_prompt(title: &str) -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze the expense title below. Return ONLY the single most appropriate \
         spending category name from this list:\n{categories}.\n\n\
         Expense Title: '{title}'\n\n\
         Return only the category name, nothing else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockBackend;

    fn client(backend: MockBackend) -> AiClient {
        AiClient::Mock(backend)
    }

    #[tokio::test]
    async fn test_unconfigured_defaults_to_miscellaneous() {
        let classifier = Classifier::new(None);
        let result = classifier.classify("Pizza night").await;
        assert_eq!(
            result,
            Classification::Defaulted(Category::Miscellaneous, DefaultReason::Unconfigured)
        );
    }

    #[tokio::test]
    async fn test_valid_response_is_suggested() {
        let ai = client(MockBackend::with_response("Food"));
        let classifier = Classifier::new(Some(&ai));
        let result = classifier.classify("Pizza night").await;
        assert_eq!(result, Classification::Suggested(Category::Food));
        assert!(!result.is_defaulted());
    }

    #[tokio::test]
    async fn test_whitespace_around_response_is_tolerated() {
        let ai = client(MockBackend::with_response("  Travel\n"));
        let classifier = Classifier::new(Some(&ai));
        let result = classifier.classify("Train to Boston").await;
        assert_eq!(result.category(), Category::Travel);
    }

    #[tokio::test]
    async fn test_garbage_response_defaults() {
        let ai = client(MockBackend::with_response("Definitely Food, I think"));
        let classifier = Classifier::new(Some(&ai));
        let result = classifier.classify("Pizza night").await;
        assert_eq!(
            result,
            Classification::Defaulted(Category::Miscellaneous, DefaultReason::InvalidResponse)
        );
    }

    #[tokio::test]
    async fn test_backend_error_defaults() {
        let ai = client(MockBackend::failing());
        let classifier = Classifier::new(Some(&ai));
        let result = classifier.classify("Pizza night").await;
        assert_eq!(
            result,
            Classification::Defaulted(Category::Miscellaneous, DefaultReason::BackendError)
        );
    }

    #[test]
    fn test_prompt_mentions_every_category_and_the_title() {
        let prompt = build_category_prompt("Gym membership");
        for cat in Category::ALL {
            assert!(prompt.contains(cat.as_str()), "missing {}", cat);
        }
        assert!(prompt.contains("Gym membership"));
    }
}
