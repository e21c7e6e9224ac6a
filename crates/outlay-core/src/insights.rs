//! Spending insight generation
//!
//! Builds a prompt from the most recent expenses, asks the AI backend for
//! exactly three numbered suggestions, and parses whatever comes back.
//! Malformed output is kept lossy (log and return the parsed subset);
//! backend failures never propagate past this module.

use tracing::warn;

use crate::ai::{parsing::parse_insight_points, AiBackend, AiClient};
use crate::models::Expense;

/// How many recent expenses feed the insight prompt
pub const INSIGHT_EXPENSE_LIMIT: i64 = 15;

/// Target number of insight points per generation
const TARGET_POINTS: usize = 3;

/// Outcome of an insight generation attempt
///
/// The four cases are distinct so callers can render distinct placeholders:
/// an unconfigured backend is not the same as "no data" or a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightReport {
    /// No AI backend configured at process start
    Unconfigured,
    /// No expense data to analyze
    NoData,
    /// The backend call failed
    Failed,
    /// Parsed points, target 3 but possibly fewer
    Points(Vec<String>),
}

impl InsightReport {
    /// Flatten to the displayable line sequence:
    /// `Unconfigured` is empty, `NoData` and `Failed` are single messages,
    /// `Points` are the points themselves.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Unconfigured => Vec::new(),
            Self::NoData => vec!["No expense data available to generate insights.".to_string()],
            Self::Failed => vec!["Could not generate insights at this time.".to_string()],
            Self::Points(points) => points.clone(),
        }
    }

    /// Status label for API responses and logging
    pub fn status(&self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::NoData => "no_data",
            Self::Failed => "failed",
            Self::Points(_) => "ok",
        }
    }
}

/// Insight generator over an optional AI backend
pub struct InsightGenerator<'a> {
    ai: Option<&'a AiClient>,
}

impl<'a> InsightGenerator<'a> {
    pub fn new(ai: Option<&'a AiClient>) -> Self {
        Self { ai }
    }

    /// Generate insights from recent expenses (newest first, capped at
    /// [`INSIGHT_EXPENSE_LIMIT`] by the caller's query)
    pub async fn generate(&self, recent: &[Expense]) -> InsightReport {
        let Some(ai) = self.ai else {
            return InsightReport::Unconfigured;
        };

        if recent.is_empty() {
            return InsightReport::NoData;
        }

        let prompt = build_insight_prompt(recent);
        match ai.complete(&prompt).await {
            Ok(response) => {
                let points = parse_insight_points(&response);
                if points.len() != TARGET_POINTS {
                    warn!(
                        parsed = points.len(),
                        expected = TARGET_POINTS,
                        raw = %response.trim(),
                        "AI returned an unexpected number of insights"
                    );
                }
                InsightReport::Points(points)
            }
            Err(e) => {
                warn!(error = %e, "Insight generation failed");
                InsightReport::Failed
            }
        }
    }
}

/// Build the insight prompt from recent expenses
fn build_insight_prompt(expenses: &[Expense]) -> String {
    let listing = expenses
        .iter()
        .map(|e| format!("- {} | {:.2} | {}", e.title, e.amount, e.category))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a friendly personal finance assistant analyzing these recent \
         household spending entries:\n{listing}\n\n\
         Please provide exactly 3 brief, actionable bullet points based only on \
         the data provided:\n\
         1. One specific, data-driven suggestion on where the user might be able to reduce expenses.\n\
         2. One observation about the user's spending patterns or frequency in certain categories.\n\
         3. One practical budgeting or savings tip relevant to the observed spending.\n\n\
         Keep each point concise (under 25 words). Be encouraging and avoid generic advice.\n\
         Format the output as a numbered list (1., 2., 3.). Return ONLY the 3 numbered \
         points, no introduction or conclusion."
    )
}
