//! Test utilities for outlay-core
//!
//! This module provides testing infrastructure including a mock Ollama
//! server that can be used for development and integration tests.

use axum::{
    extract::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Mock Ollama server for testing and development
pub struct MockAiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockAiServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/api/tags", get(handle_tags))
            .route("/api/generate", post(handle_generate));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockAiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ollama tags endpoint response (health check)
async fn handle_tags() -> Json<TagsResponse> {
    Json(TagsResponse {
        models: vec![ModelInfo {
            name: "llama3.2:latest".to_string(),
            modified_at: "2024-01-01T00:00:00Z".to_string(),
            size: 4_000_000_000,
        }],
    })
}

/// Ollama generate endpoint
async fn handle_generate(Json(request): Json<GenerateRequest>) -> Json<GenerateResponse> {
    // Detect what type of request this is based on prompt content.
    // These patterns match the prompt builders in classify.rs / insights.rs.
    let response = if request.prompt.contains("Expense Title: '") {
        classify_title_mock(&request.prompt)
    } else if request.prompt.contains("personal finance assistant") {
        insights_mock()
    } else {
        "Miscellaneous".to_string()
    };

    Json(GenerateResponse {
        model: request.model,
        response,
        done: true,
    })
}

/// Mock category classification by keyword
fn classify_title_mock(prompt: &str) -> String {
    let title = extract_title_from_prompt(prompt).to_uppercase();

    let category = if title.contains("PIZZA") || title.contains("GROCER") || title.contains("LUNCH")
    {
        "Food"
    } else if title.contains("FLIGHT") || title.contains("TRAIN") || title.contains("UBER") {
        "Travel"
    } else if title.contains("AMAZON") || title.contains("SHOES") {
        "Shopping"
    } else if title.contains("ELECTRIC") || title.contains("WATER BILL") {
        "Utilities"
    } else if title.contains("PHARMACY") || title.contains("DOCTOR") {
        "Health"
    } else if title.contains("NETFLIX") || title.contains("CINEMA") {
        "Entertainment"
    } else if title.contains("TEXTBOOK") || title.contains("COURSE") {
        "Education"
    } else if title.contains("GARBLE") {
        // Deliberately invalid output, for exercising the fallback path
        "A Category That Does Not Exist"
    } else {
        "Miscellaneous"
    };

    category.to_string()
}

/// Extract the expense title from the classification prompt
fn extract_title_from_prompt(prompt: &str) -> String {
    if let Some(start) = prompt.find("Expense Title: '") {
        let after_start = &prompt[start + 16..];
        if let Some(end) = after_start.find('\'') {
            return after_start[..end].to_string();
        }
    }
    "Unknown".to_string()
}

/// Canned three-point insight response
fn insights_mock() -> String {
    "1. Food is your largest category this week; try one more home-cooked meal.\n\
     2. You record small purchases frequently; batching errands could help.\n\
     3. Set aside 5% of your next paycheck before spending."
        .to_string()
}

// Request/Response types for the mock server

#[derive(Debug, Serialize)]
struct TagsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
struct ModelInfo {
    name: String,
    modified_at: String,
    size: u64,
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    #[allow(dead_code)]
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    model: String,
    response: String,
    done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiBackend, AiClient, OllamaBackend};
    use crate::classify::{Classification, Classifier, DefaultReason};
    use crate::insights::{InsightGenerator, InsightReport};
    use crate::models::{Category, Expense};
    use chrono::Utc;

    fn expense(title: &str, amount: f64) -> Expense {
        Expense {
            id: 1,
            title: title.to_string(),
            amount,
            category: Category::Food,
            date_added: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_mock_server_health_check() {
        let server = MockAiServer::start().await;
        let client = OllamaBackend::new(&server.url(), "test-model");

        assert!(client.health_check().await);
    }

    #[tokio::test]
    async fn test_classify_against_mock_server() {
        let server = MockAiServer::start().await;
        let ai = AiClient::ollama(&server.url(), "test-model");
        let classifier = Classifier::new(Some(&ai));

        let result = classifier.classify("Pizza with friends").await;
        assert_eq!(result, Classification::Suggested(Category::Food));

        let result = classifier.classify("Flight to Denver").await;
        assert_eq!(result, Classification::Suggested(Category::Travel));
    }

    #[tokio::test]
    async fn test_classify_unknown_title_is_miscellaneous() {
        let server = MockAiServer::start().await;
        let ai = AiClient::ollama(&server.url(), "test-model");
        let classifier = Classifier::new(Some(&ai));

        let result = classifier.classify("Something entirely new").await;
        assert_eq!(result, Classification::Suggested(Category::Miscellaneous));
    }

    #[tokio::test]
    async fn test_classify_invalid_model_output_defaults() {
        let server = MockAiServer::start().await;
        let ai = AiClient::ollama(&server.url(), "test-model");
        let classifier = Classifier::new(Some(&ai));

        // The mock answers this title with a string outside the category set
        let result = classifier.classify("garble garble").await;
        assert_eq!(
            result,
            Classification::Defaulted(Category::Miscellaneous, DefaultReason::InvalidResponse)
        );
    }

    #[tokio::test]
    async fn test_classify_unreachable_server_defaults() {
        // Nothing listens here; the call fails and the classifier degrades
        let ai = AiClient::ollama("http://127.0.0.1:1", "test-model");
        let classifier = Classifier::new(Some(&ai));

        let result = classifier.classify("Pizza with friends").await;
        assert_eq!(
            result,
            Classification::Defaulted(Category::Miscellaneous, DefaultReason::BackendError)
        );
    }

    #[tokio::test]
    async fn test_insights_against_mock_server() {
        let server = MockAiServer::start().await;
        let ai = AiClient::ollama(&server.url(), "test-model");
        let generator = InsightGenerator::new(Some(&ai));

        let report = generator.generate(&[expense("Lunch", 12.0)]).await;
        match report {
            InsightReport::Points(points) => assert_eq!(points.len(), 3),
            other => panic!("expected Points, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_insights_unreachable_server_fails_soft() {
        let ai = AiClient::ollama("http://127.0.0.1:1", "test-model");
        let generator = InsightGenerator::new(Some(&ai));

        let report = generator.generate(&[expense("Lunch", 12.0)]).await;
        assert_eq!(report, InsightReport::Failed);
    }

    #[tokio::test]
    async fn test_ollama_client_from_env_not_set() {
        // When OLLAMA_HOST is not set, from_env returns None
        std::env::remove_var("OLLAMA_HOST");
        let client = OllamaBackend::from_env();
        assert!(client.is_none());
    }
}
