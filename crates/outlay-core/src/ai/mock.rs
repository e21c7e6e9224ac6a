//! Mock backend for testing
//!
//! Returns a configurable canned response, or an error, without any network
//! dependency. Useful for exercising the classifier and insight generator
//! fallback contracts.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::AiBackend;

/// Mock AI backend for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Canned completion text
    pub response: String,
    /// When true, complete() fails with an error instead
    pub fail: bool,
    /// Whether health_check should return true
    pub healthy: bool,
}

impl MockBackend {
    /// Create a new mock backend (healthy, empty response)
    pub fn new() -> Self {
        Self {
            response: String::new(),
            fail: false,
            healthy: true,
        }
    }

    /// Mock that answers every prompt with the given text
    pub fn with_response(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail: false,
            healthy: true,
        }
    }

    /// Mock whose completions always fail
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail: true,
            healthy: false,
        }
    }
}

#[async_trait]
impl AiBackend for MockBackend {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        if self.fail {
            return Err(Error::InvalidData("mock backend failure".into()));
        }
        Ok(self.response.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
