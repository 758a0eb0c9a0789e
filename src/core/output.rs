//! Report types shared by commands that process several items.

use serde::{Deserialize, Serialize};

/// Aggregated outcome of writing a set of files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub written: u32,
    pub failed: u32,
    pub items: Vec<BatchResultItem>,
}

/// Individual item result within a batch operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResultItem {
    pub id: String,
    pub path: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_written(&mut self, id: String, path: String) {
        self.written += 1;
        self.items.push(BatchResultItem {
            id,
            path,
            status: "written".to_string(),
            error: None,
        });
    }

    pub fn record_error(&mut self, id: String, path: String, error: String) {
        self.failed += 1;
        self.items.push(BatchResultItem {
            id,
            path,
            status: "error".to_string(),
            error: Some(error),
        });
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn failed_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.error.is_some())
            .map(|item| item.id.clone())
            .collect()
    }
}
