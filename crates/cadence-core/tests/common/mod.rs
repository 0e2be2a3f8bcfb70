use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use cadence_core::{CadenceError, PlannerBuilder, TextGenerator};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, cadence_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let state_file = temp_dir.path().join("state.json");
    let planner = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Text generator double that records how often it was called.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    pub calls: Arc<AtomicUsize>,
    pub reply: Option<String>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            calls: Arc::default(),
            reply: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> cadence_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| CadenceError::feedback_service("401 Unauthorized"))
    }
}
