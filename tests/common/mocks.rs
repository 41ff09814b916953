use async_trait::async_trait;
use recipe_client::api::{GenerationRequest, GenerationResult, RecipeClient, RequestError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock recipe client for testing
#[derive(Debug, Clone)]
pub struct MockRecipeClient {
    pub outcomes: Arc<Mutex<VecDeque<GenerationResult>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockRecipeClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_outcomes(self, outcomes: Vec<GenerationResult>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes.into();
        self
    }

    pub fn add_outcome(&self, outcome: GenerationResult) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeClient for MockRecipeClient {
    async fn generate(&self, request: GenerationRequest) -> GenerationResult {
        self.requests.lock().unwrap().push(request);

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::network()))
    }
}

impl Default for MockRecipeClient {
    fn default() -> Self {
        Self::new()
    }
}
