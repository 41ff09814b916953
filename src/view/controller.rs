use super::fsm::{RequestId, UiState, ViewEvent};
use crate::api::{GenerationRequest, GenerationResult, RecipeClient};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

pub struct ViewController {
    client: Box<dyn RecipeClient>,
    state: UiState,
}

impl ViewController {
    pub fn new(client: Box<dyn RecipeClient>) -> Self {
        Self {
            client,
            state: UiState::new(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) -> &UiState {
        self.dispatch(ViewEvent::SetIngredients(ingredients.into()))
    }

    pub fn set_style_or_diet(&mut self, style_or_diet: impl Into<String>) -> &UiState {
        self.dispatch(ViewEvent::SetStyleOrDiet(style_or_diet.into()))
    }

    /// Enters `Loading` and hands back what to send. Any result already on
    /// display is cleared here, before the new one is known.
    pub fn begin(&mut self) -> (RequestId, GenerationRequest) {
        let request_id = Uuid::new_v4();
        self.dispatch(ViewEvent::Submit { request_id });
        (request_id, self.state.request())
    }

    /// Applies a finished request. Completions for anything other than the
    /// request currently in flight leave the state untouched.
    pub fn complete(&mut self, request_id: RequestId, outcome: GenerationResult) -> &UiState {
        self.dispatch(ViewEvent::Completed {
            request_id,
            outcome,
        })
    }

    pub async fn submit(&mut self) -> &UiState {
        self.submit_with(|_| {}).await
    }

    /// Like [`submit`](Self::submit), calling `on_loading` with the busy
    /// state before the request goes out.
    pub async fn submit_with<F>(&mut self, on_loading: F) -> &UiState
    where
        F: FnOnce(&UiState),
    {
        let (request_id, request) = self.begin();
        on_loading(&self.state);

        let span = info_span!("generate", %request_id);
        let outcome = self.client.generate(request).instrument(span).await;

        match &outcome {
            Ok(recipes) => info!("Request {} returned {} recipe(s)", request_id, recipes.len()),
            Err(e) => info!("Request {} failed: {}", request_id, e),
        }

        self.complete(request_id, outcome)
    }

    fn dispatch(&mut self, event: ViewEvent) -> &UiState {
        let current = std::mem::take(&mut self.state);
        self.state = current.transition(event);
        &self.state
    }
}
