use crate::api::{EMPTY_RESULT_MESSAGE, GenerationRequest, GenerationResult, Recipe, RequestError};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub type RequestId = Uuid;

// View phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

// View events
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SetIngredients(String),
    SetStyleOrDiet(String),
    Submit {
        request_id: RequestId,
    },
    Completed {
        request_id: RequestId,
        outcome: GenerationResult,
    },
}

/// Everything the renderer needs. Values are never edited in place: each
/// event produces a fresh state through [`UiState::transition`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    ingredients: String,
    style_or_diet: String,
    recipes: Vec<Recipe>,
    loading: bool,
    error: Option<RequestError>,
    phase: Phase,
    in_flight: Option<RequestId>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn style_or_diet(&self) -> &str {
        &self.style_or_diet
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&RequestError> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// True once a request has completed and its result is on display.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Success | Phase::Failure)
    }

    /// The request a submission made from this state would send.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.ingredients.clone(), self.style_or_diet.clone())
    }

    pub fn transition(self, event: ViewEvent) -> UiState {
        let old_phase = self.phase;
        debug!("🔄 View processing event in phase {:?}", old_phase);

        let new_state = match event {
            ViewEvent::SetIngredients(ingredients) => UiState {
                ingredients,
                ..self
            },
            ViewEvent::SetStyleOrDiet(style_or_diet) => UiState {
                style_or_diet,
                ..self
            },
            ViewEvent::Submit { request_id } => {
                if let Some(previous) = self.in_flight {
                    warn!(
                        "Request {} superseded by {} before completing",
                        previous, request_id
                    );
                }
                UiState {
                    recipes: Vec::new(),
                    loading: true,
                    error: None,
                    phase: Phase::Loading,
                    in_flight: Some(request_id),
                    ..self
                }
            }
            ViewEvent::Completed {
                request_id,
                outcome,
            } => {
                if self.in_flight != Some(request_id) {
                    warn!(
                        "❌ Ignoring stale completion for request {} (in flight: {:?})",
                        request_id, self.in_flight
                    );
                    return self;
                }
                match outcome {
                    Ok(recipes) if !recipes.is_empty() => UiState {
                        recipes,
                        loading: false,
                        error: None,
                        phase: Phase::Success,
                        in_flight: None,
                        ..self
                    },
                    Ok(_) => UiState {
                        recipes: Vec::new(),
                        loading: false,
                        error: Some(RequestError::new(EMPTY_RESULT_MESSAGE, None)),
                        phase: Phase::Failure,
                        in_flight: None,
                        ..self
                    },
                    Err(error) => UiState {
                        recipes: Vec::new(),
                        loading: false,
                        error: Some(error),
                        phase: Phase::Failure,
                        in_flight: None,
                        ..self
                    },
                }
            }
        };

        if old_phase != new_state.phase {
            info!(
                "🎯 View phase transition: {:?} -> {:?}",
                old_phase, new_state.phase
            );
        }

        new_state
    }
}
