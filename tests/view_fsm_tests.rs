use pretty_assertions::assert_eq;
use recipe_client::{
    api::{EMPTY_RESULT_MESSAGE, RequestError},
    view::{Phase, UiState, ViewEvent},
};
use uuid::Uuid;

mod common;
use common::create_test_recipe;

fn loading_state() -> (Uuid, UiState) {
    let request_id = Uuid::new_v4();
    let state = UiState::new()
        .transition(ViewEvent::SetIngredients("tofu, scallion".to_string()))
        .transition(ViewEvent::SetStyleOrDiet("vegetarian".to_string()))
        .transition(ViewEvent::Submit { request_id });
    (request_id, state)
}

/// Exactly one of recipes or error is on display.
fn assert_settled_exclusively(state: &UiState) {
    assert!(state.is_settled());
    assert!(!state.is_loading());
    assert_ne!(state.recipes().is_empty(), state.error().is_none());
}

#[test]
fn test_initial_state() {
    let state = UiState::new();
    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.is_loading());
    assert!(state.recipes().is_empty());
    assert_eq!(state.error(), None);
    assert_eq!(state.in_flight(), None);
    assert!(!state.is_settled());
}

#[test]
fn test_editing_inputs_only_replaces_fields() {
    let state = UiState::new()
        .transition(ViewEvent::SetIngredients("eggs".to_string()))
        .transition(ViewEvent::SetStyleOrDiet("French".to_string()));

    assert_eq!(state.ingredients(), "eggs");
    assert_eq!(state.style_or_diet(), "French");
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.request().ingredients, "eggs");
    assert_eq!(state.request().style_or_diet, "French");
}

#[test]
fn test_submit_enters_loading_and_keeps_inputs() {
    let (request_id, state) = loading_state();

    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.is_loading());
    assert_eq!(state.in_flight(), Some(request_id));
    assert_eq!(state.ingredients(), "tofu, scallion");
    assert_eq!(state.style_or_diet(), "vegetarian");
}

#[test]
fn test_success_transition() {
    let (request_id, state) = loading_state();
    let recipes = vec![create_test_recipe("Mapo Tofu")];

    let state = state.transition(ViewEvent::Completed {
        request_id,
        outcome: Ok(recipes.clone()),
    });

    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.recipes(), recipes.as_slice());
    assert_eq!(state.error(), None);
    assert_eq!(state.in_flight(), None);
    assert_settled_exclusively(&state);
}

#[test]
fn test_failure_transition() {
    let (request_id, state) = loading_state();
    let error = RequestError::new("no ingredients provided", Some(400));

    let state = state.transition(ViewEvent::Completed {
        request_id,
        outcome: Err(error.clone()),
    });

    assert_eq!(state.phase(), Phase::Failure);
    assert_eq!(state.error(), Some(&error));
    assert!(state.recipes().is_empty());
    assert_settled_exclusively(&state);
}

#[test]
fn test_empty_success_becomes_failure() {
    let (request_id, state) = loading_state();

    let state = state.transition(ViewEvent::Completed {
        request_id,
        outcome: Ok(Vec::new()),
    });

    assert_eq!(state.phase(), Phase::Failure);
    assert_eq!(
        state.error(),
        Some(&RequestError::new(EMPTY_RESULT_MESSAGE, None))
    );
    assert_settled_exclusively(&state);
}

#[test]
fn test_resubmit_clears_previous_error() {
    let (request_id, state) = loading_state();
    let state = state.transition(ViewEvent::Completed {
        request_id,
        outcome: Err(RequestError::network()),
    });
    assert!(state.error().is_some());

    let state = state.transition(ViewEvent::Submit {
        request_id: Uuid::new_v4(),
    });

    assert_eq!(state.phase(), Phase::Loading);
    assert_eq!(state.error(), None);
    assert!(state.recipes().is_empty());
}

#[test]
fn test_resubmit_clears_previous_recipes() {
    let (request_id, state) = loading_state();
    let state = state.transition(ViewEvent::Completed {
        request_id,
        outcome: Ok(vec![create_test_recipe("Mapo Tofu")]),
    });
    assert!(!state.recipes().is_empty());

    let state = state.transition(ViewEvent::Submit {
        request_id: Uuid::new_v4(),
    });

    assert!(state.is_loading());
    assert!(state.recipes().is_empty());
    assert_eq!(state.error(), None);
}

#[test]
fn test_superseded_completion_is_ignored() {
    let (first, state) = loading_state();
    let second = Uuid::new_v4();
    let state = state.transition(ViewEvent::Submit { request_id: second });

    let state = state.transition(ViewEvent::Completed {
        request_id: first,
        outcome: Ok(vec![create_test_recipe("Stale Stir-fry")]),
    });
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.recipes().is_empty());
    assert_eq!(state.in_flight(), Some(second));

    let state = state.transition(ViewEvent::Completed {
        request_id: second,
        outcome: Err(RequestError::new("quota exceeded", Some(429))),
    });
    assert_eq!(state.phase(), Phase::Failure);
    assert_eq!(state.error().unwrap().status_code, Some(429));
}

#[test]
fn test_completion_without_request_in_flight_is_ignored() {
    let state = UiState::new();
    let next = state.clone().transition(ViewEvent::Completed {
        request_id: Uuid::new_v4(),
        outcome: Ok(vec![create_test_recipe("Ghost Soup")]),
    });

    assert_eq!(next, state);
}

#[test]
fn test_duplicate_completion_is_ignored() {
    let (request_id, state) = loading_state();
    let state = state.transition(ViewEvent::Completed {
        request_id,
        outcome: Ok(vec![create_test_recipe("Mapo Tofu")]),
    });

    let replayed = state.clone().transition(ViewEvent::Completed {
        request_id,
        outcome: Err(RequestError::network()),
    });

    assert_eq!(replayed, state);
}
