use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use thiserror::Error;

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or no server response";
pub const EMPTY_RESULT_MESSAGE: &str = "The service returned no recipes";

pub type GenerationResult = std::result::Result<Vec<Recipe>, RequestError>;

/// Body of `POST /api/recipe/generate`. Neither field is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub ingredients: String,
    pub style_or_diet: String,
}

impl GenerationRequest {
    pub fn new(ingredients: impl Into<String>, style_or_diet: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            style_or_diet: style_or_diet.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// The image reference, if the service sent a non-blank one.
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A success body is either one recipe object or an array of them.
#[derive(Debug)]
pub(crate) enum RecipePayload {
    Many(Vec<Recipe>),
    One(Recipe),
}

impl<'de> Deserialize<'de> for RecipePayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .map(recipe_from_object)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many)
                .map_err(de::Error::custom),
            value @ Value::Object(_) => recipe_from_object(value)
                .map(Self::One)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a recipe object or array, found {other}"
            ))),
        }
    }
}

// Derived struct visitors also accept sequences, so objects are checked here
fn recipe_from_object(value: Value) -> Result<Recipe, String> {
    if !value.is_object() {
        return Err(format!("expected a recipe object, found {value}"));
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

impl From<RecipePayload> for Vec<Recipe> {
    fn from(payload: RecipePayload) -> Self {
        match payload {
            RecipePayload::Many(recipes) => recipes,
            RecipePayload::One(recipe) => vec![recipe],
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
    pub status_code: Option<u16>,
}

impl RequestError {
    pub fn new(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Transport or decoding failure: no response we could interpret.
    pub fn network() -> Self {
        Self::new(NETWORK_ERROR_MESSAGE, None)
    }

    /// Builds the error reported for a non-2xx response whose body parsed
    /// as JSON. Blank or mistyped fields fall back individually.
    pub fn from_error_body(body: &Value, http_status: u16) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(UNKNOWN_ERROR_MESSAGE);

        let status = body
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .filter(|s| (100..=999).contains(s))
            .unwrap_or(http_status);

        Self::new(message, Some(status))
    }
}
