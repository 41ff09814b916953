use super::types::*;
use crate::{Error, Result, config::ServiceConfig};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait RecipeClient: Send + Sync {
    /// Makes one attempt at generating recipes. Every failure comes back as
    /// a `RequestError`; nothing is raised past this boundary.
    async fn generate(&self, request: GenerationRequest) -> GenerationResult;
}

pub struct HttpRecipeClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRecipeClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let endpoint = build_endpoint(&config.base_url, &config.generate_path)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        debug!("Created recipe client for endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeClient for HttpRecipeClient {
    async fn generate(&self, request: GenerationRequest) -> GenerationResult {
        debug!(
            "Requesting recipes for ingredients={:?} style_or_diet={:?}",
            request.ingredients, request.style_or_diet
        );

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Recipe request to {} failed: {}", self.endpoint, e);
                return Err(RequestError::network());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read recipe response body: {}", e);
                return Err(RequestError::network());
            }
        };

        debug!(
            "Received recipe response with status {} ({} bytes)",
            status,
            body.len()
        );

        classify_response(status, &body)
    }
}

/// Turns a raw HTTP status and body into the normalized outcome.
pub fn classify_response(status: StatusCode, body: &[u8]) -> GenerationResult {
    if status.is_success() {
        let payload: RecipePayload = serde_json::from_slice(body).map_err(|e| {
            warn!("Could not decode recipe payload: {}", e);
            RequestError::network()
        })?;

        let recipes: Vec<Recipe> = payload.into();
        if recipes.is_empty() {
            return Err(RequestError::new(EMPTY_RESULT_MESSAGE, Some(status.as_u16())));
        }

        debug!("Decoded {} recipe(s)", recipes.len());
        Ok(recipes)
    } else {
        let error_body: Value = serde_json::from_slice(body).map_err(|e| {
            warn!("Could not decode error body for status {}: {}", status, e);
            RequestError::network()
        })?;

        let error = RequestError::from_error_body(&error_body, status.as_u16());
        warn!(
            "Recipe service reported an error: {} (status {:?})",
            error.message, error.status_code
        );
        Err(error)
    }
}

fn build_endpoint(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    Url::parse(&joined).map_err(|e| Error::endpoint(format!("{joined}: {e}")))
}
