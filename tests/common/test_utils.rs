use recipe_client::{
    api::{HttpRecipeClient, Recipe},
    config::ServiceConfig,
};

/// Create a service configuration pointing at `base_url`
pub fn create_test_service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        generate_path: "/api/recipe/generate".to_string(),
        timeout_secs: None,
    }
}

/// Create an HTTP client for a mock server
pub fn create_test_client(base_url: &str) -> HttpRecipeClient {
    HttpRecipeClient::new(&create_test_service_config(base_url))
        .expect("Failed to create recipe client")
}

/// A base URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn create_test_recipe(title: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        ingredients: Some(vec![
            "200g chicken breast".to_string(),
            "half an onion".to_string(),
        ]),
        steps: Some(vec![
            "Dice the chicken".to_string(),
            "Fry over medium heat for 6 minutes".to_string(),
        ]),
        image_url: None,
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
service:
  base_url: "http://recipes.internal:9000"
  generate_path: "/v2/generate"
  timeout_secs: 45

logs:
  level: "debug"
  json: true
"#;

/// Only some fields set; the rest fall back to defaults
pub const PARTIAL_CONFIG_YAML: &str = r#"
service:
  base_url: "https://recipes.example.com"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
service:
  base_url: ["not", "a", "string"]
  timeout_secs: "soon"
"#;
