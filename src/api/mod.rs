mod client;
mod types;

pub use client::{HttpRecipeClient, RecipeClient, classify_response};
pub use types::*;
