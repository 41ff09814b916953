use super::fsm::UiState;
use crate::{
    api::{Recipe, RequestError},
    image::ImageSource,
};
use std::fmt;

pub const GENERATE_LABEL: &str = "[ Generate recipe ]";
pub const BUSY_LABEL: &str = "[ Generating... ]";

/// Renders the whole screen for `state`.
pub fn render(state: &UiState) -> String {
    Screen(state).to_string()
}

pub fn render_recipe(recipe: &Recipe, number: usize) -> String {
    RecipeCard { recipe, number }.to_string()
}

struct Screen<'a>(&'a UiState);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "Ingredients: {}", state.ingredients())?;
        writeln!(f, "Style/diet:  {}", state.style_or_diet())?;

        if state.is_loading() {
            writeln!(f, "{BUSY_LABEL} (disabled)")?;
        } else {
            writeln!(f, "{GENERATE_LABEL}")?;
        }

        if let Some(error) = state.error() {
            writeln!(f)?;
            write!(f, "{}", ErrorBanner(error))?;
        }

        for (index, recipe) in state.recipes().iter().enumerate() {
            writeln!(f)?;
            write!(
                f,
                "{}",
                RecipeCard {
                    recipe,
                    number: index + 1,
                }
            )?;
        }

        Ok(())
    }
}

struct ErrorBanner<'a>(&'a RequestError);

impl fmt::Display for ErrorBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.status_code {
            Some(status) => writeln!(f, "! Error ({status}): {}", self.0.message),
            None => writeln!(f, "! Error: {}", self.0.message),
        }
    }
}

struct RecipeCard<'a> {
    recipe: &'a Recipe,
    number: usize,
}

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.recipe;

        writeln!(f, "=== Recipe {}: {} ===", self.number, recipe.title)?;

        if let Some(ingredients) = &recipe.ingredients {
            writeln!(f, "Ingredients:")?;
            for item in ingredients {
                writeln!(f, "  - {item}")?;
            }
        }

        if let Some(steps) = &recipe.steps {
            writeln!(f, "Steps:")?;
            for (i, step) in steps.iter().enumerate() {
                writeln!(f, "  {}. {step}", i + 1)?;
            }
        }

        if let Some(url) = recipe.image() {
            match ImageSource::parse(url) {
                Ok(ImageSource::Remote(url)) => writeln!(f, "Image: {url}")?,
                Ok(ImageSource::Inline { media_type, data }) => {
                    writeln!(f, "Image: inline {media_type}, {} bytes", data.len())?
                }
                Err(_) => writeln!(f, "Image: (unreadable inline image)")?,
            }
        }

        Ok(())
    }
}
