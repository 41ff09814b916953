use crate::{Error, Result, api::Recipe};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Where a recipe's picture lives. The generation service embeds freshly
/// generated images as `data:image/png;base64,...` URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Inline { media_type: String, data: Vec<u8> },
}

impl ImageSource {
    pub fn parse(url: &str) -> Result<Self> {
        let Some(rest) = url.strip_prefix("data:") else {
            return Ok(Self::Remote(url.to_string()));
        };

        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::image("data URL has no ',' separator"))?;

        let media_type = meta
            .strip_suffix(";base64")
            .ok_or_else(|| Error::image(format!("unsupported data URL encoding: {meta:?}")))?;

        let media_type = if media_type.is_empty() {
            DEFAULT_MEDIA_TYPE.to_string()
        } else {
            media_type.to_ascii_lowercase()
        };

        let data = STANDARD.decode(payload.trim())?;

        Ok(Self::Inline { media_type, data })
    }

    pub fn file_extension(&self) -> Option<&'static str> {
        match self {
            Self::Remote(_) => None,
            Self::Inline { media_type, .. } => Some(match media_type.as_str() {
                "image/png" => "png",
                "image/jpeg" | "image/jpg" => "jpg",
                "image/gif" => "gif",
                "image/webp" => "webp",
                "image/svg+xml" => "svg",
                _ => "bin",
            }),
        }
    }
}

/// Writes every inline image among `recipes` to `dir/recipe-<n>.<ext>`,
/// numbering from 1 in result order. Remote images are left alone.
pub async fn save_inline_images(dir: &Path, recipes: &[Recipe]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (index, recipe) in recipes.iter().enumerate() {
        let Some(url) = recipe.image() else {
            continue;
        };

        let source = ImageSource::parse(url)?;
        let extension = source.file_extension();
        let (ImageSource::Inline { data, .. }, Some(extension)) = (source, extension) else {
            debug!("Recipe {} has a remote image, not saving", index + 1);
            continue;
        };

        if written.is_empty() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let path = dir.join(format!("recipe-{}.{}", index + 1, extension));
        tokio::fs::write(&path, &data).await?;
        info!("Saved image for '{}' to {}", recipe.title, path.display());
        written.push(path);
    }

    Ok(written)
}
