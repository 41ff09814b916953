pub mod api;
pub mod config;
pub mod error;
pub mod image;
pub mod view;

pub use error::{Error, Result};
