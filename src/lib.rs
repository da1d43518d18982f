pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod output;
pub mod reference;

pub use cli::Cli;
pub use config::GeminiConfig;
pub use error::{GemimgError, Result};
pub use gemini::{GeminiClient, ImageClient};
pub use models::{GenerateContentResponse, ImageGenerationRequest, ImageSize, ReferenceImage};
