// src/config.rs
// =============================================================================
// This module loads application configuration from the environment.
//
// The only required setting is GOOGLE_API_KEY, the key for the Gemini API.
// We read it once at startup and pass it into the Gemini client explicitly,
// so no other part of the program touches the environment.
//
// A missing key is a startup error: without it no documentation run can
// succeed, so we refuse to start one at all.
//
// Rust concepts:
// - Structs: Group configuration values together
// - Result<T, E>: Configuration loading can fail
// - thiserror: Derive the Error trait for our own error enum
// =============================================================================

use thiserror::Error;

// The environment variable that holds the Gemini API key
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

// Errors that can happen while loading configuration
//
// #[derive(Error)] from thiserror generates the std::error::Error impl,
// and #[error("...")] defines the Display message for each variant
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The Gemini API key is not present in the environment
    #[error("GOOGLE_API_KEY is not set - add it to your environment or a .env file")]
    MissingApiKey,
}

// Application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Gemini text-generation API
    pub google_api_key: String,
}

impl Config {
    // Loads configuration from environment variables
    //
    // Returns ConfigError::MissingApiKey when the key is absent or blank.
    // An empty value is as useless as a missing one, so both are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        let google_api_key = std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;

        if google_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self { google_api_key })
    }
}
