// src/gemini/mod.rs
// =============================================================================
// This module wraps Google's Gemini text-generation API.
//
// Currently implements:
// - One synchronous-feeling call: prompt string in, text response out
// - Parsing the candidates/parts response shape
//
// The model choice lives here as a constant; nothing else in the program
// knows or cares which model answers.
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod client;

// Re-export the client and its error type from client.rs
pub use client::{GeminiClient, GeminiError};
