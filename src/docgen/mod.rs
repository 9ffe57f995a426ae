// src/docgen/mod.rs
// =============================================================================
// This module contains all documentation generation logic.
//
// Submodules:
// - prompt: Builds the analysis prompt we send to the AI model
// - generator: Filters supported files and drives the model call
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// - Traits: The TextModel trait lets tests swap the real model for a fake
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod generator;
mod prompt;

// Re-export public items from submodules
// This lets users write `docgen::is_supported_file()` instead of
// `docgen::generator::is_supported_file()`
pub use generator::{
    file_type_of, is_supported_file, DocumentationGenerator, TextModel, SUPPORTED_EXTENSIONS,
};
pub use prompt::build_analysis_prompt;
