// src/docgen/generator.rs
// =============================================================================
// This module decides which files get documented and runs the model call.
//
// Key functionality:
// - A fixed allow-list of file extensions we know how to document
// - The TextModel trait: the one thing we need from an AI backend
// - DocumentationGenerator: builds the prompt and asks the model once
//
// The generator never retries and never aborts the whole run: when a model
// call fails the error goes back to the caller, which skips that file and
// moves on to the next one.
//
// Rust concepts:
// - Traits: An interface the real Gemini client and test fakes both implement
// - Generics: DocumentationGenerator works with any TextModel
// - async/await: Model calls are network I/O
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;

use super::prompt::build_analysis_prompt;

// The file types we can document, as (language, extension) pairs
//
// The language names are only used for display (the `extensions`
// subcommand); matching is done on the extension alone
pub const SUPPORTED_EXTENSIONS: [(&str, &str); 8] = [
    ("Python", ".py"),
    ("JavaScript", ".js"),
    ("Java", ".java"),
    ("C++", ".cpp"),
    ("TypeScript", ".ts"),
    ("HTML", ".html"),
    ("CSS", ".css"),
    ("Markdown", ".md"),
];

// The capability we need from an AI text model: prompt in, text out
//
// #[async_trait] lets us put an async function in a trait.
// The real implementation is gemini::GeminiClient; tests use in-memory fakes.
#[async_trait]
pub trait TextModel {
    /// Sends one prompt to the model and returns its text response
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

// Checks if a file name has one of the supported extensions
//
// The match is a case-sensitive suffix check, so "README.md" is supported
// but "README" and "script.pyc" are not
//
// Note: this function only looks at the name. Whether the entry is a file
// or a directory is decided by the caller using the listing's type field.
pub fn is_supported_file(file_name: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|(_, ext)| file_name.ends_with(ext))
}

// Returns the file's extension without the leading dot
//
// Example: "app.py" -> "py", "README" -> ""
//
// An empty result is fine - it just makes the prompt say "this  file"
// for extensionless names
pub fn file_type_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => "",
    }
}

// Generates documentation by prompting an AI text model
//
// Generic over M so the pipeline can be tested without network access
pub struct DocumentationGenerator<M: TextModel> {
    model: M,
}

impl<M: TextModel> DocumentationGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    // Generates documentation for a single file
    //
    // Parameters:
    //   content: the file's decoded text
    //   file_name: used both in the prompt and to derive the file type
    //
    // Returns: the model's text response, or the model's error untouched
    pub async fn generate_documentation(&self, content: &str, file_name: &str) -> Result<String> {
        let file_type = file_type_of(file_name);
        let prompt = build_analysis_prompt(content, file_name, file_type);
        self.model.generate_text(&prompt).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for the model?
//    - The pipeline only cares about "prompt in, text out"
//    - A trait captures exactly that and nothing else
//    - Tests implement it with a canned reply instead of a network call
//
// 2. What is #[async_trait]?
//    - Plain traits can't have async functions (yet) without boxing
//    - The async_trait macro rewrites them into returning boxed futures
//    - Both the trait and every impl need the attribute
//
// 3. Why generics instead of Box<dyn TextModel>?
//    - The concrete model type is known at compile time
//    - Generics avoid the extra allocation and dynamic dispatch
//    - DocumentationGenerator<GeminiClient> reads clearly in main
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    // A model that replays a fixed answer, or fails on demand
    struct CannedModel {
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl TextModel for CannedModel {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            match self.reply {
                Some(reply) => Ok(reply.to_string()),
                None => Err(anyhow!("model quota exhausted")),
            }
        }
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_file("app.py"));
        assert!(is_supported_file("index.html"));
        assert!(is_supported_file("README.md"));
        assert!(is_supported_file("main.cpp"));
    }

    #[test]
    fn test_unsupported_names() {
        assert!(!is_supported_file("README"));
        assert!(!is_supported_file("script.pyc"));
        assert!(!is_supported_file("archive.tar.gz"));
        // The suffix check is case-sensitive
        assert!(!is_supported_file("APP.PY"));
    }

    #[test]
    fn test_file_type_of() {
        assert_eq!(file_type_of("app.py"), "py");
        assert_eq!(file_type_of("archive.tar.gz"), "gz");
        assert_eq!(file_type_of("README"), "");
    }

    #[tokio::test]
    async fn test_generate_documentation_returns_model_text() {
        let generator = DocumentationGenerator::new(CannedModel { reply: Some("## doc") });
        let doc = generator
            .generate_documentation("print(1)", "app.py")
            .await
            .unwrap();
        assert_eq!(doc, "## doc");
    }

    #[tokio::test]
    async fn test_generate_documentation_propagates_model_error() {
        let generator = DocumentationGenerator::new(CannedModel { reply: None });
        let result = generator.generate_documentation("print(1)", "app.py").await;
        assert!(result.is_err());
    }
}
