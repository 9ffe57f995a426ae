// src/docgen/prompt.rs
// =============================================================================
// This module builds the instruction prompt we send to the AI model.
//
// The prompt is a fixed five-section template (overview, technical details,
// implementation, usage guide, improvements) with the file's content pasted
// verbatim at the end. Same inputs always produce the same prompt - there is
// no randomness and no I/O here.
//
// Rust concepts:
// - Pure functions: No state, no side effects, easy to test
// - format!: Build a String from a template with placeholders
// - &str vs String: Borrow the inputs, return owned output
// =============================================================================

// Builds the analysis prompt for one file
//
// Parameters:
//   content: the file's full text
//   file_name: name shown to the model (e.g., "app.py")
//   file_type: extension without the dot (e.g., "py"); may be empty for
//              files like "Makefile" that have no extension
//
// Returns: the complete prompt String, ending with the file content
pub fn build_analysis_prompt(content: &str, file_name: &str, file_type: &str) -> String {
    format!(
        "Analyze this {file_type} file '{file_name}' and provide comprehensive documentation:

1. OVERVIEW
- Purpose: Main functionality and goals
- Key Features: Primary capabilities
- Target Users: Intended audience
- Dependencies: Required libraries and versions

2. TECHNICAL DETAILS
- Architecture: Overall structure and patterns
- Components: Major classes and functions
- Data Flow: How data moves through the system
- Integration: External system connections

3. IMPLEMENTATION
- Key Functions: Important methods with parameters
- Data Structures: Main data organizations
- Error Handling: How errors are managed
- Configuration: Required settings

4. USAGE GUIDE
- Setup: Installation requirements
- Configuration: Environment setup
- Examples: Usage examples with code
- Common Cases: Typical use scenarios

5. IMPROVEMENTS
- Suggestions: Potential enhancements
- Security: Security considerations
- Performance: Optimization opportunities
- Maintenance: Code maintainability tips

CODE:
{content}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_analysis_prompt("print(1)", "app.py", "py");
        let b = build_analysis_prompt("print(1)", "app.py", "py");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_mentions_file_name_and_type() {
        let prompt = build_analysis_prompt("body {}", "style.css", "css");
        assert!(prompt.starts_with("Analyze this css file 'style.css'"));
    }

    #[test]
    fn test_prompt_ends_with_the_file_content() {
        let prompt = build_analysis_prompt("print(1)", "app.py", "py");
        assert!(prompt.ends_with("CODE:\nprint(1)\n"));
    }

    #[test]
    fn test_prompt_accepts_empty_file_type() {
        let prompt = build_analysis_prompt("all: build", "Makefile", "");
        assert!(prompt.starts_with("Analyze this  file 'Makefile'"));
    }
}
