// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Load .env and parse command-line arguments using clap
// 2. Build the configuration and the two API clients
// 3. Run the documentation pipeline to completion
// 4. Print/export results and exit with proper code
//    (0 = completed, 1 = run failed, 2 = unexpected error)
//
// Rust concepts used:
// - async/await: Both external APIs are reached over the network
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - environment configuration
mod docgen; // src/docgen/ - prompt building and model-driven generation
mod gemini; // src/gemini/ - Gemini API client
mod github; // src/github/ - GitHub content API client
mod pipeline; // src/pipeline/ - the run state machine

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use config::Config;
use docgen::DocumentationGenerator;
use gemini::GeminiClient;
use github::GitHubClient;
use pipeline::DocumentationResult;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = documentation run completed
//   Ok(1) = documentation run failed
//   Err = unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    // Pick up GOOGLE_API_KEY (and optionally GITHUB_TOKEN) from a .env file
    // if one exists; a missing .env file is fine
    dotenvy::dotenv().ok();

    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Generate {
            repo_url,
            token,
            json,
            output,
        } => handle_generate(&repo_url, token, json, &output).await,
        Commands::Extensions => {
            print_supported_extensions();
            Ok(0)
        }
    }
}

// Handles the 'generate' subcommand
//
// Parameters:
//   repo_url: GitHub repository URL (e.g., "https://github.com/user/repo")
//   token: optional GitHub token for private repos
//   json: whether to output JSON format
//   output: path for the combined documentation file
async fn handle_generate(
    repo_url: &str,
    token: Option<String>,
    json: bool,
    output: &str,
) -> Result<i32> {
    // The API key check happens before any network call: without it no
    // run can succeed, so we stop right here
    let config = Config::from_env()?;

    let github = GitHubClient::new(token)?;
    let gemini = GeminiClient::new(config.google_api_key)?;
    let generator = DocumentationGenerator::new(gemini);

    println!("📚 Generating documentation for: {}", repo_url);

    let report = pipeline::execute(&github, &generator, repo_url, pipeline::FILE_DELAY).await;

    // A failed run gets an actionable checklist, not just the raw error
    if !report.is_completed() {
        let reason = report.failure.as_deref().unwrap_or("for an unknown reason");
        eprintln!("\n❌ Documentation run failed {}", reason);
        eprintln!();
        eprintln!("Please check:");
        eprintln!("  - The repository URL is correct");
        eprintln!("  - The repository is public or your token has access");
        eprintln!("  - The repository contains supported file types (see: repo-scribe extensions)");
        return Ok(1);
    }

    // Completed with nothing to show is not an error - the repository
    // just has no files we know how to document
    if report.results.is_empty() {
        println!("⚠️  No supported files found in the repository");
        return Ok(0);
    }

    println!(
        "✅ Documentation generated for {} file(s)\n",
        report.results.len()
    );

    print_results(&report.results, json)?;

    // Export everything as one markdown document
    let combined = pipeline::combine_documentation(&report.results);
    std::fs::write(output, combined)?;
    println!("\n📥 Combined documentation written to {}", output);

    Ok(0)
}

// Prints the results either as rendered sections or JSON
//
// Parameters:
//   results: slice of DocumentationResult structs
//   json: whether to output JSON format
fn print_results(results: &[DocumentationResult], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        // Print each file's documentation under its own header
        for result in results {
            println!("📄 {}", result.file_name);
            println!("{}", "=".repeat(79));
            println!("{}\n", result.text);
        }
    }
    Ok(())
}

// Prints the fixed allow-list of file types we document
fn print_supported_extensions() {
    println!("Supported file types:");
    for (language, extension) in docgen::SUPPORTED_EXTENSIONS {
        println!("  {:<12} {}", language, extension);
    }
}
