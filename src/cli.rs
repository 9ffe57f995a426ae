// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-scribe",
    version = "0.1.0",
    about = "A CLI tool to generate AI documentation for GitHub repositories",
    long_about = "repo-scribe reads the root of a GitHub repository, sends each supported \
                  source file to Google's Gemini model, and writes the generated \
                  documentation to a single markdown file. Set GOOGLE_API_KEY in your \
                  environment (or a .env file) before running."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (generate, extensions)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate documentation for every supported file in a repository root
    ///
    /// Example: repo-scribe generate https://github.com/rust-lang/rust
    Generate {
        /// GitHub repository URL (e.g., https://github.com/user/repo)
        ///
        /// This is a positional argument (required, no flag needed)
        repo_url: String,

        /// GitHub access token for private repositories and higher rate limits
        ///
        /// Optional; also read from the GITHUB_TOKEN environment variable.
        /// Without it, only public repositories are reachable.
        #[arg(long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// Output results in JSON format instead of rendered markdown
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,

        /// Where to write the combined documentation file
        #[arg(long, default_value = "repository_documentation.md")]
        output: String,
    },

    /// List the file types repo-scribe can document
    ///
    /// Example: repo-scribe extensions
    Extensions,
}
