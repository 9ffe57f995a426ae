// src/pipeline/run.rs
// =============================================================================
// This module drives one documentation run from URL to finished results.
//
// How it works:
// 1. Parse the repository URL into owner/repo
// 2. List the repository root (one GitHub call)
// 3. For each entry that is a file with a supported extension:
//    fetch its content, generate documentation, collect the result
// 4. Pause briefly after each fetched file to respect API rate limits
//
// A run moves through explicit states:
//   Idle -> ParsingUrl -> ListingContents -> ProcessingFiles -> Completed
// and lands in Failed when parsing or listing goes wrong. Per-file
// problems never fail the run - those files are skipped with a warning
// and the run carries on, so one unreadable file can't sink the rest.
//
// Rust concepts:
// - Enums: RunState models the phases of a run
// - Generics: execute() works against any provider/model pair
// - match: Route each fetch outcome to collect, skip, or warn
// =============================================================================

use std::time::Duration;

use serde::Serialize;

use crate::docgen::{is_supported_file, DocumentationGenerator, TextModel};
use crate::github::{parse_repo_url, FetchedContent, RepositoryProvider};

// Pause after each fetched file
//
// GitHub and Gemini both rate-limit; one second per file keeps a whole-repo
// run comfortably under both. The pause is fixed, not adaptive - we don't
// read the rate-limit headers GitHub sends back.
pub const FILE_DELAY: Duration = Duration::from_secs(1);

// The phases of a documentation run
//
// Completed and Failed are terminal. An empty result set still counts as
// Completed - "nothing to document" is an answer, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    ParsingUrl,
    ListingContents,
    ProcessingFiles,
    Completed,
    Failed,
}

impl RunState {
    // What the run is doing in this state, for progress and error messages
    pub fn activity(&self) -> &'static str {
        match self {
            RunState::Idle => "waiting to start",
            RunState::ParsingUrl => "parsing the repository URL",
            RunState::ListingContents => "listing repository contents",
            RunState::ProcessingFiles => "processing files",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        }
    }
}

// Documentation for one file
//
// Serialize is for the --json output mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentationResult {
    /// The file this documentation describes
    pub file_name: String,
    /// The model's markdown response
    pub text: String,
}

// Everything a run produced
//
// results keeps insertion order, which is GitHub's listing order. If the
// listing repeats a name, both results are kept - we never deduplicate.
#[derive(Debug)]
pub struct RunReport {
    /// Terminal state: Completed or Failed
    pub state: RunState,
    /// One entry per successfully documented file, in processing order
    pub results: Vec<DocumentationResult>,
    /// Why the run failed, when it did
    pub failure: Option<String>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            state: RunState::Idle,
            results: Vec::new(),
            failure: None,
        }
    }

    // Marks the run as failed, remembering what it was doing at the time
    fn fail(mut self, message: impl AsRef<str>) -> Self {
        self.failure = Some(format!("while {}: {}", self.state.activity(), message.as_ref()));
        self.state = RunState::Failed;
        self
    }

    fn complete(mut self) -> Self {
        self.state = RunState::Completed;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.state == RunState::Completed
    }
}

// Runs one documentation pass over a repository root
//
// Parameters:
//   provider: the GitHub side (listing + content fetches)
//   generator: the AI side (prompt building + model calls)
//   repo_url: what the user typed
//   delay: pause after each fetched file (FILE_DELAY in production,
//          Duration::ZERO in tests)
//
// Returns: a RunReport; check state/failure to tell how it ended
pub async fn execute<P, M>(
    provider: &P,
    generator: &DocumentationGenerator<M>,
    repo_url: &str,
    delay: Duration,
) -> RunReport
where
    P: RepositoryProvider + Sync,
    M: TextModel + Sync,
{
    let mut report = RunReport::new();

    // Idle -> ParsingUrl: the user triggered a run
    report.state = RunState::ParsingUrl;

    // Fail fast on an empty URL before doing anything else
    if repo_url.trim().is_empty() {
        return report.fail("no repository URL was provided");
    }

    let repo = match parse_repo_url(repo_url) {
        Ok(repo) => repo,
        Err(e) => return report.fail(e.to_string()),
    };

    println!("🔎 Analyzing repository: {}", repo);

    // ParsingUrl -> ListingContents: one GET for the repository root
    report.state = RunState::ListingContents;

    let entries = match provider.list_root_contents(&repo).await {
        Ok(entries) => entries,
        Err(e) => return report.fail(e.to_string()),
    };

    // ListingContents -> ProcessingFiles: visit entries in listing order
    report.state = RunState::ProcessingFiles;

    for entry in &entries {
        // Directories, symlinks and unsupported file types are not
        // documented; the extension check only sees actual files
        if !entry.is_file() || !is_supported_file(&entry.name) {
            continue;
        }

        println!("  Processing {}...", entry.name);

        let content = match provider.fetch_file_content(entry).await {
            Ok(FetchedContent::Text(content)) => content,
            Ok(FetchedContent::NoContent { encoding }) => {
                eprintln!(
                    "  Warning: {} has no decodable content (encoding: {}), skipping",
                    entry.name, encoding
                );
                continue;
            }
            Err(e) => {
                eprintln!("  Warning: could not fetch {}: {}", entry.name, e);
                continue;
            }
        };

        match generator.generate_documentation(&content, &entry.name).await {
            Ok(text) => {
                report.results.push(DocumentationResult {
                    file_name: entry.name.clone(),
                    text,
                });
            }
            Err(e) => {
                eprintln!("  Warning: could not document {}: {}", entry.name, e);
            }
        }

        // Pause after every fetched file, documented or not, so a long
        // listing doesn't hammer the APIs
        tokio::time::sleep(delay).await;
    }

    // ProcessingFiles -> Completed, even when nothing was documented
    report.complete()
}

// Joins all results into one exportable markdown document
//
// Each file becomes a "# <name>" block followed by its documentation,
// with blank lines between files, in processing order
pub fn combine_documentation(results: &[DocumentationResult]) -> String {
    results
        .iter()
        .map(|result| format!("# {}\n{}", result.file_name, result.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does execute() take traits instead of the real clients?
//    - The tests below script listings, contents and model replies
//    - No network, no sleeping, fully deterministic
//    - main() passes the real GitHubClient and GeminiClient
//
// 2. What does `impl AsRef<str>` mean in fail()?
//    - "Anything that can be viewed as a string slice"
//    - Lets callers pass both &str literals and owned Strings
//
// 3. Why `continue` instead of returning the error?
//    - A broken file should cost us one file, not the whole run
//    - The warning still tells the user what was skipped and why
//
// 4. Why is the sleep inside the loop, after the match?
//    - Entries we never fetched (directories, unsupported names) don't
//      consume API quota, so they don't need a pause
//    - Entries we did fetch pause even when generation failed, because
//      the quota was spent either way
// -----------------------------------------------------------------------------
