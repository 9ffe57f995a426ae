// src/github/api.rs
// =============================================================================
// This module fetches repository contents through the GitHub REST API.
//
// Strategy:
// - Parse the GitHub URL to extract owner and repo name
// - GET /repos/{owner}/{repo}/contents/ to list the repository root
// - GET each entry's content URL, which returns a JSON envelope with the
//   file bytes base64-encoded inside it
//
// Why the API instead of raw.githubusercontent.com?
// - The listing tells us every root entry and its type in one call
// - The same Authorization header covers private repositories
// - The content envelope works for any file GitHub can serve
//
// Rust concepts:
// - async functions: For network I/O
// - Enums with data: FetchedContent distinguishes "text" from "no content"
// - thiserror: One error enum covering every way a call can fail
// - Traits: RepositoryProvider is the seam the pipeline is tested through
// =============================================================================

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://api.github.com";

// GitHub asks clients to send this Accept header for v3 JSON responses
const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";

// GitHub rejects requests without a User-Agent, so we always send one
const USER_AGENT: &str = concat!("repo-scribe/", env!("CARGO_PKG_VERSION"));

// Everything that can go wrong while talking to GitHub
//
// The variants matter to callers: a bad URL or a failed listing kills the
// whole run, while a per-file Status/Transport/Decode error only skips
// that one file
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The repository URL could not be parsed into owner/repo
    #[error("invalid GitHub URL format: {0}")]
    InvalidUrl(String),

    /// GitHub answered with a non-success HTTP status
    #[error("GitHub request failed: HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The request never completed (DNS, TLS, timeout, ...)
    #[error("network error talking to GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    /// The content envelope claimed base64 but did not decode to UTF-8 text
    #[error("could not decode content of {file}: {reason}")]
    Decode { file: String, reason: String },
}

// A repository, identified by its owner and name
//
// Example: https://github.com/rust-lang/rust -> owner "rust-lang", name "rust"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// One entry from a repository root listing
//
// GitHub reports kind as "file", "dir", "symlink" or "submodule".
// We keep it as a string and only ever compare against "file".
#[derive(Debug, Clone, Deserialize)]
pub struct RepoEntry {
    /// Entry name, e.g. "main.py"
    pub name: String,
    /// Entry kind; the JSON field is called "type", a Rust keyword
    #[serde(rename = "type")]
    pub kind: String,
    /// API URL to fetch this entry's content envelope
    pub url: String,
}

impl RepoEntry {
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

// What fetching a file's content produced
//
// NoContent is not an error: GitHub serves symlinks and submodules with an
// encoding other than base64, and we skip those rather than fail. Keeping
// it as its own variant means callers can't mistake it for a network
// failure (which is a GitHubError instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    /// The decoded UTF-8 text of the file
    Text(String),
    /// The envelope used an encoding we don't handle
    NoContent { encoding: String },
}

// The JSON envelope GitHub returns for a single file's content URL
#[derive(Debug, Deserialize)]
struct ContentEnvelope {
    encoding: String,
    #[serde(default)]
    content: String,
}

// Parses a GitHub URL to extract owner and repository name
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
//
// Anything with fewer than two path segments after the host is rejected.
// We never check that the repository actually exists - that surfaces
// later as an HTTP 404 from the listing call.
pub fn parse_repo_url(url: &str) -> Result<RepoRef, GitHubError> {
    // Remove common prefixes
    let stripped = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");

    // Should start with github.com
    let path = match stripped.strip_prefix("github.com/") {
        Some(path) => path,
        None => return Err(GitHubError::InvalidUrl(url.to_string())),
    };

    // Split by '/' to get owner and repo, ignoring empty segments
    // (so a trailing slash doesn't count as a segment)
    let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();

    if parts.len() < 2 {
        return Err(GitHubError::InvalidUrl(url.to_string()));
    }

    let owner = parts[0].to_string();
    // Remove .git suffix if present
    let name = parts[1].trim_end_matches(".git").to_string();

    Ok(RepoRef { owner, name })
}

// The two network operations the documentation pipeline needs
//
// GitHubClient is the real implementation; tests provide fakes so the
// pipeline can run without touching the network
#[async_trait]
pub trait RepositoryProvider {
    /// Lists the repository root, in the order GitHub returns it
    async fn list_root_contents(&self, repo: &RepoRef) -> Result<Vec<RepoEntry>, GitHubError>;

    /// Fetches one entry's content envelope and decodes it
    async fn fetch_file_content(&self, entry: &RepoEntry) -> Result<FetchedContent, GitHubError>;
}

// A thin client over the GitHub content API
//
// Holds a reqwest Client (connection pooling) and the optional token.
// Without a token we are limited to public repositories and the lower
// anonymous rate limits.
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, token })
    }

    // Starts a GET request with the headers every GitHub call needs
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header(ACCEPT, ACCEPT_VALUE);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        request
    }
}

#[async_trait]
impl RepositoryProvider for GitHubClient {
    async fn list_root_contents(&self, repo: &RepoRef) -> Result<Vec<RepoEntry>, GitHubError> {
        // Trailing slash = the repository root, path ""
        let url = format!("{API_BASE}/repos/{}/{}/contents/", repo.owner, repo.name);

        let response = self.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        // The root listing is a JSON array of entries; we keep GitHub's order
        let entries = response.json::<Vec<RepoEntry>>().await?;
        Ok(entries)
    }

    async fn fetch_file_content(&self, entry: &RepoEntry) -> Result<FetchedContent, GitHubError> {
        let response = self.get(&entry.url).send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status {
                status: response.status().as_u16(),
                url: entry.url.clone(),
            });
        }

        let envelope = response.json::<ContentEnvelope>().await?;

        // Anything that isn't base64 (symlinks, submodules) has no text
        // for us to document
        if envelope.encoding != "base64" {
            return Ok(FetchedContent::NoContent {
                encoding: envelope.encoding,
            });
        }

        match decode_base64_text(&envelope.content) {
            Ok(text) => Ok(FetchedContent::Text(text)),
            Err(reason) => Err(GitHubError::Decode {
                file: entry.name.clone(),
                reason,
            }),
        }
    }
}

// Decodes a base64 payload from a content envelope into UTF-8 text
//
// GitHub wraps the base64 text with newlines every 60 characters, and the
// strict decoder rejects those, so we strip all whitespace first
fn decode_base64_text(payload: &str) -> Result<String, String> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| format!("invalid base64: {e}"))?;

    String::from_utf8(bytes).map_err(|_| "content is not valid UTF-8 text".to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[serde(rename = "type")]?
//    - GitHub's JSON field is called "type", but that's a Rust keyword
//    - rename tells serde to read "type" from JSON into our "kind" field
//
// 2. What is #[from] on an error variant?
//    - thiserror generates From<reqwest::Error> for GitHubError
//    - That's what lets the ? operator convert errors automatically
//
// 3. Why is NoContent an Ok value and not an error?
//    - "This entry has nothing to decode" is an answer, not a failure
//    - Transport problems and bad base64 ARE failures, so they're Err
//    - Separating them means callers can't mix the two cases up
//
// 4. Why a trait with one real implementation?
//    - The pipeline's tests need to script listings and file contents
//    - A fake RepositoryProvider does that without any HTTP server
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_url() {
        let repo = parse_repo_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_repo_url_with_git_suffix() {
        let repo = parse_repo_url("https://github.com/user/repo.git").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_repo_url_without_scheme() {
        let repo = parse_repo_url("github.com/acme/widgets").unwrap();
        assert_eq!(repo.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_repo_url_ignores_trailing_slash() {
        let repo = parse_repo_url("https://github.com/acme/widgets/").unwrap();
        assert_eq!(repo.name, "widgets");
    }

    #[test]
    fn test_parse_rejects_single_segment() {
        let result = parse_repo_url("https://github.com/just-an-owner");
        assert!(matches!(result, Err(GitHubError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        let result = parse_repo_url("https://gitlab.com/user/repo");
        assert!(matches!(result, Err(GitHubError::InvalidUrl(_))));
    }

    #[test]
    fn test_decode_base64_text() {
        // "print(1)" encoded
        assert_eq!(decode_base64_text("cHJpbnQoMSk=").unwrap(), "print(1)");
    }

    #[test]
    fn test_decode_base64_with_newlines() {
        // GitHub inserts line breaks into long payloads
        assert_eq!(decode_base64_text("cHJpbn\nQoMSk=\n").unwrap(), "print(1)");
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(decode_base64_text("!!! not base64 !!!").is_err());
    }

    #[test]
    fn test_decode_rejects_non_utf8_bytes() {
        // "/w==" decodes to the single byte 0xFF, which is not UTF-8
        assert!(decode_base64_text("/w==").is_err());
    }
}
