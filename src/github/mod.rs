// src/github/mod.rs
// =============================================================================
// This module handles talking to the GitHub content API.
//
// Currently implements:
// - Parsing GitHub URLs to extract owner/repo
// - Listing the repository root (one level deep, no recursion)
// - Fetching and base64-decoding a single file's content
//
// Future enhancements (stretch goals):
// - Use octocrab for more robust access
// - Walk subdirectories recursively
// - Honor the rate-limit headers GitHub sends back
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod api;

// Re-export the client, the data types, and the provider trait from api.rs
pub use api::{
    parse_repo_url, FetchedContent, GitHubClient, GitHubError, RepoEntry, RepoRef,
    RepositoryProvider,
};
