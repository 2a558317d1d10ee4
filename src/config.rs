//! Tour configuration
//!
//! Settings for a run of the demonstrations. The CLI builds one from its flags; library callers and tests use
//! the builder methods.

use std::path::PathBuf;

use keytour_core::lang::keywords::KeywordId;

/// Configuration for a tour run
#[derive(Debug, Clone)]
pub struct TourConfig {
    /// Print a `== <title> ==` banner before each demonstration
    pub headers: bool,
    /// Directory the file-writing demonstrations use for scratch files
    pub scratch_dir: PathBuf,
    /// Only run demonstrations covering one of these keywords (empty = all)
    pub only: Vec<KeywordId>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            headers: true,
            scratch_dir: std::env::temp_dir(),
            only: Vec::new(),
        }
    }
}

impl TourConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable demonstration banners
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Set the scratch directory
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Restrict the run to demonstrations covering `keywords`
    pub fn with_only(mut self, keywords: impl IntoIterator<Item = KeywordId>) -> Self {
        self.only = keywords.into_iter().collect();
        self
    }

    /// Whether a demonstration covering `keywords` is selected
    pub fn selects(&self, keywords: &[KeywordId]) -> bool {
        self.only.is_empty() || keywords.iter().any(|k| self.only.contains(k))
    }
}
