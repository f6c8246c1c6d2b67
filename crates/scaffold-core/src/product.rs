//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product binary must implement
//! to configure the scaffolding behavior for its specific needs.

use crate::selection::Selection;
use std::path::Path;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Template repository URL
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default URL of the template repository to shallow-clone
    fn template_repo_url(&self) -> &'static str;

    /// Environment variable name for overriding the template repository URL
    fn template_url_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation.
    /// The two backend tracks have non-overlapping command surfaces, so the
    /// returned steps differ by track.
    fn next_steps(&self, dir: &Path, selection: &Selection) -> Vec<String>;

    /// Closing banner shown after the next steps
    fn outro_message(&self) -> &'static str {
        "Happy building!"
    }
}
