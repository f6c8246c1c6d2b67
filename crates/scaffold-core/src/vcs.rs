//! Version-control collaborator: git presence check and shallow clone
//!
//! The pipeline treats git as an opaque capability. History is irrelevant to
//! scaffolding, so clones are always depth 1.

use crate::error::{Result, ScaffoldError};
use crate::proc;
use crate::product::ProductConfig;
use std::path::Path;
use std::process::Command;
use url::Url;

/// Get the installed git version, or `None` when git is absent from PATH
pub fn git_version() -> Option<String> {
    Command::new("git")
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Fail fast when git is missing - this check runs before any side effect
pub fn ensure_git<C: ProductConfig>(config: &C) -> Result<String> {
    git_version().ok_or(ScaffoldError::MissingTool {
        tool: "git",
        docs_url: config.docs_url(),
    })
}

/// Resolve the template repository URL, honoring the product's env override
pub fn resolve_template_url<C: ProductConfig>(config: &C) -> Result<Url> {
    let url_str = std::env::var(config.template_url_env())
        .unwrap_or_else(|_| config.template_repo_url().to_string());
    Url::parse(&url_str)
        .map_err(|e| ScaffoldError::Usage(format!("Invalid template URL `{}`: {}", url_str, e)))
}

/// Shallow-clone the template repository into `dest`
pub async fn clone_shallow(url: &Url, dest: &Path) -> Result<()> {
    let dest_str = dest.to_string_lossy();
    proc::run_streamed(
        "git",
        &["clone", "--depth", "1", url.as_str(), dest_str.as_ref()],
        None,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test-scaffold"
        }
        fn display_name(&self) -> &'static str {
            "test-scaffold"
        }
        fn template_repo_url(&self) -> &'static str {
            "https://example.com/templates.git"
        }
        fn template_url_env(&self) -> &'static str {
            "TEST_SCAFFOLD_TEMPLATE_URL_UNSET"
        }
        fn docs_url(&self) -> &'static str {
            "https://example.com/docs"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
        fn next_steps(&self, _dir: &Path, _selection: &Selection) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_resolve_template_url_default() {
        let url = resolve_template_url(&TestConfig).unwrap();
        assert_eq!(url.as_str(), "https://example.com/templates.git");
    }

    #[tokio::test]
    async fn test_clone_of_missing_local_repo_fails() {
        // Local-path clones never touch the network, so this exercises the
        // failure path without an unreachable remote.
        if git_version().is_none() {
            return;
        }
        let tmp = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(tmp.path().join("no-such-repo")).unwrap();
        let dest = tmp.path().join("dest");

        let err = clone_shallow(&url, &dest).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Subprocess { .. }));
        assert!(!dest.exists());
    }
}
