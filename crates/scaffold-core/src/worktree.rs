//! Filesystem state of a scaffolding run
//!
//! A `WorkingTree` pairs the temporary clone directory with the final target
//! directory and owns the move/copy/delete operations between them. The
//! temporary clone is placed next to the target so the variant renames stay
//! on one filesystem; a rename that still fails (e.g. cross-device) is
//! surfaced as a fatal error rather than silently falling back to a copy.

use crate::error::{Result, ScaffoldError};
use crate::selection::Selection;
use std::path::{Path, PathBuf};
use tokio::fs;

/// VCS metadata and ignore-files excluded from the root-file merge.
/// `.git` is normally a directory (already skipped as such), but worktree and
/// submodule clones use a `.git` file.
const VCS_FILES: [&str; 4] = [".git", ".gitignore", ".gitattributes", ".gitmodules"];

/// The filesystem side of one scaffolding run
#[derive(Debug)]
pub struct WorkingTree {
    clone_dir: PathBuf,
    target_dir: PathBuf,
}

impl WorkingTree {
    /// Create a working tree for `target_dir`. The temporary clone path is
    /// derived from the target name plus the process id, so it never collides
    /// with the target or with another invocation.
    pub fn new(target_dir: PathBuf) -> Self {
        let name = target_dir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());
        let clone_dir =
            target_dir.with_file_name(format!(".{}-template-{}", name, std::process::id()));
        Self {
            clone_dir,
            target_dir,
        }
    }

    /// Working tree with an explicit clone directory (used by tests)
    pub fn with_clone_dir(clone_dir: PathBuf, target_dir: PathBuf) -> Self {
        Self {
            clone_dir,
            target_dir,
        }
    }

    pub fn clone_dir(&self) -> &Path {
        &self.clone_dir
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Create the target directory (no-op when it already exists) and move
    /// the two selected variant subfolders into `target/frontend` and
    /// `target/backend`.
    pub async fn materialize(&self, selection: &Selection) -> Result<()> {
        fs::create_dir_all(&self.target_dir)
            .await
            .map_err(|e| {
                ScaffoldError::fs("Failed to create target directory", &self.target_dir, e)
            })?;

        self.relocate("frontend", selection.frontend.slug()).await?;
        self.relocate("backend", selection.backend.slug()).await?;
        Ok(())
    }

    /// Move `clone/<role>/<slug>` to `target/<role>` with rename semantics.
    /// A pre-existing destination is replaced (last-write-wins on re-runs).
    async fn relocate(&self, role: &str, slug: &str) -> Result<()> {
        let src = self.clone_dir.join(role).join(slug);
        let dest = self.target_dir.join(role);

        if !src.is_dir() {
            return Err(ScaffoldError::fs(
                "Template variant not found in clone",
                &src,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("missing {} variant `{}`", role, slug),
                ),
            ));
        }

        if dest.exists() {
            fs::remove_dir_all(&dest)
                .await
                .map_err(|e| ScaffoldError::fs("Failed to replace existing directory", &dest, e))?;
        }

        fs::rename(&src, &dest).await.map_err(|e| {
            ScaffoldError::fs(
                "Failed to move template variant (rename does not cross filesystems)",
                &dest,
                e,
            )
        })
    }

    /// Copy every regular file at the clone root into the target directory.
    /// Directories are skipped (the selected variants were already relocated,
    /// the rest is template scaffolding), as are VCS metadata and ignore-files.
    /// Existing target files are overwritten.
    pub async fn merge_root_files(&self) -> Result<()> {
        let mut entries = fs::read_dir(&self.clone_dir)
            .await
            .map_err(|e| ScaffoldError::fs("Failed to read clone directory", &self.clone_dir, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ScaffoldError::fs("Failed to read clone directory", &self.clone_dir, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| ScaffoldError::fs("Failed to stat clone entry", entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name();
            if is_vcs_file(&name.to_string_lossy()) {
                continue;
            }

            let dest = self.target_dir.join(&name);
            fs::copy(entry.path(), &dest)
                .await
                .map_err(|e| ScaffoldError::fs("Failed to copy shared file", &dest, e))?;
        }

        Ok(())
    }

    /// Remove the temporary clone. Runs unconditionally once the merge is
    /// done and strictly before dependency installation, so a failed install
    /// never leaves the clone behind.
    pub async fn cleanup(&self) -> Result<()> {
        fs::remove_dir_all(&self.clone_dir)
            .await
            .map_err(|e| ScaffoldError::fs("Failed to remove temporary clone", &self.clone_dir, e))
    }
}

fn is_vcs_file(name: &str) -> bool {
    VCS_FILES.contains(&name)
}
