//! The scaffolding pipeline: clone, relocate, merge, clean up, install
//!
//! A strict linear sequence with abort-on-first-failure. Partially-created
//! target content is left in place for operator inspection; only the
//! temporary clone is guaranteed removed, and only once the root-file merge
//! has completed.

use crate::error::Result;
use crate::pkg;
use crate::product::ProductConfig;
use crate::selection::Selection;
use crate::vcs;
use crate::worktree::WorkingTree;
use std::path::Path;
use url::Url;

/// One scaffolding run. Steps are exposed individually so an interactive
/// frontend can interleave its own progress reporting; `run` drives them in
/// order for non-interactive use.
pub struct Pipeline {
    url: Url,
    selection: Selection,
    tree: WorkingTree,
}

impl Pipeline {
    pub fn new<C: ProductConfig>(
        config: &C,
        selection: Selection,
        target_dir: &Path,
    ) -> Result<Self> {
        let url = vcs::resolve_template_url(config)?;
        Ok(Self {
            url,
            selection,
            tree: WorkingTree::new(target_dir.to_path_buf()),
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tree(&self) -> &WorkingTree {
        &self.tree
    }

    pub fn template_url(&self) -> &Url {
        &self.url
    }

    /// Step 3: shallow-clone the template repository into the temporary
    /// clone directory
    pub async fn fetch(&self) -> Result<()> {
        vcs::clone_shallow(&self.url, self.tree.clone_dir()).await
    }

    /// Steps 4-6: move the selected variants into place, merge shared root
    /// files, then remove the temporary clone. Cleanup runs before any
    /// dependency install, so an install failure never leaves the clone
    /// behind.
    pub async fn assemble(&self) -> Result<()> {
        self.tree.materialize(&self.selection).await?;
        self.tree.merge_root_files().await?;
        self.tree.cleanup().await
    }

    /// Step 7: install frontend dependencies, and backend dependencies for
    /// tracks that use the package manager. A backend install failure aborts
    /// the run, same as a frontend one.
    pub async fn install(&self) -> Result<()> {
        pkg::npm_install(&self.tree.target_dir().join("frontend")).await?;
        if self.selection.backend.needs_package_install() {
            pkg::npm_install(&self.tree.target_dir().join("backend")).await?;
        }
        Ok(())
    }

    /// Run the whole pipeline in order
    pub async fn run(&self) -> Result<()> {
        self.fetch().await?;
        self.assemble().await?;
        self.install().await
    }
}
