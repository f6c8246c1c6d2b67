//! Package-manager collaborator
//!
//! npm is invoked as an opaque capability with the working directory set to
//! the part being installed. A non-zero exit aborts the pipeline; the failed
//! command's diagnostics are surfaced in the error. This applies to the
//! backend install as well as the frontend one.

use crate::error::Result;
use crate::proc;
use std::path::Path;

/// Run `npm install` inside `dir`
pub async fn npm_install(dir: &Path) -> Result<()> {
    proc::run_streamed("npm", &["install"], Some(dir)).await
}
