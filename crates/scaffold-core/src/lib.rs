//! Scaffold Core - Shared library for project scaffolding CLIs
//!
//! This library provides the core functionality for scaffolding a dapp project
//! from a template repository. It is designed to be used by CLI binaries
//! (e.g., `create-edu-dapp`) that share the same pipeline but have different
//! product configurations.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Subprocess runners (git, npm) and
//!   filesystem operations on the working tree
//! - **Layer 2: Pipeline Orchestration** - `ProductConfig` trait and `Pipeline`
//!   for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{Pipeline, ProductConfig, Selection};
//!
//! // Define your product config
//! #[derive(Clone)]
//! struct MyConfig;
//! impl ProductConfig for MyConfig {
//!     fn name(&self) -> &'static str { "myapp" }
//!     // ... implement other methods
//! }
//!
//! // Use the low-level API
//! let pipeline = Pipeline::new(&MyConfig, selection, target_dir)?;
//! pipeline.run().await?;
//! ```

pub mod error;
pub mod pipeline;
pub mod pkg;
pub mod proc;
pub mod product;
pub mod selection;
pub mod vcs;
pub mod worktree;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use pipeline::Pipeline;
pub use product::ProductConfig;
pub use selection::{BackendTrack, FrontendTrack, Selection};
pub use worktree::WorkingTree;

#[cfg(feature = "tui")]
pub use tui::run;
