//! Interactive scaffolding flow using cliclack

use crate::pipeline::Pipeline;
use crate::product::ProductConfig;
use crate::selection::{BackendTrack, FrontendTrack, Selection};
use crate::vcs;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create flow. Every prompt can be pre-seeded by a
/// flag for non-interactive use.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create (required positional on the CLI)
    pub project_name: String,

    /// Frontend track, bypassing the prompt
    pub frontend: Option<String>,

    /// Backend/tooling track, bypassing the prompt
    pub backend: Option<String>,

    /// Author name for the closing banner, bypassing the prompt
    pub author: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    if args.project_name.trim().is_empty() {
        return Err(crate::error::ScaffoldError::Usage(
            "Please provide a project name, e.g. `create-edu-dapp my-dapp`".to_string(),
        )
        .into());
    }

    cliclack::intro(config.display_name())?;

    // Step 1: preconditions - git must be on PATH before any side effect
    check_git(config, &args)?;

    // Step 2: collect selections
    let selection = collect_selection(&args)?;

    // Target directory for the new project
    let project_dir = select_directory(&args)?;

    let pipeline = Pipeline::new(config, selection, &project_dir)?;

    // Step 3: shallow-clone the template repository
    cliclack::log::info(format!(
        "Cloning template repository ({})",
        pipeline.template_url()
    ))?;
    pipeline.fetch().await?;

    // Steps 4-6: move variants into place, merge root files, drop the clone
    let spinner = cliclack::spinner();
    spinner.start("Assembling project...");
    match pipeline.assemble().await {
        Ok(()) => spinner.stop(format!("Project assembled in {}", project_dir.display())),
        Err(e) => {
            spinner.stop("Failed to assemble project");
            return Err(e.into());
        }
    }

    // Step 7: install dependencies
    cliclack::log::info("Installing dependencies")?;
    pipeline.install().await?;

    // Step 8: differentiated next steps
    print_next_steps(config, &pipeline, &project_dir)?;

    Ok(())
}

fn check_git<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<()> {
    match vcs::ensure_git(config) {
        Ok(version) => {
            cliclack::log::success(format!("git installed ({})", version))?;
            Ok(())
        }
        Err(e) => {
            cliclack::log::error("git is not installed")?;

            if !args.yes {
                let open_docs: bool =
                    cliclack::confirm(format!("Open the docs ({})?", config.docs_url()))
                        .initial_value(false)
                        .interact()?;
                if open_docs {
                    open::that(config.docs_url())?;
                }
            }

            Err(e.into())
        }
    }
}

fn collect_selection(args: &CreateArgs) -> Result<Selection> {
    let frontend = match &args.frontend {
        Some(name) => parse_frontend(name)?,
        None => {
            let mut select = cliclack::select("Select the frontend framework");
            for track in FrontendTrack::ALL {
                select = select.item(track, track.display_name(), "");
            }
            select.interact()?
        }
    };

    let backend = match &args.backend {
        Some(name) => parse_backend(name)?,
        None => {
            let mut select = cliclack::select("Select the smart-contract tooling");
            for track in BackendTrack::ALL {
                select = select.item(track, track.display_name(), "");
            }
            select.interact()?
        }
    };

    let author = match &args.author {
        Some(name) => Some(name.clone()),
        None if args.yes => None,
        None => {
            let input: String = cliclack::input("Enter your name (optional)")
                .placeholder("anonymous")
                .default_input("")
                .required(false)
                .interact()?;
            Some(input)
        }
    };

    let selection = Selection::new(frontend, backend, author);
    cliclack::log::success(format!(
        "Tracks: {} + {}",
        selection.frontend, selection.backend
    ))?;

    Ok(selection)
}

fn parse_frontend(name: &str) -> Result<FrontendTrack> {
    FrontendTrack::parse(name).ok_or_else(|| {
        let known: Vec<&str> = FrontendTrack::ALL.iter().map(|t| t.slug()).collect();
        anyhow::anyhow!(
            "Unknown frontend track `{}`. Available tracks: {}",
            name,
            known.join(", ")
        )
    })
}

fn parse_backend(name: &str) -> Result<BackendTrack> {
    BackendTrack::parse(name).ok_or_else(|| {
        let known: Vec<&str> = BackendTrack::ALL.iter().map(|t| t.slug()).collect();
        anyhow::anyhow!(
            "Unknown backend track `{}`. Available tracks: {}",
            name,
            known.join(", ")
        )
    })
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = current_dir.join(&args.project_name);

    // Warn if directory exists and has files; re-runs replace variant
    // directories and overwrite shared root files
    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    pipeline: &Pipeline,
    project_dir: &PathBuf,
) -> Result<()> {
    let selection = pipeline.selection();
    let steps = config.next_steps(project_dir, selection);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    if let Some(author) = &selection.author_name {
        println!();
        println!("  Thank you, {}, for using {}!", author, config.display_name());
    }

    cliclack::outro(config.outro_message())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

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
            "TEST_SCAFFOLD_TUI_URL_UNSET"
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

    #[tokio::test]
    async fn test_blank_project_name_is_a_usage_error() {
        let args = CreateArgs {
            project_name: "   ".to_string(),
            ..Default::default()
        };
        let err = run(&TestConfig, args).await.unwrap_err();
        assert!(err.to_string().contains("project name"));
    }

    #[test]
    fn test_parse_frontend_flag() {
        assert_eq!(
            parse_frontend("react-nextjs").unwrap(),
            FrontendTrack::ReactNextjs
        );
        let err = parse_frontend("angular").unwrap_err();
        assert!(err.to_string().contains("react-nextjs"));
        assert!(err.to_string().contains("vue-nuxtjs"));
    }

    #[test]
    fn test_parse_backend_flag() {
        assert_eq!(parse_backend("foundry").unwrap(), BackendTrack::Foundry);
        let err = parse_backend("truffle").unwrap_err();
        assert!(err.to_string().contains("hardhat"));
    }
}
