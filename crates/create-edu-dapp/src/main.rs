//! create-edu-dapp - scaffold a wallet-login greeting dapp for EDU Chain
//!
//! Prompts for a frontend framework and smart-contract tooling, clones the
//! template repository, assembles the selected variants into a new project
//! directory, and installs dependencies.

use anyhow::Result;
use clap::Parser;
use scaffold_core::tui::CreateArgs;
use scaffold_core::{BackendTrack, ProductConfig, Selection};
use std::path::Path;

/// EDU Chain dapp product configuration
#[derive(Clone)]
pub struct EduDappConfig;

impl ProductConfig for EduDappConfig {
    fn name(&self) -> &'static str {
        "create-edu-dapp"
    }

    fn display_name(&self) -> &'static str {
        "create-edu-dapp"
    }

    fn template_repo_url(&self) -> &'static str {
        "https://github.com/AsharibAli/create-edu-dapp"
    }

    fn template_url_env(&self) -> &'static str {
        "CREATE_EDU_DAPP_TEMPLATE_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://devdocs.educhain.xyz"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding EDU Chain dapp projects"
    }

    fn next_steps(&self, dir: &Path, selection: &Selection) -> Vec<String> {
        let mut steps = vec![
            format!("cd {}/backend", dir.display()),
            "Create backend/.env and paste your Metamask private key: ACCOUNT_PRIVATE_KEY=<YOUR_KEY>"
                .to_string(),
        ];

        match selection.backend {
            BackendTrack::Hardhat => {
                steps.push("npx hardhat compile".to_string());
                steps.push("npx hardhat test".to_string());
                steps.push("npx hardhat run scripts/deploy.ts --network opencampus".to_string());
                steps.push(
                    "npx hardhat verify --network opencampus <deployed-contract-address>"
                        .to_string(),
                );
            }
            BackendTrack::Foundry => {
                steps.push("forge compile".to_string());
                steps.push("forge test".to_string());
                steps.push(
                    "forge script script/DeployGreeter.s.sol --broadcast \
                     --rpc-url https://rpc.open-campus-codex.gelato.digital/ \
                     --gas-limit 30000000 --with-gas-price 5gwei --skip-simulation"
                        .to_string(),
                );
                steps.push(
                    "forge verify-contract --rpc-url https://rpc.open-campus-codex.gelato.digital \
                     --verifier blockscout \
                     --verifier-url 'https://opencampus-codex.blockscout.com/api/' \
                     <deployed-contract-address> src/Greeter.sol:Greeter"
                        .to_string(),
                );
            }
        }

        steps.push(format!("cd {}/frontend && npm run dev", dir.display()));
        steps
    }

    fn outro_message(&self) -> &'static str {
        "Happy Building on Open Campus L3 chain!"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-edu-dapp")]
#[command(about = "CLI for scaffolding EDU Chain dapp projects")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub project_name: String,

    /// Frontend track (react-nextjs, vue-nuxtjs), bypassing the prompt
    #[arg(long)]
    pub frontend: Option<String>,

    /// Backend/tooling track (hardhat, foundry), bypassing the prompt
    #[arg(long)]
    pub backend: Option<String>,

    /// Author name for the closing banner, bypassing the prompt
    #[arg(long)]
    pub author: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            frontend: args.frontend,
            backend: args.backend,
            author: args.author,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = EduDappConfig;

    let result = scaffold_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::FrontendTrack;

    #[test]
    fn test_project_name_is_required() {
        // Missing positional fails parsing before any side effect
        assert!(Args::try_parse_from(["create-edu-dapp"]).is_err());

        let args = Args::try_parse_from(["create-edu-dapp", "my-dapp"]).unwrap();
        assert_eq!(args.project_name, "my-dapp");
        assert!(!args.yes);
    }

    #[test]
    fn test_track_flags_are_forwarded() {
        let args = Args::try_parse_from([
            "create-edu-dapp",
            "my-dapp",
            "--frontend",
            "vue-nuxtjs",
            "--backend",
            "foundry",
            "--yes",
        ])
        .unwrap();
        let create: CreateArgs = args.into();
        assert_eq!(create.frontend.as_deref(), Some("vue-nuxtjs"));
        assert_eq!(create.backend.as_deref(), Some("foundry"));
        assert!(create.yes);
    }

    #[test]
    fn test_next_steps_differ_by_backend_track() {
        let dir = Path::new("my-dapp");
        let hardhat = EduDappConfig.next_steps(
            dir,
            &Selection::new(FrontendTrack::ReactNextjs, BackendTrack::Hardhat, None),
        );
        let foundry = EduDappConfig.next_steps(
            dir,
            &Selection::new(FrontendTrack::ReactNextjs, BackendTrack::Foundry, None),
        );

        assert!(hardhat.iter().any(|s| s.contains("npx hardhat compile")));
        assert!(hardhat.iter().all(|s| !s.contains("forge")));
        assert!(foundry.iter().any(|s| s.contains("forge compile")));
        assert!(foundry.iter().all(|s| !s.contains("hardhat")));

        // Both tracks end with the frontend dev server and mention the .env key
        for steps in [&hardhat, &foundry] {
            assert!(steps.last().unwrap().contains("npm run dev"));
            assert!(steps.iter().any(|s| s.contains("ACCOUNT_PRIVATE_KEY=")));
        }
    }

    #[test]
    fn test_outro_is_chain_specific() {
        assert!(EduDappConfig.outro_message().contains("Open Campus"));
    }
}
