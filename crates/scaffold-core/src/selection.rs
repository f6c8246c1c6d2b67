//! User selections for a single scaffolding run

use std::fmt;

/// Supported frontend stacks (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontendTrack {
    ReactNextjs,
    VueNuxtjs,
}

impl FrontendTrack {
    pub const ALL: [FrontendTrack; 2] = [FrontendTrack::ReactNextjs, FrontendTrack::VueNuxtjs];

    /// Template subfolder name under `frontend/` in the template repository
    pub fn slug(&self) -> &'static str {
        match self {
            FrontendTrack::ReactNextjs => "react-nextjs",
            FrontendTrack::VueNuxtjs => "vue-nuxtjs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FrontendTrack::ReactNextjs => "React + Next.js",
            FrontendTrack::VueNuxtjs => "Vue + Nuxt.js",
        }
    }

    /// Parse a track name as given on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "react" | "nextjs" | "react-nextjs" => Some(FrontendTrack::ReactNextjs),
            "vue" | "nuxtjs" | "vue-nuxtjs" => Some(FrontendTrack::VueNuxtjs),
            _ => None,
        }
    }
}

impl fmt::Display for FrontendTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported contract-tooling stacks (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendTrack {
    Hardhat,
    Foundry,
}

impl BackendTrack {
    pub const ALL: [BackendTrack; 2] = [BackendTrack::Hardhat, BackendTrack::Foundry];

    /// Template subfolder name under `backend/` in the template repository
    pub fn slug(&self) -> &'static str {
        match self {
            BackendTrack::Hardhat => "hardhat",
            BackendTrack::Foundry => "foundry",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BackendTrack::Hardhat => "Hardhat",
            BackendTrack::Foundry => "Foundry",
        }
    }

    /// Whether the backend needs an npm install step.
    /// Foundry manages its dependencies through forge, so the step is skipped.
    pub fn needs_package_install(&self) -> bool {
        match self {
            BackendTrack::Hardhat => true,
            BackendTrack::Foundry => false,
        }
    }

    /// Parse a track name as given on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hardhat" => Some(BackendTrack::Hardhat),
            "foundry" | "forge" => Some(BackendTrack::Foundry),
            _ => None,
        }
    }
}

impl fmt::Display for BackendTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The user's choices for one invocation - built once, immutable afterward
#[derive(Debug, Clone)]
pub struct Selection {
    pub frontend: FrontendTrack,
    pub backend: BackendTrack,
    /// Optional free-text name shown in the closing banner
    pub author_name: Option<String>,
}

impl Selection {
    pub fn new(
        frontend: FrontendTrack,
        backend: BackendTrack,
        author_name: Option<String>,
    ) -> Self {
        // Empty author input means "no author", not an empty banner line
        let author_name = author_name.filter(|s| !s.trim().is_empty());
        Self {
            frontend,
            backend,
            author_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontend_tracks() {
        assert_eq!(
            FrontendTrack::parse("react-nextjs"),
            Some(FrontendTrack::ReactNextjs)
        );
        assert_eq!(FrontendTrack::parse("REACT"), Some(FrontendTrack::ReactNextjs));
        assert_eq!(FrontendTrack::parse("vue"), Some(FrontendTrack::VueNuxtjs));
        assert_eq!(FrontendTrack::parse("svelte"), None);
    }

    #[test]
    fn test_parse_backend_tracks() {
        assert_eq!(BackendTrack::parse("hardhat"), Some(BackendTrack::Hardhat));
        assert_eq!(BackendTrack::parse("forge"), Some(BackendTrack::Foundry));
        assert_eq!(BackendTrack::parse("truffle"), None);
    }

    #[test]
    fn test_only_hardhat_needs_package_install() {
        assert!(BackendTrack::Hardhat.needs_package_install());
        assert!(!BackendTrack::Foundry.needs_package_install());
    }

    #[test]
    fn test_blank_author_is_dropped() {
        let selection = Selection::new(
            FrontendTrack::ReactNextjs,
            BackendTrack::Hardhat,
            Some("   ".to_string()),
        );
        assert!(selection.author_name.is_none());

        let selection = Selection::new(
            FrontendTrack::ReactNextjs,
            BackendTrack::Hardhat,
            Some("Ada".to_string()),
        );
        assert_eq!(selection.author_name.as_deref(), Some("Ada"));
    }
}
