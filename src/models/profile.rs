//! Profile content shown in the portfolio
//!
//! Read-only reference data loaded once at startup from a `profile.json`
//! file, falling back to the copy embedded in the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Embedded default profile
const EMBEDDED_PROFILE: &str = include_str!("../../assets/profile.json");

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub title: String,
    /// Some certificates carry no blurb
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub employer: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schooling {
    pub school: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub period: String,
}

/// Downloadable assets and outbound link.
/// `resume` and `profile_image` are relative to the assets directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    #[serde(default)]
    pub resume: Option<PathBuf>,
    #[serde(default)]
    pub profile_image: Option<PathBuf>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Profile document
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub work: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Schooling>,
    #[serde(default)]
    pub links: Links,
}

/// Where the loaded profile came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    File(PathBuf),
    Embedded,
}

impl Profile {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FolioError::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| FolioError::Content {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The profile compiled into the binary
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_PROFILE).map_err(FolioError::EmbeddedContent)
    }

    /// Initials for the avatar badge, e.g. "Jose Fernando P. Babasa" -> "JB"
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let first = words.first().and_then(|w| w.chars().next());
        let last = if words.len() > 1 {
            words.last().and_then(|w| w.chars().next())
        } else {
            None
        };
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Candidate profile files, in priority order:
/// 1. ./folio/profile.json (local customization)
/// 2. <config dir>/folio/profile.json (user config)
pub fn profile_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("folio").join("profile.json")];
    if let Some(config) = dirs::config_dir() {
        candidates.push(config.join("folio").join("profile.json"));
    }
    candidates
}

/// Resolve the profile: an explicit path must load, otherwise the first
/// existing candidate, otherwise the embedded default.
pub fn find_profile(explicit: Option<&Path>) -> Result<(Profile, ProfileSource)> {
    if let Some(path) = explicit {
        let profile = Profile::load(path)?;
        return Ok((profile, ProfileSource::File(path.to_path_buf())));
    }

    for candidate in profile_candidates() {
        if candidate.exists() {
            let profile = Profile::load(&candidate)?;
            return Ok((profile, ProfileSource::File(candidate)));
        }
    }

    tracing::info!("no profile.json found, using embedded profile");
    Ok((Profile::embedded()?, ProfileSource::Embedded))
}
