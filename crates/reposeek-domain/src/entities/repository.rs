//! Repository identity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canonical identity of a source repository
///
/// The only way to build one from a URL is [`RepositoryId::from_url`], so two
/// spellings of the same remote always resolve to the same `owner/name`.
///
/// ```rust
/// use reposeek_domain::RepositoryId;
///
/// let with_suffix = RepositoryId::from_url("https://github.com/acme/widgets.git").unwrap();
/// let without = RepositoryId::from_url("https://github.com/acme/widgets").unwrap();
/// assert_eq!(with_suffix, without);
/// assert_eq!(with_suffix.to_string(), "acme/widgets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Derive the identity from a clone URL
    ///
    /// Takes the last two non-empty segments separated by `/` (or `:` for
    /// scp-style remotes such as `git@github.com:acme/widgets.git`) and strips
    /// a trailing `.git` from the name.
    pub fn from_url(url: &str) -> Result<Self> {
        let segments: Vec<&str> = url
            .trim()
            .split(['/', ':'])
            .filter(|segment| !segment.is_empty())
            .collect();

        let [.., owner, name] = segments.as_slice() else {
            return Err(Error::validation(format!(
                "repository URL must contain an owner and a name: {url}"
            )));
        };

        let name = name.strip_suffix(".git").unwrap_or(name);
        if name.is_empty() {
            return Err(Error::validation(format!(
                "repository name is empty in URL: {url}"
            )));
        }

        Ok(Self {
            owner: (*owner).to_string(),
            name: name.to_string(),
        })
    }

    /// Repository owner (user or organisation)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name without the `.git` suffix
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
