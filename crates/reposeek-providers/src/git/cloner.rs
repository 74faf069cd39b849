//! `RepositoryCloner` backed by the `git` executable

use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::RepositoryCloner;

/// Branches a fresh clone already has checked out
const DEFAULT_BRANCHES: &[&str] = &["", "main", "master"];

/// Clones with `git clone <url> <dir>` and checks out non-default branches
#[derive(Debug, Clone)]
pub struct GitCliCloner {
    git_binary: String,
}

impl GitCliCloner {
    /// Use `git` from `PATH`
    pub fn new() -> Self {
        Self::with_binary("git")
    }

    /// Use a specific git executable
    pub fn with_binary(git_binary: impl Into<String>) -> Self {
        Self {
            git_binary: git_binary.into(),
        }
    }

    /// Whether `branch` needs an explicit checkout after cloning
    pub fn needs_checkout(branch: &str) -> bool {
        !DEFAULT_BRANCHES.contains(&branch)
    }

    async fn run(&self, args: &[&str], cwd: Option<&Path>, action: &str) -> Result<()> {
        let mut command = Command::new(&self.git_binary);
        command.args(args).env("GIT_TERMINAL_PROMPT", "0");
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output: Output = command
            .output()
            .await
            .map_err(|e| {
                Error::io_with_source(format!("failed to run {}: {e}", self.git_binary), e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::io(format!("{action} failed: {}", stderr.trim())));
        }
        Ok(())
    }
}

impl Default for GitCliCloner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryCloner for GitCliCloner {
    async fn clone_repository(&self, url: &str, target: &Path, branch: &str) -> Result<()> {
        let target_str = target.to_string_lossy().into_owned();
        debug!(url, branch, target = %target.display(), "Cloning repository");

        self.run(
            &["clone", url, target_str.as_str()],
            None,
            &format!("git clone {url}"),
        )
        .await?;

        if Self::needs_checkout(branch) {
            self.run(
                &["checkout", branch],
                Some(target),
                &format!("git checkout {branch}"),
            )
            .await?;
            info!(branch, "Checked out branch");
        }

        info!(url, target = %target.display(), "Repository cloned");
        Ok(())
    }
}
