use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Repository Cloner Interface
///
/// Materializes a remote repository into a local directory.
///
/// # Example
///
/// ```no_run
/// use reposeek_domain::ports::RepositoryCloner;
/// use std::path::Path;
/// use std::sync::Arc;
///
/// async fn fetch(cloner: Arc<dyn RepositoryCloner>, dir: &Path) -> reposeek_domain::Result<()> {
///     cloner
///         .clone_repository("https://github.com/acme/widgets.git", dir, "develop")
///         .await
/// }
/// ```
#[async_trait]
pub trait RepositoryCloner: Send + Sync {
    /// Clone `url` into `target` and check out `branch`
    ///
    /// `target` must already exist and be empty. Failures are `Io` errors.
    async fn clone_repository(&self, url: &str, target: &Path, branch: &str) -> Result<()>;
}
