use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Comment, Issue};

/// Operations the election pipeline needs from the hosting platform.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// All issue comments of the configured repository.
    async fn list_comments(&self) -> Result<Vec<Comment>>;

    /// Logins of everyone with access to the configured repository.
    async fn list_collaborators(&self) -> Result<Vec<String>>;

    async fn get_issue(&self, issue: &str) -> Result<Issue>;

    /// Deletes the comment behind `comment_url`.
    async fn delete_comment(&self, comment_url: &str) -> Result<()>;
}
