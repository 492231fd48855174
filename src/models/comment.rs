use serde::Deserialize;

/// Login GitHub reports for comments whose author account was deleted.
pub const GHOST_LOGIN: &str = "ghost";

/// An issue comment as returned by `GET /repos/{owner}/{repo}/issues/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    pub user: Option<UserRef>,
    #[serde(default)]
    pub body: Option<String>,
    pub url: String,
    pub issue_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub login: String,
}

/// A fetched comment reduced to what the election needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub user: String,
    pub body: String,
    /// API URL of the comment itself, which is also its deletion target.
    pub url: String,
    /// Trailing path segment of the parent issue URL.
    pub issue: String,
}

/// A comment whose body matched the vote marker and survived the allow-lists.
pub type Vote = Comment;

impl From<IssueComment> for Comment {
    fn from(raw: IssueComment) -> Self {
        let issue = issue_id_from_url(&raw.issue_url).to_string();
        Self {
            id: raw.id,
            user: raw
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| GHOST_LOGIN.to_string()),
            body: raw.body.unwrap_or_default(),
            url: raw.url,
            issue,
        }
    }
}

pub fn issue_id_from_url(issue_url: &str) -> &str {
    issue_url.rsplit('/').next().unwrap_or(issue_url)
}
