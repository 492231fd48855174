use crate::config::Config;
use crate::models::{Comment, Vote};

/// Selects the comments that count as votes.
///
/// A comment is a vote when its body is exactly the marker. The optional
/// allow-lists then keep only votes cast by the named users and/or on the
/// named issues. All comparisons are exact string matches.
#[derive(Debug, Clone)]
pub struct VoteFilter {
    marker: String,
    users: Option<Vec<String>>,
    issues: Option<Vec<String>>,
}

impl VoteFilter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            users: None,
            issues: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            marker: config.vote_body.clone(),
            users: config.users.clone(),
            issues: config.issues.clone(),
        }
    }

    pub fn with_users(mut self, users: Vec<String>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = Some(issues);
        self
    }

    pub fn is_vote(&self, comment: &Comment) -> bool {
        comment.body == self.marker
            && allowed(&self.users, &comment.user)
            && allowed(&self.issues, &comment.issue)
    }

    pub fn apply(&self, comments: &[Comment]) -> Vec<Vote> {
        comments
            .iter()
            .filter(|comment| self.is_vote(comment))
            .cloned()
            .collect()
    }
}

fn allowed(allow_list: &Option<Vec<String>>, value: &str) -> bool {
    allow_list
        .as_ref()
        .map_or(true, |list| list.iter().any(|item| item == value))
}

#[cfg(test)]
pub(crate) fn comment(id: u64, user: &str, body: &str, issue: &str) -> Comment {
    Comment {
        id,
        user: user.to_string(),
        body: body.to_string(),
        url: format!("https://api.github.com/repos/o/r/issues/comments/{}", id),
        issue: issue.to_string(),
    }
}
