use serde::Deserialize;

/// Entry of `GET /repos/{owner}/{repo}/collaborators`.
#[derive(Debug, Clone, Deserialize)]
pub struct Collaborator {
    pub login: String,
}

/// The subset of `GET /repos/{owner}/{repo}/issues/{number}` used for reporting.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub title: String,
}
