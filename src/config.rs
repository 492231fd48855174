use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_VOTE_BODY: &str = "THIS";
pub const DEFAULT_MAX_USER_VOTES: u32 = 3;
pub const DEFAULT_TOKEN_ENV_VARIABLE: &str = "GITHUB_ACCESS_TOKEN";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    Winners,
    #[default]
    Voters,
    Clear,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub view: View,
    pub vote_body: String,
    pub users: Option<Vec<String>>,
    pub issues: Option<Vec<String>>,
    pub max_user_votes: u32,
    pub organization: String,
    pub repository: String,
    pub token_env_variable: String,
    pub api_url: String,
    pub github_url: String,
    pub show_voters: bool,
    pub sort_voters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: View::default(),
            vote_body: DEFAULT_VOTE_BODY.to_string(),
            users: None,
            issues: None,
            max_user_votes: DEFAULT_MAX_USER_VOTES,
            organization: "unico-labs".to_string(),
            repository: "ml-reading-club".to_string(),
            token_env_variable: DEFAULT_TOKEN_ENV_VARIABLE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            show_voters: false,
            sort_voters: false,
        }
    }
}

impl Config {
    /// Rejects values the rest of the run cannot work with. Trailing slashes
    /// on the base URLs are dropped so endpoint formatting stays uniform.
    pub fn validate(mut self) -> Result<Self> {
        if self.organization.trim().is_empty() {
            return Err(Error::Config("--organization must not be empty".to_string()));
        }
        if self.repository.trim().is_empty() {
            return Err(Error::Config("--repository must not be empty".to_string()));
        }
        if self.vote_body.is_empty() {
            return Err(Error::Config("--vote-body must not be empty".to_string()));
        }
        if self.token_env_variable.is_empty() {
            return Err(Error::Config(
                "--token-env-variable must name an environment variable".to_string(),
            ));
        }
        if matches!(&self.users, Some(users) if users.is_empty()) {
            return Err(Error::Config("--users needs at least one user name".to_string()));
        }
        if matches!(&self.issues, Some(issues) if issues.is_empty()) {
            return Err(Error::Config("--issues needs at least one issue id".to_string()));
        }

        self.api_url = self.api_url.trim_end_matches('/').to_string();
        self.github_url = self.github_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Reads the access token from the configured environment variable.
    pub fn token_from_env(&self) -> Result<String> {
        env::var(&self.token_env_variable)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Auth {
                variable: self.token_env_variable.clone(),
                organization: self.organization.clone(),
            })
    }

    /// `{api-url}/repos/{org}/{repo}`
    pub fn api_repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_url, self.organization, self.repository
        )
    }

    /// Browser URL of an issue, as printed by the winners view.
    pub fn issue_url(&self, issue: &str) -> String {
        format!(
            "{}/{}/{}/issues/{}",
            self.github_url, self.organization, self.repository, issue
        )
    }
}
